//! Session Port

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::DomainError;

/// Source of the current session's auth token payload
#[async_trait]
pub trait SessionSource: Send + Sync {
    /// Fetch the token payload, returned unmodified
    async fn fetch_token(&self) -> Result<Value, DomainError>;
}
