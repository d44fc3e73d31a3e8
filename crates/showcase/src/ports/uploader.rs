//! Asset Upload Port

use async_trait::async_trait;

use crate::domain::{DomainError, UploadOutcome};

/// Hands image references to the upload service
#[async_trait]
pub trait AssetUploader: Send + Sync {
    /// Upload `reference` (data URL or remote URL) and report where it lives
    ///
    /// Returns `Err` only for transport failures. An answer without a URL is
    /// `Ok(UploadOutcome::Failed { .. })`. Implementations never return
    /// `UploadOutcome::Skipped`.
    async fn upload(&self, reference: &str) -> Result<UploadOutcome, DomainError>;
}
