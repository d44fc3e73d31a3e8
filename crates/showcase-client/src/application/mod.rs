//! Application Services (Use Cases)
//!
//! Orchestrate the ports: upload before write, listing selection and the
//! credential each call carries.

mod header_policy;
mod project_service;
mod user_service;

pub use header_policy::*;
pub use project_service::*;
pub use user_service::*;

use serde::Serialize;
use serde_json::Value;
use showcase::DomainError;

fn to_variables<S: Serialize>(value: &S) -> Result<Value, DomainError> {
    serde_json::to_value(value).map_err(|e| DomainError::Decode(e.to_string()))
}
