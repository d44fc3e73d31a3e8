//! Domain Errors
//!
//! Error type returned by every port. Soft upload failures are not errors;
//! they are reported through `UploadOutcome::Failed`.

use thiserror::Error;

/// Errors surfaced by the data service, the upload service or configuration
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("API error ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("GraphQL error: {}", .0.join("; "))]
    GraphQl(Vec<String>),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl DomainError {
    pub fn api<T: Into<String>>(status: u16, body: T) -> Self {
        Self::Api {
            status,
            body: body.into(),
        }
    }

    /// True when the backend answered with 401/403
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Api { status, .. } if *status == 401 || *status == 403)
    }
}
