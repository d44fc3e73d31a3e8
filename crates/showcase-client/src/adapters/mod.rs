//! Adapters
//!
//! reqwest implementations of the `showcase` ports, plus recording doubles
//! for tests and offline development.

mod graphql;
pub mod mock;
mod session;
mod upload;

pub use graphql::HttpGraphqlTransport;
pub use session::HttpSessionClient;
pub use upload::HttpAssetUploader;

use reqwest::Response;
use showcase::DomainError;

/// Turn a non-2xx response into `DomainError::Api`, keeping the body
pub(crate) async fn ensure_success(response: Response) -> Result<Response, DomainError> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Failed to read response body".to_string());
    Err(DomainError::api(status.as_u16(), body))
}

pub(crate) fn transport_error(err: reqwest::Error) -> DomainError {
    DomainError::Transport(err.to_string())
}

pub(crate) fn decode_error(err: reqwest::Error) -> DomainError {
    DomainError::Decode(err.to_string())
}
