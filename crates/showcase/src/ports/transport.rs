//! GraphQL Transport Port

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::{Credential, DomainError};
use crate::operations::GraphqlRequest;

/// Sends operations to the GraphQL data service
///
/// The credential is an argument of every call; implementations must not
/// keep authentication state between calls.
///
/// # Example
///
/// ```rust,ignore
/// use showcase::{Credential, GraphqlRequest, GraphqlTransport, Operation};
///
/// let request = GraphqlRequest::new(Operation::ProjectById, json!({ "id": "p1" }));
/// let data = transport.send(request, &Credential::api_key("letmein")).await?;
/// ```
#[async_trait]
pub trait GraphqlTransport: Send + Sync {
    /// Send one operation and return the `data` member of the response
    ///
    /// Network failures, non-2xx statuses and GraphQL `errors` are returned
    /// as `DomainError` without retry.
    async fn send(
        &self,
        request: GraphqlRequest,
        credential: &Credential,
    ) -> Result<Value, DomainError>;
}
