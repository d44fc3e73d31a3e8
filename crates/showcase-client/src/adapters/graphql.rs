//! HTTP GraphQL Transport
//!
//! POSTs `{query, operationName, variables}` to a single endpoint.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

use showcase::{Credential, DomainError, GraphqlRequest, GraphqlTransport};

use super::{decode_error, ensure_success, transport_error};

/// reqwest implementation of `GraphqlTransport`
#[derive(Clone)]
pub struct HttpGraphqlTransport {
    client: Client,
    endpoint: String,
}

#[derive(Deserialize)]
struct GraphqlResponse {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Vec<GraphqlErrorEntry>,
}

#[derive(Deserialize)]
struct GraphqlErrorEntry {
    message: String,
}

impl HttpGraphqlTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(Client::new(), endpoint)
    }

    pub fn with_client(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl GraphqlTransport for HttpGraphqlTransport {
    async fn send(
        &self,
        request: GraphqlRequest,
        credential: &Credential,
    ) -> Result<Value, DomainError> {
        let operation = request.operation.name();
        tracing::debug!(
            operation,
            credential = credential.kind(),
            "Sending GraphQL operation"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header(credential.header_name(), credential.header_value())
            .json(&request.body())
            .send()
            .await
            .map_err(transport_error)?;

        let response = ensure_success(response).await?;
        let payload: GraphqlResponse = response.json().await.map_err(decode_error)?;

        if !payload.errors.is_empty() {
            let messages: Vec<String> = payload.errors.into_iter().map(|e| e.message).collect();
            tracing::debug!(operation, errors = messages.len(), "GraphQL operation rejected");
            return Err(DomainError::GraphQl(messages));
        }

        Ok(payload.data.unwrap_or(Value::Null))
    }
}
