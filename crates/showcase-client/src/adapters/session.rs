//! HTTP Session Client

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use showcase::{DomainError, SessionSource};

use super::{decode_error, ensure_success, transport_error};

/// Fetches the session token payload from the app server
#[derive(Clone)]
pub struct HttpSessionClient {
    client: Client,
    token_url: String,
}

impl HttpSessionClient {
    pub fn new(token_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), token_url)
    }

    pub fn with_client(client: Client, token_url: impl Into<String>) -> Self {
        Self {
            client,
            token_url: token_url.into(),
        }
    }
}

#[async_trait]
impl SessionSource for HttpSessionClient {
    async fn fetch_token(&self) -> Result<Value, DomainError> {
        let response = self
            .client
            .get(&self.token_url)
            .send()
            .await
            .map_err(transport_error)?;

        let response = ensure_success(response).await?;
        response.json().await.map_err(decode_error)
    }
}
