//! HTTP Asset Uploader
//!
//! POSTs `{ "path": <reference> }` to the app server's upload route.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use showcase::{AssetUploader, DomainError, UploadOutcome};

use super::{decode_error, ensure_success, transport_error};

/// reqwest implementation of `AssetUploader`
#[derive(Clone)]
pub struct HttpAssetUploader {
    client: Client,
    upload_url: String,
}

#[derive(Serialize)]
struct UploadRequest<'a> {
    path: &'a str,
}

impl HttpAssetUploader {
    pub fn new(upload_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), upload_url)
    }

    pub fn with_client(client: Client, upload_url: impl Into<String>) -> Self {
        Self {
            client,
            upload_url: upload_url.into(),
        }
    }
}

#[async_trait]
impl AssetUploader for HttpAssetUploader {
    async fn upload(&self, reference: &str) -> Result<UploadOutcome, DomainError> {
        tracing::debug!(reference_len = reference.len(), "Uploading asset");

        let response = self
            .client
            .post(&self.upload_url)
            .json(&UploadRequest { path: reference })
            .send()
            .await
            .map_err(transport_error)?;

        let response = ensure_success(response).await?;
        let body: Value = response.json().await.map_err(decode_error)?;

        let outcome = UploadOutcome::from_response(&body);
        if let UploadOutcome::Failed { reason } = &outcome {
            tracing::warn!(reason = %reason, "Upload service returned no url");
        }

        Ok(outcome)
    }
}
