//! UploadOutcome - What happened to an image reference on its way to the data service

use serde::{Deserialize, Serialize};
use serde_json::Value;

const MISSING_URL_REASON: &str = "upload response did not include a url";

/// Outcome of handing an image reference to the upload service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum UploadOutcome {
    /// The upload service hosted the asset at `url`
    Uploaded { url: String },
    /// No upload was attempted (reference already hosted)
    Skipped,
    /// The upload service answered but reported no URL
    Failed { reason: String },
}

impl UploadOutcome {
    /// Interpret a successful (2xx) upload response body
    ///
    /// A non-empty string `url` means the upload happened; anything else is a
    /// soft failure whose reason is lifted from `error` or `message` if present.
    pub fn from_response(body: &Value) -> Self {
        if let Some(url) = body.get("url").and_then(|u| u.as_str()) {
            if !url.is_empty() {
                return Self::Uploaded {
                    url: url.to_string(),
                };
            }
        }

        let reason = body
            .get("error")
            .and_then(|err| err.as_str().or_else(|| err.get("message")?.as_str()))
            .or_else(|| body.get("message").and_then(|m| m.as_str()))
            .unwrap_or(MISSING_URL_REASON)
            .to_string();

        Self::Failed { reason }
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Uploaded { url } => Some(url),
            _ => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}
