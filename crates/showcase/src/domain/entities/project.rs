//! Project - Form submitted by the caller and the payloads derived from it

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::UploadOutcome;

/// Project fields supplied by the caller
///
/// `image` is either a hosted URL or an embedded data-scheme payload that
/// still has to go through the upload service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectForm {
    pub title: String,
    pub description: String,
    pub image: String,
    pub live_site_url: String,
    pub github_url: String,
    pub category: String,
}

impl ProjectForm {
    /// Copy of this form pointing at a hosted image
    pub fn with_image(&self, url: impl Into<String>) -> Self {
        Self {
            image: url.into(),
            ..self.clone()
        }
    }
}

/// Link to the user that owns a new project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatorLink {
    pub link: String,
}

/// `input` of the createProject mutation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectInput {
    #[serde(flatten)]
    pub form: ProjectForm,
    pub created_by: CreatorLink,
}

impl CreateProjectInput {
    /// Build the create payload. The image always comes from the upload service.
    pub fn new(form: &ProjectForm, uploaded_url: &str, creator_id: &str) -> Self {
        Self {
            form: form.with_image(uploaded_url),
            created_by: CreatorLink {
                link: creator_id.to_string(),
            },
        }
    }
}

/// Result of a create/edit workflow
///
/// `response` is `None` only when the create workflow stopped before
/// submitting the mutation because the upload produced no URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectWriteOutcome {
    pub upload: UploadOutcome,
    pub response: Option<Value>,
}

impl ProjectWriteOutcome {
    pub fn submitted(upload: UploadOutcome, response: Value) -> Self {
        Self {
            upload,
            response: Some(response),
        }
    }

    pub fn not_submitted(upload: UploadOutcome) -> Self {
        Self {
            upload,
            response: None,
        }
    }

    pub fn is_submitted(&self) -> bool {
        self.response.is_some()
    }
}
