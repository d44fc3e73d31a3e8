//! Project Application Service (Use Case)
//!
//! Orchestrates uploads and GraphQL calls for project management.

use std::sync::Arc;

use serde_json::{json, Value};

use showcase::{
    AssetUploader, CreateProjectInput, DomainError, GraphqlRequest, GraphqlTransport,
    ImageReference, Operation, ProjectForm, ProjectListing, ProjectWriteOutcome, UploadOutcome,
};

use super::{to_variables, HeaderPolicy};

/// Application service for project operations
pub struct ProjectService<T: GraphqlTransport, U: AssetUploader> {
    transport: Arc<T>,
    uploader: Arc<U>,
    policy: HeaderPolicy,
}

impl<T: GraphqlTransport, U: AssetUploader> ProjectService<T, U> {
    pub fn new(transport: Arc<T>, uploader: Arc<U>, policy: HeaderPolicy) -> Self {
        Self {
            transport,
            uploader,
            policy,
        }
    }

    async fn send(&self, request: GraphqlRequest, token: Option<&str>) -> Result<Value, DomainError> {
        let credential = self.policy.credential_for(request.operation, token);
        self.transport.send(request, &credential).await
    }

    /// Create a project
    ///
    /// The image is always uploaded first, hosted or not. Without an uploaded
    /// URL the mutation is not sent and the outcome carries no response.
    pub async fn create_new_project(
        &self,
        form: &ProjectForm,
        creator_id: &str,
        token: &str,
    ) -> Result<ProjectWriteOutcome, DomainError> {
        let upload = self.uploader.upload(&form.image).await?;

        let Some(url) = upload.url().map(str::to_string) else {
            tracing::warn!(title = %form.title, "Project not created: image upload produced no url");
            return Ok(ProjectWriteOutcome::not_submitted(upload));
        };

        let input = CreateProjectInput::new(form, &url, creator_id);
        let request = GraphqlRequest::new(
            Operation::CreateProject,
            json!({ "input": to_variables(&input)? }),
        );
        let response = self.send(request, Some(token)).await?;

        tracing::info!(title = %form.title, creator_id, "Created project");

        Ok(ProjectWriteOutcome::submitted(upload, response))
    }

    /// Update a project
    ///
    /// Only base64 data URLs are uploaded. If that upload yields no URL the
    /// form is sent with its original image.
    pub async fn edit_project(
        &self,
        form: &ProjectForm,
        project_id: &str,
        token: &str,
    ) -> Result<ProjectWriteOutcome, DomainError> {
        let upload = if ImageReference::needs_upload(&form.image) {
            self.uploader.upload(&form.image).await?
        } else {
            UploadOutcome::Skipped
        };

        let updated = match upload.url() {
            Some(url) => form.with_image(url),
            None => {
                if let UploadOutcome::Failed { reason } = &upload {
                    tracing::warn!(project_id, reason = %reason, "Keeping previous image");
                }
                form.clone()
            }
        };

        let request = GraphqlRequest::new(
            Operation::UpdateProject,
            json!({ "id": project_id, "input": to_variables(&updated)? }),
        );
        let response = self.send(request, Some(token)).await?;

        tracing::info!(project_id, "Updated project");

        Ok(ProjectWriteOutcome::submitted(upload, response))
    }

    /// Delete a project; cascading effects are the backend's business
    pub async fn delete_project(&self, id: &str, token: &str) -> Result<Value, DomainError> {
        let request = GraphqlRequest::new(Operation::DeleteProject, json!({ "id": id }));
        let response = self.send(request, Some(token)).await?;

        tracing::info!(project_id = id, "Deleted project");

        Ok(response)
    }

    /// Run one page of a project listing
    pub async fn list_projects(&self, listing: ProjectListing) -> Result<Value, DomainError> {
        self.send(listing.into_request(), None).await
    }

    /// Listing from optional arguments: a category selects the filtered,
    /// cursor-paginated query, otherwise the first page of everything
    pub async fn fetch_all_projects(
        &self,
        category: Option<&str>,
        end_cursor: Option<&str>,
    ) -> Result<Value, DomainError> {
        self.list_projects(ProjectListing::from_args(category, end_cursor))
            .await
    }

    pub async fn get_project_details(&self, id: &str) -> Result<Value, DomainError> {
        let request = GraphqlRequest::new(Operation::ProjectById, json!({ "id": id }));
        self.send(request, None).await
    }

    /// Projects of a user; `last` defaults server-side when omitted
    pub async fn get_user_projects(
        &self,
        id: &str,
        last: Option<u32>,
    ) -> Result<Value, DomainError> {
        let mut variables = json!({ "id": id });
        if let Some(last) = last {
            variables["last"] = json!(last);
        }

        self.send(GraphqlRequest::new(Operation::UserProjects, variables), None)
            .await
    }
}
