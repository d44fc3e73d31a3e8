//! Showcase API
//!
//! Single entry point bundling the workflows with their transport, uploader
//! and session source.

use std::sync::Arc;

use reqwest::Client;
use serde_json::Value;

use showcase::{
    AssetUploader, DomainError, GraphqlTransport, NewUser, ProjectForm, ProjectListing,
    ProjectWriteOutcome, SessionSource, UploadOutcome,
};

use crate::adapters::{HttpAssetUploader, HttpGraphqlTransport, HttpSessionClient};
use crate::application::{HeaderPolicy, ProjectService, UserService};
use crate::config::ClientConfig;

const USER_AGENT: &str = concat!("showcase-client/", env!("CARGO_PKG_VERSION"));

/// API access layer over the data, upload and session services
///
/// Holds no per-call state: every request carries its own credential, so one
/// instance can serve concurrent reads and writes.
pub struct ShowcaseApi<
    T: GraphqlTransport = HttpGraphqlTransport,
    U: AssetUploader = HttpAssetUploader,
    S: SessionSource = HttpSessionClient,
> {
    projects: ProjectService<T, U>,
    users: UserService<T>,
    uploader: Arc<U>,
    session: Arc<S>,
}

impl ShowcaseApi {
    /// HTTP-backed API for one deployment
    pub fn new(config: &ClientConfig) -> Result<Self, DomainError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| DomainError::Configuration(format!("Failed to build HTTP client: {e}")))?;

        tracing::debug!(?config, "Building Showcase API");

        Ok(Self::with_ports(
            Arc::new(HttpGraphqlTransport::with_client(
                client.clone(),
                config.graphql_url.clone(),
            )),
            Arc::new(HttpAssetUploader::with_client(
                client.clone(),
                config.upload_url(),
            )),
            Arc::new(HttpSessionClient::with_client(client, config.token_url())),
            &config.api_key,
        ))
    }

    /// HTTP-backed API configured from the environment
    pub fn from_env() -> Result<Self, DomainError> {
        Self::new(&ClientConfig::from_env()?)
    }
}

impl<T: GraphqlTransport, U: AssetUploader, S: SessionSource> ShowcaseApi<T, U, S> {
    pub fn with_ports(transport: Arc<T>, uploader: Arc<U>, session: Arc<S>, api_key: &str) -> Self {
        let policy = HeaderPolicy::new(api_key);
        Self {
            projects: ProjectService::new(transport.clone(), uploader.clone(), policy.clone()),
            users: UserService::new(transport, policy),
            uploader,
            session,
        }
    }

    pub fn projects(&self) -> &ProjectService<T, U> {
        &self.projects
    }

    pub fn users(&self) -> &UserService<T> {
        &self.users
    }

    // ============================================
    // Users
    // ============================================

    pub async fn get_user(&self, email: &str) -> Result<Value, DomainError> {
        self.users.get_user(email).await
    }

    pub async fn create_user(
        &self,
        name: &str,
        email: &str,
        avatar_url: &str,
    ) -> Result<Value, DomainError> {
        self.users
            .create_user(&NewUser::new(name, email, avatar_url))
            .await
    }

    // ============================================
    // Session & uploads
    // ============================================

    pub async fn fetch_token(&self) -> Result<Value, DomainError> {
        self.session.fetch_token().await
    }

    pub async fn upload_image(&self, reference: &str) -> Result<UploadOutcome, DomainError> {
        self.uploader.upload(reference).await
    }

    // ============================================
    // Projects
    // ============================================

    pub async fn create_new_project(
        &self,
        form: &ProjectForm,
        creator_id: &str,
        token: &str,
    ) -> Result<ProjectWriteOutcome, DomainError> {
        self.projects
            .create_new_project(form, creator_id, token)
            .await
    }

    pub async fn edit_project(
        &self,
        form: &ProjectForm,
        project_id: &str,
        token: &str,
    ) -> Result<ProjectWriteOutcome, DomainError> {
        self.projects.edit_project(form, project_id, token).await
    }

    pub async fn delete_project(&self, id: &str, token: &str) -> Result<Value, DomainError> {
        self.projects.delete_project(id, token).await
    }

    pub async fn list_projects(&self, listing: ProjectListing) -> Result<Value, DomainError> {
        self.projects.list_projects(listing).await
    }

    pub async fn fetch_all_projects(
        &self,
        category: Option<&str>,
        end_cursor: Option<&str>,
    ) -> Result<Value, DomainError> {
        self.projects.fetch_all_projects(category, end_cursor).await
    }

    pub async fn get_project_details(&self, id: &str) -> Result<Value, DomainError> {
        self.projects.get_project_details(id).await
    }

    pub async fn get_user_projects(
        &self,
        id: &str,
        last: Option<u32>,
    ) -> Result<Value, DomainError> {
        self.projects.get_user_projects(id, last).await
    }
}
