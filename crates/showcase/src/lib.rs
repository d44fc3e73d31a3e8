//! Showcase Domain Library
//!
//! Core types and interfaces for the Showcase project gallery API layer.
//!
//! # Architecture
//!
//! This crate follows the same ports-and-adapters split as the client crate built on it:
//!
//! - **Domain Layer** (`domain/`): Plain data and classification logic
//!   - `entities/`: Project forms, user input, upload outcomes
//!   - `value_objects/`: Credentials, image references, listing requests
//!   - `errors/`: Error type shared by every port
//!
//! - **Operations** (`operations`): Named GraphQL documents sent to the data service
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `GraphqlTransport`: sends one operation with an explicit credential
//!   - `AssetUploader`: turns an image reference into a hosted URL
//!   - `SessionSource`: fetches the current auth token payload
//!
//! # Usage
//!
//! ```rust,ignore
//! use showcase::{Credential, GraphqlRequest, Operation, ProjectListing};
//!
//! let request = ProjectListing::default().into_request();
//! let data = transport.send(request, &Credential::api_key("letmein")).await?;
//! ```

pub mod domain;
pub mod operations;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    Access, CreateProjectInput, Credential, CreatorLink, DomainError, ImageReference, NewUser,
    ProjectForm, ProjectListing, ProjectWriteOutcome, UploadOutcome, DEFAULT_PAGE_SIZE,
};
pub use operations::{GraphqlRequest, Operation};
pub use ports::{AssetUploader, GraphqlTransport, SessionSource};
