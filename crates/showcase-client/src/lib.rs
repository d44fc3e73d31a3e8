//! Showcase API Client
//!
//! HTTP adapters for the ports defined in the `showcase` crate and the
//! workflows that sequence them.
//!
//! # Usage
//!
//! ```rust,ignore
//! use showcase_client::{ClientConfig, ShowcaseApi};
//!
//! let api = ShowcaseApi::new(&ClientConfig::from_env()?)?;
//! let page = api.fetch_all_projects(Some("Design"), None).await?;
//! let outcome = api.create_new_project(&form, &creator_id, &token).await?;
//! ```

pub mod adapters;
pub mod api;
pub mod application;
pub mod config;

pub use adapters::{HttpAssetUploader, HttpGraphqlTransport, HttpSessionClient};
pub use api::ShowcaseApi;
pub use application::{HeaderPolicy, ProjectService, UserService};
pub use config::{ClientConfig, Environment};
