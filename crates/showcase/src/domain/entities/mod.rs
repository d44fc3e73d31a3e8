//! Domain Entities
//!
//! Payloads built or consumed by this layer. Project and user records
//! returned by the backend stay opaque (`serde_json::Value`).

mod project;
mod upload;
mod user;

pub use project::*;
pub use upload::*;
pub use user::*;
