//! Ports (Interfaces)
//!
//! Abstract interfaces that define how the orchestration layer
//! reaches the data service, the upload service and the session endpoint.
//!
//! Implementations of these traits live in the client crate.

mod session;
mod transport;
mod uploader;

pub use session::*;
pub use transport::*;
pub use uploader::*;
