//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod credential;
mod image_reference;
mod listing;

pub use credential::*;
pub use image_reference::*;
pub use listing::*;
