//! Header Policy
//!
//! Picks the credential for one call from the operation's access level.

use showcase::{Access, Credential, Operation};

/// Maps operations to the credential they carry
#[derive(Clone, PartialEq, Eq)]
pub struct HeaderPolicy {
    api_key: String,
}

impl std::fmt::Debug for HeaderPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HeaderPolicy")
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl HeaderPolicy {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }

    /// Credential for `operation`
    ///
    /// User-scoped writes carry `token` as a bearer token; a missing token is
    /// forwarded as empty and left for the backend to reject. Everything else
    /// carries the API key, even when a token is at hand.
    pub fn credential_for(&self, operation: Operation, token: Option<&str>) -> Credential {
        match operation.access() {
            Access::ApiKey => Credential::api_key(self.api_key.as_str()),
            Access::UserToken => Credential::bearer(token.unwrap_or_default()),
        }
    }
}
