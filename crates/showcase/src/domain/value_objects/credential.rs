//! Credential - The single header that authenticates one data-service call

use std::fmt;

/// Header carrying the public API key
pub const API_KEY_HEADER: &str = "x-api-key";

/// Header carrying the user's bearer token
pub const AUTHORIZATION_HEADER: &str = "authorization";

/// What an operation needs to be authorized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Public reads and signup, authorized by the static API key
    ApiKey,
    /// Writes scoped to the acting user, authorized by their bearer token
    UserToken,
}

/// Credential attached to exactly one request
#[derive(Clone, PartialEq, Eq)]
pub enum Credential {
    ApiKey(String),
    Bearer(String),
}

impl Credential {
    pub fn api_key(key: impl Into<String>) -> Self {
        Self::ApiKey(key.into())
    }

    pub fn bearer(token: impl Into<String>) -> Self {
        Self::Bearer(token.into())
    }

    pub fn header_name(&self) -> &'static str {
        match self {
            Self::ApiKey(_) => API_KEY_HEADER,
            Self::Bearer(_) => AUTHORIZATION_HEADER,
        }
    }

    pub fn header_value(&self) -> String {
        match self {
            Self::ApiKey(key) => key.clone(),
            Self::Bearer(token) => format!("Bearer {}", token),
        }
    }

    /// Short label safe to log
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ApiKey(_) => "api_key",
            Self::Bearer(_) => "bearer",
        }
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(match self {
            Self::ApiKey(_) => "ApiKey",
            Self::Bearer(_) => "Bearer",
        })
        .field(&"[REDACTED]")
        .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_header() {
        let cred = Credential::api_key("letmein");
        assert_eq!(cred.header_name(), "x-api-key");
        assert_eq!(cred.header_value(), "letmein");
        assert_eq!(cred.kind(), "api_key");
    }

    #[test]
    fn test_bearer_header() {
        let cred = Credential::bearer("tok");
        assert_eq!(cred.header_name(), "authorization");
        assert_eq!(cred.header_value(), "Bearer tok");
        assert_eq!(cred.kind(), "bearer");
    }

    #[test]
    fn test_debug_redacts_secret() {
        let rendered = format!("{:?}", Credential::bearer("super-secret"));
        assert_eq!(rendered, "Bearer(\"[REDACTED]\")");
        assert!(!rendered.contains("super-secret"));
    }
}
