//! Client Configuration
//!
//! Development uses a fixed local stack. Production reads every endpoint and
//! the API key from the environment (a `.env` file is honored).

use std::fmt;

use showcase::DomainError;

pub const ENV_VAR: &str = "SHOWCASE_ENV";
pub const GRAPHQL_URL_VAR: &str = "SHOWCASE_GRAPHQL_URL";
pub const API_KEY_VAR: &str = "SHOWCASE_API_KEY";
pub const SERVER_URL_VAR: &str = "SHOWCASE_SERVER_URL";

const DEV_GRAPHQL_URL: &str = "http://127.0.0.1:4000/graphql";
const DEV_API_KEY: &str = "letmein";
const DEV_SERVER_URL: &str = "http://localhost:3000";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    /// Anything other than `production` is development
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("production") => Self::Production,
            _ => Self::Development,
        }
    }
}

/// Endpoints and API key of one deployment
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub environment: Environment,
    pub graphql_url: String,
    pub api_key: String,
    /// Base URL of the app server hosting `/api/upload` and `/api/auth/token`
    pub server_url: String,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("environment", &self.environment)
            .field("graphql_url", &self.graphql_url)
            .field("api_key", &"[REDACTED]")
            .field("server_url", &self.server_url)
            .finish()
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::development()
    }
}

impl ClientConfig {
    /// Local development stack
    pub fn development() -> Self {
        Self {
            environment: Environment::Development,
            graphql_url: DEV_GRAPHQL_URL.to_string(),
            api_key: DEV_API_KEY.to_string(),
            server_url: DEV_SERVER_URL.to_string(),
        }
    }

    /// Load from process environment after reading `.env` if present
    pub fn from_env() -> Result<Self, DomainError> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "Loaded .env");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DomainError>
    where
        F: Fn(&str) -> Option<String>,
    {
        match Environment::parse(lookup(ENV_VAR).as_deref()) {
            Environment::Development => Ok(Self::development()),
            Environment::Production => {
                let required = |key: &str| {
                    lookup(key)
                        .filter(|v| !v.trim().is_empty())
                        .ok_or_else(|| {
                            DomainError::Configuration(format!(
                                "{} is required in production",
                                key
                            ))
                        })
                };

                Ok(Self {
                    environment: Environment::Production,
                    graphql_url: required(GRAPHQL_URL_VAR)?,
                    api_key: required(API_KEY_VAR)?,
                    server_url: required(SERVER_URL_VAR)?,
                })
            }
        }
    }

    pub fn with_graphql_url(mut self, url: impl Into<String>) -> Self {
        self.graphql_url = url.into();
        self
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = key.into();
        self
    }

    pub fn with_server_url(mut self, url: impl Into<String>) -> Self {
        self.server_url = url.into();
        self
    }

    pub fn upload_url(&self) -> String {
        format!("{}/api/upload", self.server_url.trim_end_matches('/'))
    }

    pub fn token_url(&self) -> String {
        format!("{}/api/auth/token", self.server_url.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_development_defaults() {
        let config = ClientConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.graphql_url, "http://127.0.0.1:4000/graphql");
        assert_eq!(config.api_key, "letmein");
        assert_eq!(config.upload_url(), "http://localhost:3000/api/upload");
        assert_eq!(config.token_url(), "http://localhost:3000/api/auth/token");
    }

    #[test]
    fn test_development_ignores_production_values() {
        let config = ClientConfig::from_lookup(lookup(&[
            (ENV_VAR, "development"),
            (API_KEY_VAR, "prod-key"),
        ]))
        .unwrap();
        assert_eq!(config.api_key, "letmein");
    }

    #[test]
    fn test_production_reads_environment() {
        let config = ClientConfig::from_lookup(lookup(&[
            (ENV_VAR, "production"),
            (GRAPHQL_URL_VAR, "https://api.example.com/graphql"),
            (API_KEY_VAR, "prod-key"),
            (SERVER_URL_VAR, "https://showcase.example.com/"),
        ]))
        .unwrap();

        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.graphql_url, "https://api.example.com/graphql");
        assert_eq!(config.api_key, "prod-key");
        assert_eq!(
            config.upload_url(),
            "https://showcase.example.com/api/upload"
        );
    }

    #[test]
    fn test_production_requires_every_value() {
        let err = ClientConfig::from_lookup(lookup(&[
            (ENV_VAR, "production"),
            (GRAPHQL_URL_VAR, "https://api.example.com/graphql"),
            (SERVER_URL_VAR, "https://showcase.example.com"),
        ]))
        .unwrap_err();

        assert!(matches!(err, DomainError::Configuration(_)));
        assert!(err.to_string().contains(API_KEY_VAR));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let rendered = format!("{:?}", ClientConfig::development());
        assert!(rendered.contains("[REDACTED]"));
        assert!(!rendered.contains("letmein"));
    }
}
