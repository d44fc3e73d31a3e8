//! Configuration management for Showcase CLI
//!
//! Stores endpoint overrides and the bearer token in ~/.config/showcase/config.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use showcase_client::ClientConfig;

const CONFIG_DIR: &str = "showcase";
const CONFIG_FILE: &str = "config.toml";

/// CLI Configuration
///
/// Every field is optional; unset endpoints fall back to the environment
/// (`SHOWCASE_ENV` and friends).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graphql_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_url: Option<String>,
    /// Bearer token used for project writes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Default creator for new projects
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join(CONFIG_DIR);
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        let config: Config =
            toml::from_str(&content).with_context(|| "Failed to parse config file")?;

        Ok(config)
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let dir = Self::config_dir()?;
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create config directory {:?}", dir))?;

        let path = Self::config_path()?;
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&path, content)
            .with_context(|| format!("Failed to write config to {:?}", path))?;

        Ok(())
    }

    pub fn set_token(&mut self, token: String) {
        self.token = Some(token);
    }

    pub fn clear_token(&mut self) -> bool {
        self.token.take().is_some()
    }

    /// Token from the command line, else the stored one
    pub fn resolve_token(&self, flag: Option<String>) -> Option<String> {
        flag.or_else(|| self.token.clone())
    }

    /// Creator from the command line, else the stored user
    pub fn resolve_user_id(&self, flag: Option<String>) -> Option<String> {
        flag.or_else(|| self.user_id.clone())
    }

    /// Apply file overrides on top of an environment-derived config
    pub fn apply(&self, mut client: ClientConfig) -> ClientConfig {
        if let Some(url) = &self.graphql_url {
            client = client.with_graphql_url(url.clone());
        }
        if let Some(key) = &self.api_key {
            client = client.with_api_key(key.clone());
        }
        if let Some(url) = &self.server_url {
            client = client.with_server_url(url.clone());
        }
        client
    }
}
