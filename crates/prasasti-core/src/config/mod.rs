//! Configuration for the search engine.
//!
//! Configuration is loaded from multiple sources with the following priority:
//! 1. Environment variables (highest priority)
//! 2. Project-local `prasasti.toml` file
//! 3. User config `~/.config/prasasti/config.toml`
//! 4. Built-in defaults (lowest priority)
//!
//! The only required setting is the SPARQL endpoint URL; the default points
//! at the documented local Fuseki development address.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

mod defaults;

pub use defaults::*;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Triple-store endpoint configuration.
    pub endpoint: EndpointConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: EndpointConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from default locations.
    ///
    /// Searches for config in order:
    /// 1. `./prasasti.toml` (project local)
    /// 2. `~/.config/prasasti/config.toml` (user config)
    /// 3. Falls back to defaults
    ///
    /// Environment overrides are applied regardless of source.
    pub fn load() -> Result<Self, ConfigError> {
        // Try project-local config first
        if Path::new("prasasti.toml").exists() {
            return Self::from_file("prasasti.toml");
        }

        // Try user config
        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("prasasti").join("config.toml");
            if user_config.exists() {
                return Self::from_file(&user_config);
            }
        }

        let mut config = Self::default();
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load configuration from a specific file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&content)?;

        config.apply_env_overrides();

        Ok(config)
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("PRASASTI_ENDPOINT") {
            self.endpoint.url = url;
        }
        if let Ok(secs) = std::env::var("PRASASTI_TIMEOUT_SECS") {
            if let Ok(n) = secs.parse() {
                self.endpoint.timeout_secs = n;
            }
        }
    }
}

/// Triple-store endpoint configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    /// SPARQL query URL of the Fuseki dataset.
    pub url: String,

    /// Per-query timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_ENDPOINT_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}
