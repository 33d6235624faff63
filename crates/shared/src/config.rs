//! Application configuration management.

use std::path::PathBuf;

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Remote banking API configuration.
    #[serde(default)]
    pub api: ApiConfig,
    /// Local session persistence configuration.
    #[serde(default)]
    pub session: SessionConfig,
}

/// Remote banking API configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the banking API, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:8080/api".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Local session persistence configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Path of the file holding the persisted session record.
    #[serde(default = "default_session_file")]
    pub file: PathBuf,
}

fn default_session_file() -> PathBuf {
    PathBuf::from(".atlas/session.json")
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            file: default_session_file(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("ATLAS").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
