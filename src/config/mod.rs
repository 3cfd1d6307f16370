//! Configuration management for taskop

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{ConfigError, Result};

/// API host used when neither the flag, the environment nor the config file set one
pub const DEFAULT_API_HOST: &str = "http://localhost:8279";

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the task service (scheme + host + port)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_host: Option<String>,

    /// User preferences
    #[serde(default)]
    pub preferences: Preferences,
}

/// User preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preferences {
    /// Default output format
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// How long a transient message stays on an HTML page
    #[serde(default = "default_message_timeout")]
    pub message_timeout_secs: u64,
}

fn default_message_timeout() -> u64 {
    3
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            format: None,
            message_timeout_secs: default_message_timeout(),
        }
    }
}

impl Config {
    /// Directory holding the config and session files
    pub fn home_dir() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".taskop"))
    }

    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        Ok(Self::home_dir()?.join("config.yaml"))
    }

    /// Resolve an optional override to a concrete path
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration from a specific path, treating a missing file as the defaults
    pub fn load_from(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        Ok(config)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;

        std::fs::write(&path, contents)?;

        Ok(())
    }

    /// Resolve the API base URL: explicit override, then config file, then default.
    ///
    /// Trailing slashes are stripped so paths can be appended directly.
    pub fn api_base_url(&self, override_host: Option<&str>) -> String {
        let host = override_host
            .or(self.api_host.as_deref())
            .unwrap_or(DEFAULT_API_HOST);
        host.trim_end_matches('/').to_string()
    }
}
