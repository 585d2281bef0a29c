//! Configuration management for beescore.
//!
//! Loads configuration from ${BEESCORE_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the external authentication service.
    pub api_base_url: String,
    /// Delay before the post-sign-up redirect to the login screen, in milliseconds.
    pub redirect_delay_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: Self::DEFAULT_API_BASE_URL.to_string(),
            redirect_delay_ms: Self::DEFAULT_REDIRECT_DELAY_MS,
        }
    }
}

impl Config {
    /// Default backend base URL (local development server).
    pub const DEFAULT_API_BASE_URL: &'static str = "http://localhost:5000";
    /// Default sign-up redirect delay.
    pub const DEFAULT_REDIRECT_DELAY_MS: u64 = 2000;

    /// Loads configuration from the default path.
    /// Returns defaults if the file doesn't exist.
    ///
    /// # Errors
    /// Returns an error if the operation fails.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from an explicit path.
    ///
    /// # Errors
    /// Returns an error if the operation fails.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config from {}", path.display()))
    }

    /// Saves configuration to the default path.
    ///
    /// # Errors
    /// Returns an error if the operation fails.
    pub fn save(&self) -> Result<()> {
        let path = paths::config_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(&path, contents)
            .with_context(|| format!("Failed to write config to {}", path.display()))
    }

    /// Resolves the API base URL, letting `BEESCORE_API_URL` override the file value.
    pub fn resolved_api_base_url(&self) -> String {
        std::env::var("BEESCORE_API_URL").unwrap_or_else(|_| self.api_base_url.clone())
    }

    /// Returns the sign-up redirect delay as a `Duration`.
    pub fn redirect_delay(&self) -> Duration {
        Duration::from_millis(self.redirect_delay_ms)
    }
}

pub mod paths {
    //! Path resolution for beescore configuration and data directories.
    //!
    //! BEESCORE_HOME resolution order:
    //! 1. BEESCORE_HOME environment variable (if set)
    //! 2. ~/.config/beescore (default)

    use std::path::PathBuf;

    /// Returns the beescore home directory.
    ///
    /// Checks BEESCORE_HOME env var first, falls back to ~/.config/beescore
    pub fn beescore_home() -> PathBuf {
        if let Ok(home) = std::env::var("BEESCORE_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir()
            .map(|h| h.join(".config").join("beescore"))
            .expect("Could not determine home directory")
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        beescore_home().join("config.toml")
    }

    /// Returns the path to the persisted session file.
    pub fn session_path() -> PathBuf {
        beescore_home().join("session.json")
    }

    /// Returns the directory used for file logging.
    pub fn log_dir() -> PathBuf {
        beescore_home().join("logs")
    }
}
