//! Configuration management for Starchart.
//!
//! Provides TOML-based configuration with XDG-compliant paths and
//! environment variable overrides.

use crate::error::{ConfigError, ConfigResult};
use crate::types::ResourceKind;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding [`ApiConfig::base_url`].
pub const ENV_API_BASE_URL: &str = "STARCHART_API_BASE_URL";

/// Environment variable overriding [`ApiConfig::timeout_secs`].
pub const ENV_API_TIMEOUT_SECS: &str = "STARCHART_API_TIMEOUT_SECS";

/// Main application configuration.
///
/// This is loaded from `~/.config/starchart/config.toml` (or platform equivalent).
/// If the file doesn't exist, default values are used.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// General application settings
    pub general: GeneralConfig,
    /// Remote catalog API settings
    pub api: ApiConfig,
}

impl AppConfig {
    /// Load configuration from disk, falling back to defaults if not found.
    ///
    /// # Errors
    /// Returns error if:
    /// - Config directory cannot be determined
    /// - File exists but cannot be read
    /// - File contents are not valid TOML
    pub fn load() -> ConfigResult<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from an explicit path, falling back to defaults if
    /// the file does not exist.
    pub fn load_from(config_path: &Path) -> ConfigResult<Self> {
        if config_path.exists() {
            tracing::debug!("Loading config from {}", config_path.display());
            let contents = fs::read_to_string(config_path)?;
            let config: Self = toml::from_str(&contents)?;
            config.validate()?;
            Ok(config)
        } else {
            tracing::debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Load configuration with environment variable overrides.
    ///
    /// Supports the following environment variables:
    /// - `STARCHART_API_BASE_URL`: Override the catalog base URL
    /// - `STARCHART_API_TIMEOUT_SECS`: Override the request timeout
    pub fn load_with_env() -> ConfigResult<Self> {
        let mut config = Self::load()?;
        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from a variable lookup (usually the process environment).
    ///
    /// Values that fail to parse are ignored.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup(ENV_API_BASE_URL) {
            tracing::debug!("Override api.base_url from env: {}", val);
            self.api.base_url = val;
        }

        if let Some(val) = lookup(ENV_API_TIMEOUT_SECS) {
            if let Ok(secs) = val.parse() {
                self.api.timeout_secs = secs;
                tracing::debug!("Override api.timeout_secs from env: {}", secs);
            }
        }
    }

    /// Check values that would otherwise fail at the first request.
    pub fn validate(&self) -> ConfigResult<()> {
        let base = self.api.base_url.trim();
        if base.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "api.base_url".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                field: "api.base_url".to_string(),
                reason: format!("must be an http(s) URL, got '{base}'"),
            });
        }
        if self.api.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "api.timeout_secs".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }

    /// Save configuration to disk.
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> ConfigResult<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to an explicit path.
    pub fn save_to(&self, config_path: &Path) -> ConfigResult<()> {
        let config_dir = config_path
            .parent()
            .ok_or_else(|| ConfigError::InvalidValue {
                field: "config_path".to_string(),
                reason: "no parent directory".to_string(),
            })?;

        fs::create_dir_all(config_dir)?;
        tracing::debug!("Saving config to {}", config_path.display());

        let contents = toml::to_string_pretty(self)?;
        fs::write(config_path, contents)?;
        Ok(())
    }

    /// Full URL of a resource collection, e.g. `https://swapi.info/api/people`.
    #[must_use]
    pub fn resource_url(&self, kind: ResourceKind) -> String {
        format!("{}/{}", self.api.base_url.trim_end_matches('/'), kind)
    }

    /// Path of the preference file, honouring `general.data_dir`.
    pub fn preferences_path(&self) -> ConfigResult<PathBuf> {
        let dir = match &self.general.data_dir {
            Some(dir) => dir.clone(),
            None => Self::data_dir()?,
        };
        Ok(dir.join("preferences.json"))
    }

    /// Get the path to the configuration file.
    ///
    /// Uses XDG base directories: `~/.config/starchart/config.toml`
    pub fn config_path() -> ConfigResult<PathBuf> {
        let dirs =
            ProjectDirs::from("com", "starchart", "starchart").ok_or(ConfigError::NoConfigDir)?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Get the data directory path.
    ///
    /// Uses XDG base directories: `~/.local/share/starchart`
    pub fn data_dir() -> ConfigResult<PathBuf> {
        let dirs =
            ProjectDirs::from("com", "starchart", "starchart").ok_or(ConfigError::NoConfigDir)?;
        Ok(dirs.data_dir().to_path_buf())
    }
}

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Directory for durable client state; defaults to the XDG data dir
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

/// Remote catalog API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base path the resource name is appended to
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// User agent string
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://swapi.info/api".to_string(),
            timeout_secs: 30,
            user_agent: "Starchart/0.1.0 (+https://github.com/starchart-catalog/starchart)"
                .to_string(),
        }
    }
}
