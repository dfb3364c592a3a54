use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Environment variable overriding `api.base_url`.
pub const BASE_URL_ENV: &str = "SIMPLE_BITCOIN_BASE_URL";
/// Environment variable overriding `api.update_blockchain_url`.
pub const UPDATE_BLOCKCHAIN_URL_ENV: &str = "SIMPLE_BITCOIN_UPDATE_BLOCKCHAIN_URL";

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

/// Values that take precedence over the config file and the environment.
///
/// Filled from command-line flags; `None` leaves the loaded value untouched.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub base_url: Option<String>,
    pub update_blockchain_url: Option<String>,
    pub log_file: Option<PathBuf>,
    pub log_level: Option<String>,
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/simple-bitcoin-wallet/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("simple-bitcoin-wallet").join("config.toml")
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Applies environment overrides read from the process environment.
    pub fn apply_env(&mut self) {
        self.apply_env_from(|key| std::env::var(key).ok());
    }

    /// Applies environment overrides using `lookup` to resolve variables.
    ///
    /// Empty values are ignored.
    pub fn apply_env_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(url) = non_empty(BASE_URL_ENV) {
            self.api.base_url = url;
        }
        if let Some(url) = non_empty(UPDATE_BLOCKCHAIN_URL_ENV) {
            self.api.update_blockchain_url = url;
        }
    }

    /// Applies command-line overrides.
    pub fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(url) = overrides.base_url {
            self.api.base_url = url;
        }
        if let Some(url) = overrides.update_blockchain_url {
            self.api.update_blockchain_url = url;
        }
        if let Some(file) = overrides.log_file {
            self.logging.file = Some(file);
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Loads the file at `path`, then layers environment and CLI overrides
    /// on top and validates the result.
    ///
    /// Precedence: defaults < file < environment < command line.
    pub fn resolve(path: &Path, overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        let mut config = Self::load_from(path)?;
        config.apply_env();
        config.apply_overrides(overrides);
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - Both endpoint URLs parse and use http or https
    /// - Timeouts, tick rate and notification duration are non-zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_url("api.base_url", &self.api.base_url)?;
        validate_url("api.update_blockchain_url", &self.api.update_blockchain_url)?;

        if self.api.timeout_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "api.timeout_seconds must be greater than zero".to_string(),
            });
        }
        if self.api.connect_timeout_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "api.connect_timeout_seconds must be greater than zero".to_string(),
            });
        }
        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "ui.tick_rate_ms must be greater than zero".to_string(),
            });
        }
        if self.ui.toast_duration_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "ui.toast_duration_ms must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}

fn validate_url(field: &str, value: &str) -> Result<(), ConfigError> {
    let url = reqwest::Url::parse(value).map_err(|e| ConfigError::ValidationError {
        message: format!("{} '{}' is not a valid URL: {}", field, value, e),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(ConfigError::ValidationError {
            message: format!("{} must use http or https, got '{}'", field, other),
        }),
    }
}
