// Rust guideline compliant 2026-10-18

//! Configuration management for storeflow.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File name looked up inside the configuration directory.
pub const CONFIG_FILE_NAME: &str = "storeflow.toml";

/// Error code recorded when a call fails without a structured response.
pub const CONNECTION_ERROR_CODE: &str = "SERVER_TIMEOUT_CONNECTION_ERROR";

/// JSON pointer to the error payload inside a response body.
pub const ERROR_POINTER: &str = "/errors/msg";

/// Configuration for outcome reporting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Error code used when no structured response was received.
    #[serde(default = "default_connection_error_code")]
    pub connection_error_code: String,

    /// JSON pointer locating the error payload in a response body.
    #[serde(default = "default_error_pointer")]
    pub error_pointer: String,
}

fn default_connection_error_code() -> String {
    CONNECTION_ERROR_CODE.to_string()
}

fn default_error_pointer() -> String {
    ERROR_POINTER.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            connection_error_code: default_connection_error_code(),
            error_pointer: default_error_pointer(),
        }
    }
}

impl Config {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `<dir>/storeflow.toml`
    /// 3. Environment variables with `STOREFLOW_` prefix
    ///
    /// # Arguments
    ///
    /// * `dir` - Directory containing the configuration file
    ///
    /// # Returns
    ///
    /// A Config struct with values from file and environment variables applied.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(dir: &Path) -> Result<Self> {
        let mut config = Self::default();

        let config_path = dir.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            config = toml::from_str(&content)
                .map_err(|e| Error::InvalidConfig(format!("Invalid config file: {}", e)))?;
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `STOREFLOW_CONNECTION_ERROR_CODE` - Connection failure error code
    /// - `STOREFLOW_ERROR_POINTER` - JSON pointer to the error payload
    ///
    /// Values are checked afterwards by `validate`.
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("STOREFLOW_CONNECTION_ERROR_CODE") {
            self.connection_error_code = val;
        }

        if let Ok(val) = std::env::var("STOREFLOW_ERROR_POINTER") {
            self.error_pointer = val;
        }
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - connection_error_code is empty
    /// - error_pointer is not a JSON pointer
    fn validate(&self) -> Result<()> {
        if self.connection_error_code.trim().is_empty() {
            return Err(Error::InvalidConfig(
                "connection_error_code must not be empty".to_string(),
            ));
        }

        if !self.error_pointer.starts_with('/') {
            return Err(Error::InvalidConfig(format!(
                "error_pointer must start with '/', got '{}'",
                self.error_pointer
            )));
        }

        Ok(())
    }

    /// Saves the configuration to a TOML file.
    ///
    /// # Arguments
    ///
    /// * `dir` - Directory to write `storeflow.toml` into
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be created or written
    /// - Serialization fails
    pub fn save(&self, dir: &Path) -> Result<()> {
        let config_path = dir.join(CONFIG_FILE_NAME);
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::InvalidConfig(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}
