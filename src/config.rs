//! Application configuration
//!
//! Layered configuration: built-in defaults, then optional `config/default`,
//! `config/local`, and `config` files, then `DISASTER_ETL_*` environment
//! variables.

use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::{EtlError, Result};

/// Application configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EtlConfig {
    pub logging: LoggingConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub file_path: Option<String>,
    pub format: String, // "json" or "text"
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub busy_timeout_secs: u64,
}

impl Default for EtlConfig {
    fn default() -> Self {
        Self {
            logging: LoggingConfig {
                level: "info".to_string(),
                file_path: None,
                format: "text".to_string(),
            },
            storage: StorageConfig { busy_timeout_secs: 5 },
        }
    }
}

impl EtlConfig {
    /// Load configuration from multiple sources with precedence
    pub fn load() -> Result<Self> {
        let config = Self::build_sources()
            .map_err(|e| EtlError::InvalidConfig(format!("Failed to load configuration: {e}")))?;

        let etl_config: Self = config
            .try_deserialize()
            .map_err(|e| EtlError::InvalidConfig(format!("Failed to deserialize configuration: {e}")))?;

        etl_config.validate()?;
        Ok(etl_config)
    }

    fn build_sources() -> std::result::Result<Config, ConfigError> {
        Config::builder()
            // Start with default values
            .set_default("logging.level", "info")?
            .set_default("logging.format", "text")?
            .set_default("storage.busy_timeout_secs", 5)?
            // Add config files if they exist
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(File::with_name("config").required(false))
            // Add environment variables with prefix
            .add_source(Environment::with_prefix("DISASTER_ETL").separator("__"))
            .build()
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            return Err(EtlError::InvalidConfig(format!(
                "Invalid log level: {}. Must be one of: {valid_levels:?}",
                self.logging.level
            )));
        }

        let valid_formats = ["text", "json"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            return Err(EtlError::InvalidConfig(format!(
                "Invalid log format: {}. Must be one of: {valid_formats:?}",
                self.logging.format
            )));
        }

        if self.storage.busy_timeout_secs == 0 {
            return Err(EtlError::InvalidConfig(
                "busy_timeout_secs must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Get log level from environment or config
    #[must_use]
    pub fn get_log_level(&self) -> String {
        std::env::var("RUST_LOG").unwrap_or_else(|_| self.logging.level.clone())
    }

    /// Storage busy timeout as a [`Duration`]
    #[must_use]
    pub const fn busy_timeout(&self) -> Duration {
        Duration::from_secs(self.storage.busy_timeout_secs)
    }
}
