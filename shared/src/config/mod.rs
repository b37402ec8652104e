//! Configuration module for the data-access layer
//!
//! Settings come from an external properties source: an optional
//! `config/application.toml` file layered under `MEMBERBOARD_`-prefixed
//! environment variables. Every setting is validated before any component is
//! built; invalid settings abort startup.

pub mod database;
pub mod mapper;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// Re-export commonly used types
pub use database::DatabaseConfig;
pub use mapper::MapperConfig;

/// Errors raised while loading or validating configuration
///
/// These are fatal: a missing or invalid setting prevents startup.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required setting: {key}")]
    MissingSetting { key: String },

    #[error("Invalid setting {key}: {reason}")]
    InvalidSetting { key: String, reason: String },

    #[error("Failed to read configuration: {0}")]
    Source(#[from] ::config::ConfigError),
}

/// Complete application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Database connection and pool configuration
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Mapper discovery configuration
    #[serde(default)]
    pub mapper: MapperConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database: DatabaseConfig::default(),
            mapper: MapperConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the external properties source
    ///
    /// Layers an optional `config/application.toml` file under environment
    /// variables (`MEMBERBOARD_DATABASE__URL`, `MEMBERBOARD_MAPPER__LOCATIONS`
    /// and so on, with `__` separating nested keys), then validates the
    /// result.
    pub fn load() -> Result<Self, ConfigError> {
        let settings = ::config::Config::builder()
            .add_source(::config::File::with_name("config/application").required(false))
            .add_source(
                // `__` separates nested keys; the prefix keeps its single
                // underscore (MEMBERBOARD_DATABASE__URL).
                ::config::Environment::with_prefix("MEMBERBOARD")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        let config: AppConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Create configuration from plain environment variables
    ///
    /// Uses the `DATABASE_URL` / `MAPPER_LOCATIONS` family of variables.
    pub fn from_env() -> Self {
        Self {
            database: DatabaseConfig::from_env(),
            mapper: MapperConfig::from_env(),
        }
    }

    /// Validate every sub-configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.database.validate()?;
        self.mapper.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_database_fails_validation() {
        let mut config = AppConfig::default();
        config.database.max_connections = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_env_override_reaches_nested_keys() {
        std::env::set_var(
            "MEMBERBOARD_DATABASE__URL",
            "mysql://env-host:3306/memberboard",
        );
        let loaded = AppConfig::load();
        std::env::remove_var("MEMBERBOARD_DATABASE__URL");

        assert_eq!(
            loaded.unwrap().database.url,
            "mysql://env-host:3306/memberboard"
        );
    }
}
