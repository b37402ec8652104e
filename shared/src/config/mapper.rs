//! Mapper discovery configuration

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Configuration for mapper document discovery and type aliasing
///
/// `locations` is a glob pattern matching the mapper documents to load;
/// `type_alias_namespace` names the alias namespace that mapping definitions
/// refer to.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MapperConfig {
    /// Glob pattern matching mapper documents
    pub locations: String,

    /// Namespace the registered type aliases belong to
    pub type_alias_namespace: String,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            locations: String::from("mappers/*_mapper.toml"),
            type_alias_namespace: String::from("memberboard.domain"),
        }
    }
}

impl MapperConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let locations = std::env::var("MAPPER_LOCATIONS")
            .unwrap_or_else(|_| "mappers/*_mapper.toml".to_string());
        let type_alias_namespace = std::env::var("MAPPER_TYPE_ALIAS_NAMESPACE")
            .unwrap_or_else(|_| "memberboard.domain".to_string());

        Self {
            locations,
            type_alias_namespace,
        }
    }

    /// Create a new mapper configuration with a location pattern
    pub fn new(locations: impl Into<String>) -> Self {
        Self {
            locations: locations.into(),
            ..Default::default()
        }
    }

    /// Check every field before the mapping factory is built
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.locations.trim().is_empty() {
            return Err(ConfigError::MissingSetting {
                key: "mapper.locations".to_string(),
            });
        }
        if self.type_alias_namespace.trim().is_empty() {
            return Err(ConfigError::MissingSetting {
                key: "mapper.type_alias_namespace".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        assert!(MapperConfig::default().validate().is_ok());
    }

    #[test]
    fn test_empty_locations_is_rejected() {
        let config = MapperConfig::new("  ");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MissingSetting { .. })
        ));
    }

    #[test]
    fn test_empty_namespace_is_rejected() {
        let mut config = MapperConfig::default();
        config.type_alias_namespace = String::new();
        assert!(config.validate().is_err());
    }
}
