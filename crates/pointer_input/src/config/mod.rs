//! Configuration system
//!
//! Serde-backed configuration types with support for TOML and RON files.

pub use serde::{Deserialize, Serialize};

use crate::foundation::math::Vec2;

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(ConfigError::Io)?;

        // Try different formats
        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, Default::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Invalid configuration value
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Construction input for a pointer region
///
/// `bounds` is the region's size (width, height). The region's placement
/// comes from the collaborating spatial component at hit-test time, not
/// from this config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointerConfig {
    /// Region size in the mouse event coordinate space (width, height)
    pub bounds: Vec2,
}

impl PointerConfig {
    /// Create a config for a region of the given size
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            bounds: Vec2::new(width, height),
        }
    }

    /// Validate the configured bounds
    ///
    /// Bounds must be finite and non-negative. Zero-size bounds are
    /// permitted; such a region contains exactly its anchor point.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.bounds.x.is_finite() || !self.bounds.y.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "bounds must be finite, got ({}, {})",
                self.bounds.x, self.bounds.y
            )));
        }
        if self.bounds.x < 0.0 || self.bounds.y < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "bounds must be non-negative, got ({}, {})",
                self.bounds.x, self.bounds.y
            )));
        }
        Ok(())
    }
}

impl Default for PointerConfig {
    fn default() -> Self {
        Self {
            bounds: Vec2::zeros(),
        }
    }
}

impl Config for PointerConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_toml() {
        let config: PointerConfig = toml::from_str("bounds = [100.0, 50.0]").unwrap();
        assert_eq!(config.bounds, Vec2::new(100.0, 50.0));
    }

    #[test]
    fn test_toml_round_trip() {
        let path = std::env::temp_dir().join("pointer_config_round_trip.toml");
        let path = path.to_str().unwrap();

        let config = PointerConfig::new(320.0, 240.0);
        config.save_to_file(path).unwrap();

        let loaded = PointerConfig::load_from_file(path).unwrap();
        assert_eq!(loaded.bounds, config.bounds);
    }

    #[test]
    fn test_ron_round_trip() {
        let path = std::env::temp_dir().join("pointer_config_round_trip.ron");
        let path = path.to_str().unwrap();

        let config = PointerConfig::new(64.0, 64.0);
        config.save_to_file(path).unwrap();

        let loaded = PointerConfig::load_from_file(path).unwrap();
        assert_eq!(loaded.bounds, config.bounds);
    }

    #[test]
    fn test_unsupported_format() {
        let result = PointerConfig::load_from_file("region.yaml");
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_validate() {
        assert!(PointerConfig::new(100.0, 100.0).validate().is_ok());
        assert!(PointerConfig::new(0.0, 0.0).validate().is_ok());

        assert!(PointerConfig::new(-1.0, 100.0).validate().is_err());
        assert!(PointerConfig::new(100.0, f32::NAN).validate().is_err());
        assert!(PointerConfig::new(f32::INFINITY, 100.0).validate().is_err());
    }
}
