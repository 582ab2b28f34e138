//! Configuration system
//!
//! The underlay exposes a single user option, whether the ship and its flag
//! trail are drawn. The host persists it in its own settings object; the
//! [`Config`] file formats are there for tooling and tests.

pub use serde::{Serialize, Deserialize};

use crate::source::SettingsStore;

/// Settings key for the ship toggle
pub const SHIP_KEY: &str = "ship";

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(ConfigError::Io)?;

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
            ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
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
}

/// User-facing options of one underlay source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UnderlayConfig {
    /// Draw the spacecraft and its flag trail
    pub ship: bool,
}

impl Config for UnderlayConfig {}

impl UnderlayConfig {
    /// Read the options from host settings
    pub fn from_settings(settings: &impl SettingsStore) -> Self {
        Self {
            ship: settings.get_bool(SHIP_KEY),
        }
    }

    /// Write the options into host settings
    pub fn write_to(&self, settings: &mut impl SettingsStore) {
        settings.set_bool(SHIP_KEY, self.ship);
    }

    /// Register default values with the host settings
    pub fn register_defaults(settings: &mut impl SettingsStore) {
        let defaults = Self::default();
        settings.set_default_bool(SHIP_KEY, defaults.ship);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::MemorySettings;

    #[test]
    fn test_default_hides_ship() {
        assert!(!UnderlayConfig::default().ship);
    }

    #[test]
    fn test_settings_round_trip() {
        let mut settings = MemorySettings::new();
        UnderlayConfig { ship: true }.write_to(&mut settings);

        assert!(settings.get_bool(SHIP_KEY));
        assert_eq!(UnderlayConfig::from_settings(&settings), UnderlayConfig { ship: true });
    }

    #[test]
    fn test_register_defaults() {
        let mut settings = MemorySettings::new();
        UnderlayConfig::register_defaults(&mut settings);

        assert!(!UnderlayConfig::from_settings(&settings).ship);

        // A user value overrides the default
        settings.set_bool(SHIP_KEY, true);
        assert!(UnderlayConfig::from_settings(&settings).ship);
    }

    #[test]
    fn test_toml_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("underlay.toml");
        let path = path.to_str().unwrap();

        UnderlayConfig { ship: true }.save_to_file(path).unwrap();
        let contents = std::fs::read_to_string(path).unwrap();
        assert!(contents.contains("ship = true"));

        let loaded = UnderlayConfig::load_from_file(path).unwrap();
        assert!(loaded.ship);
    }

    #[test]
    fn test_ron_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("underlay.ron");
        let path = path.to_str().unwrap();

        UnderlayConfig { ship: true }.save_to_file(path).unwrap();
        assert!(UnderlayConfig::load_from_file(path).unwrap().ship);
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.toml");
        std::fs::write(&path, "").unwrap();

        let loaded = UnderlayConfig::load_from_file(path.to_str().unwrap()).unwrap();
        assert_eq!(loaded, UnderlayConfig::default());
    }

    #[test]
    fn test_unsupported_format() {
        let result = UnderlayConfig { ship: false }.save_to_file("underlay.ini");
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }
}
