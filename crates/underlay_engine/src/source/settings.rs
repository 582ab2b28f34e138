//! Host settings access

use std::collections::HashMap;

/// Key/value settings the host persists for a source
pub trait SettingsStore {
    /// Current value of a boolean setting, falling back to its default
    /// and then to `false`
    fn get_bool(&self, key: &str) -> bool;

    /// Set a boolean setting
    fn set_bool(&mut self, key: &str, value: bool);

    /// Register the default value of a boolean setting
    fn set_default_bool(&mut self, key: &str, value: bool);
}

/// Settings held in memory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySettings {
    values: HashMap<String, bool>,
    defaults: HashMap<String, bool>,
}

impl MemorySettings {
    /// Create empty settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Settings with one value already set
    pub fn with_bool(mut self, key: &str, value: bool) -> Self {
        self.set_bool(key, value);
        self
    }
}

impl SettingsStore for MemorySettings {
    fn get_bool(&self, key: &str) -> bool {
        self.values
            .get(key)
            .or_else(|| self.defaults.get(key))
            .copied()
            .unwrap_or(false)
    }

    fn set_bool(&mut self, key: &str, value: bool) {
        self.values.insert(key.to_string(), value);
    }

    fn set_default_bool(&mut self, key: &str, value: bool) {
        self.defaults.insert(key.to_string(), value);
    }
}
