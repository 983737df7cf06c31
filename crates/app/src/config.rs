//! In-memory configuration source, mostly for tests and demos.

use std::collections::HashMap;

use domus_domain::error::ConfigurationError;

use crate::ports::ConfigSource;

/// A key → string-list mapping held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryConfig {
    entries: HashMap<String, Vec<String>>,
}

impl MemoryConfig {
    /// Create an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare `values` under `key`, replacing any previous declaration.
    #[must_use]
    pub fn with<I, S>(mut self, key: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries
            .insert(key.into(), values.into_iter().map(Into::into).collect());
        self
    }
}

impl ConfigSource for MemoryConfig {
    fn string_list(&self, key: &str) -> Result<Vec<String>, ConfigurationError> {
        self.entries
            .get(key)
            .cloned()
            .ok_or_else(|| ConfigurationError::MissingKey {
                key: key.to_string(),
            })
    }
}
