//! # domus-adapter-config-toml
//!
//! File-based configuration source: a TOML document whose top-level
//! entries are `key = ["Name", …]` string lists, e.g.
//!
//! ```toml
//! sensor = ["TemperatureSensor", "HumiditySensor"]
//! actuator = ["SwitchOnOffActuator"]
//! ```
//!
//! Read or parse failures surface as
//! [`ConfigurationError::Source`] carrying the file name and the
//! underlying cause.

use std::collections::HashMap;
use std::path::Path;

use domus_app::ports::ConfigSource;
use domus_domain::error::ConfigurationError;

/// A key → string-list mapping loaded from a TOML file.
#[derive(Debug, Clone)]
pub struct FileConfig {
    source: String,
    entries: HashMap<String, Vec<String>>,
}

impl FileConfig {
    /// Read and parse the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::Source`] when the file cannot be read
    /// or is not a TOML document of string lists.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigurationError> {
        let path = path.as_ref();
        let source = path.display().to_string();
        let content = std::fs::read_to_string(path).map_err(|err| ConfigurationError::Source {
            origin: source.clone(),
            cause: err.to_string(),
        })?;
        Self::parse(source, &content)
    }

    /// Parse an already-read TOML document, identified by `source` in
    /// error messages.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::Source`] when `content` is not a TOML
    /// document of string lists.
    pub fn parse(source: String, content: &str) -> Result<Self, ConfigurationError> {
        let entries = toml::from_str(content).map_err(|err| ConfigurationError::Source {
            origin: source.clone(),
            cause: err.to_string(),
        })?;
        Ok(Self { source, entries })
    }

    /// The identifier used in error messages, usually the file path.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }
}

impl ConfigSource for FileConfig {
    fn string_list(&self, key: &str) -> Result<Vec<String>, ConfigurationError> {
        self.entries
            .get(key)
            .cloned()
            .ok_or_else(|| ConfigurationError::MissingKey {
                key: key.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domus_app::catalogues::CapabilityCatalogues;

    #[test]
    fn should_parse_string_lists() {
        let config = FileConfig::parse(
            "test.toml".to_string(),
            "sensor = [\"TemperatureSensor\", \"WindSensor\"]\nactuator = []\n",
        )
        .unwrap();

        assert_eq!(
            config.string_list("sensor").unwrap(),
            ["TemperatureSensor", "WindSensor"]
        );
        assert!(config.string_list("actuator").unwrap().is_empty());
    }

    #[test]
    fn should_report_missing_key() {
        let config = FileConfig::parse("test.toml".to_string(), "sensor = []\n").unwrap();
        assert!(matches!(
            config.string_list("actuator"),
            Err(ConfigurationError::MissingKey { .. })
        ));
    }

    #[test]
    fn should_name_source_and_cause_when_file_is_absent() {
        let result = FileConfig::load("no-such-domus.toml");
        let Err(ConfigurationError::Source { origin, cause }) = result else {
            panic!("expected a source error");
        };
        assert_eq!(origin, "no-such-domus.toml");
        assert!(!cause.is_empty());
    }

    #[test]
    fn should_name_source_when_document_is_malformed() {
        let result = FileConfig::parse("broken.toml".to_string(), "sensor = 12\n");
        let Err(ConfigurationError::Source { origin, .. }) = result else {
            panic!("expected a source error");
        };
        assert_eq!(origin, "broken.toml");
    }

    #[test]
    fn should_load_file_from_disk() {
        let path = std::env::temp_dir().join("domus-config-test.toml");
        std::fs::write(&path, "sensor = [\"SunriseSensor\"]\nactuator = []\n").unwrap();

        let config = FileConfig::load(&path).unwrap();
        assert_eq!(config.string_list("sensor").unwrap(), ["SunriseSensor"]);
        assert_eq!(config.source(), path.display().to_string());

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn should_feed_the_catalogue_bootstrap() {
        let config = FileConfig::parse(
            "test.toml".to_string(),
            "sensor = [\"TemperatureSensor\"]\nactuator = [\"SwitchOnOffActuator\"]\n",
        )
        .unwrap();

        let catalogues = CapabilityCatalogues::load(&config).unwrap();
        assert_eq!(catalogues.sensors.recognized_names(), ["TemperatureSensor"]);
    }
}
