//! Catalogue bootstrap — build both capability catalogues from a
//! configuration source.

use domus_domain::catalogue::{ActuatorCatalogue, Catalogue, SensorCatalogue};
use domus_domain::error::ConfigurationError;

use crate::ports::ConfigSource;

/// Configuration key declaring the recognized sensor model names.
pub const SENSOR_KEY: &str = "sensor";

/// Configuration key declaring the recognized actuator model names.
pub const ACTUATOR_KEY: &str = "actuator";

/// The pair of catalogues every device resolution goes through.
#[derive(Debug, Clone)]
pub struct CapabilityCatalogues {
    pub sensors: SensorCatalogue,
    pub actuators: ActuatorCatalogue,
}

impl CapabilityCatalogues {
    /// Read the `sensor` and `actuator` keys from `source` and build the
    /// catalogues. Empty lists yield valid, empty catalogues.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] when the source is unreadable or
    /// does not declare one of the keys.
    pub fn load(source: &impl ConfigSource) -> Result<Self, ConfigurationError> {
        let sensors = Catalogue::new(source.string_list(SENSOR_KEY)?);
        let actuators = Catalogue::new(source.string_list(ACTUATOR_KEY)?);
        tracing::debug!(
            sensor_models = sensors.recognized_names().len(),
            actuator_models = actuators.recognized_names().len(),
            "capability catalogues loaded"
        );
        Ok(Self { sensors, actuators })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MemoryConfig;

    #[test]
    fn should_load_both_catalogues() {
        let config = MemoryConfig::new()
            .with(SENSOR_KEY, ["TemperatureSensor"])
            .with(ACTUATOR_KEY, ["SwitchOnOffActuator", "RangeActuatorInt"]);

        let catalogues = CapabilityCatalogues::load(&config).unwrap();
        assert_eq!(catalogues.sensors.recognized_names(), ["TemperatureSensor"]);
        assert_eq!(
            catalogues.actuators.recognized_names(),
            ["SwitchOnOffActuator", "RangeActuatorInt"]
        );
    }

    #[test]
    fn should_fail_when_sensor_key_is_missing() {
        let config = MemoryConfig::new().with(ACTUATOR_KEY, ["SwitchOnOffActuator"]);
        let result = CapabilityCatalogues::load(&config);
        assert!(matches!(
            result,
            Err(ConfigurationError::MissingKey { .. })
        ));
    }

    #[test]
    fn should_accept_empty_declarations() {
        let config = MemoryConfig::new()
            .with(SENSOR_KEY, Vec::<String>::new())
            .with(ACTUATOR_KEY, Vec::<String>::new());
        let catalogues = CapabilityCatalogues::load(&config).unwrap();
        assert!(catalogues.sensors.recognized_names().is_empty());
        assert!(catalogues.actuators.recognized_names().is_empty());
    }
}
