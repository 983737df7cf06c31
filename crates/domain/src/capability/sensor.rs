//! Sensors — read-only capabilities reporting one measurement.

use serde::{Deserialize, Serialize};

use crate::capability::{Capability, Constructor, validate_name};
use crate::error::ValidationError;
use crate::measurement::{Measurement, MeasurementKind, ValueFactory};

/// What a sensor measures. Closed enumeration; not user-settable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensorFunctionality {
    Temperature,
    Humidity,
    BinarySwitch,
    Scale,
    Wind,
    DewPoint,
    PowerConsumption,
    SolarIrradiance,
    EnergyConsumption,
    Sunrise,
    Sunset,
}

impl SensorFunctionality {
    /// Every sensor functionality, in declaration order.
    pub const ALL: [Self; 11] = [
        Self::Temperature,
        Self::Humidity,
        Self::BinarySwitch,
        Self::Scale,
        Self::Wind,
        Self::DewPoint,
        Self::PowerConsumption,
        Self::SolarIrradiance,
        Self::EnergyConsumption,
        Self::Sunrise,
        Self::Sunset,
    ];
}

impl std::fmt::Display for SensorFunctionality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Temperature => "temperature",
            Self::Humidity => "humidity",
            Self::BinarySwitch => "binary_switch",
            Self::Scale => "scale",
            Self::Wind => "wind",
            Self::DewPoint => "dew_point",
            Self::PowerConsumption => "power_consumption",
            Self::SolarIrradiance => "solar_irradiance",
            Self::EnergyConsumption => "energy_consumption",
            Self::Sunrise => "sunrise",
            Self::Sunset => "sunset",
        };
        f.write_str(label)
    }
}

impl std::str::FromStr for SensorFunctionality {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "temperature" => Ok(Self::Temperature),
            "humidity" => Ok(Self::Humidity),
            "binary_switch" => Ok(Self::BinarySwitch),
            "scale" => Ok(Self::Scale),
            "wind" => Ok(Self::Wind),
            "dew_point" => Ok(Self::DewPoint),
            "power_consumption" => Ok(Self::PowerConsumption),
            "solar_irradiance" => Ok(Self::SolarIrradiance),
            "energy_consumption" => Ok(Self::EnergyConsumption),
            "sunrise" => Ok(Self::Sunrise),
            "sunset" => Ok(Self::Sunset),
            _ => Err(()),
        }
    }
}

/// A sensor instance: immutable name and functionality, one measurement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sensor {
    name: String,
    functionality: SensorFunctionality,
    measurement: Measurement,
}

impl Sensor {
    /// Build a sensor, asking `values` for its measurement.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyName`] when `name` is blank.
    pub fn new(
        name: &str,
        functionality: SensorFunctionality,
        kind: MeasurementKind,
        values: &dyn ValueFactory,
    ) -> Result<Self, ValidationError> {
        validate_name(name)?;
        Ok(Self {
            name: name.to_string(),
            functionality,
            measurement: values.create(kind),
        })
    }

    /// The sensor's immutable instance name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The sensor's immutable functionality tag.
    #[must_use]
    pub fn functionality(&self) -> SensorFunctionality {
        self.functionality
    }

    /// The sensor's current measurement.
    #[must_use]
    pub fn measurement(&self) -> &Measurement {
        &self.measurement
    }

    /// Record a new reading parsed from `text`.
    ///
    /// # Errors
    ///
    /// Propagates the measurement's parse/bounds failures; the previous
    /// reading is kept on failure.
    pub fn set_reading(&mut self, text: &str) -> Result<(), ValidationError> {
        self.measurement.set_from_str(text)
    }
}

macro_rules! sensor_model {
    ($builder:ident, $functionality:ident, $kind:ident) => {
        fn $builder(name: &str, values: &dyn ValueFactory) -> Result<Sensor, ValidationError> {
            Sensor::new(
                name,
                SensorFunctionality::$functionality,
                MeasurementKind::$kind,
                values,
            )
        }
    };
}

sensor_model!(temperature, Temperature, Celsius);
sensor_model!(humidity, Humidity, Percentage);
sensor_model!(binary_switch, BinarySwitch, OnOff);
sensor_model!(scale, Scale, Percentage);
sensor_model!(wind, Wind, Wind);
sensor_model!(dew_point, DewPoint, Celsius);
sensor_model!(power_consumption, PowerConsumption, Watts);
sensor_model!(solar_irradiance, SolarIrradiance, Irradiance);
sensor_model!(energy_consumption, EnergyConsumption, WattHours);
sensor_model!(sunrise, Sunrise, TimeOfDay);
sensor_model!(sunset, Sunset, TimeOfDay);

/// The statically registered sensor model table.
const MODELS: &[(&str, Constructor<Sensor>)] = &[
    ("TemperatureSensor", temperature),
    ("HumiditySensor", humidity),
    ("BinarySwitchSensor", binary_switch),
    ("ScaleSensor", scale),
    ("WindSensor", wind),
    ("DewPointSensor", dew_point),
    ("PowerConsumptionSensor", power_consumption),
    ("SolarIrradianceSensor", solar_irradiance),
    ("EnergyConsumptionSensor", energy_consumption),
    ("SunriseSensor", sunrise),
    ("SunsetSensor", sunset),
];

impl Capability for Sensor {
    type Functionality = SensorFunctionality;

    fn functionalities() -> &'static [SensorFunctionality] {
        &SensorFunctionality::ALL
    }

    fn models() -> &'static [(&'static str, Constructor<Self>)] {
        MODELS
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn functionality(&self) -> SensorFunctionality {
        self.functionality
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measurement::DefaultValueFactory;

    #[test]
    fn should_build_sensor_with_measurement_of_requested_kind() {
        let sensor = Sensor::new(
            "t1",
            SensorFunctionality::Temperature,
            MeasurementKind::Celsius,
            &DefaultValueFactory,
        )
        .unwrap();

        assert_eq!(sensor.name(), "t1");
        assert_eq!(sensor.functionality(), SensorFunctionality::Temperature);
        assert_eq!(sensor.measurement().kind(), MeasurementKind::Celsius);
    }

    #[test]
    fn should_reject_blank_sensor_name() {
        let result = Sensor::new(
            "  ",
            SensorFunctionality::Humidity,
            MeasurementKind::Percentage,
            &DefaultValueFactory,
        );
        assert!(matches!(result, Err(ValidationError::EmptyName)));
    }

    #[test]
    fn should_record_parsable_reading() {
        let mut sensor = temperature("t1", &DefaultValueFactory).unwrap();
        sensor.set_reading("18.5").unwrap();
        assert_eq!(sensor.measurement().to_string(), "18.5 \u{b0}C");
    }

    #[test]
    fn should_keep_reading_when_new_text_does_not_parse() {
        let mut sensor = temperature("t1", &DefaultValueFactory).unwrap();
        sensor.set_reading("18.5").unwrap();
        assert!(sensor.set_reading("warm").is_err());
        assert_eq!(sensor.measurement().to_string(), "18.5 \u{b0}C");
    }

    #[test]
    fn should_expose_all_functionalities_in_declaration_order() {
        assert_eq!(Sensor::functionalities().len(), 11);
        assert_eq!(
            Sensor::functionalities()[0],
            SensorFunctionality::Temperature
        );
        assert_eq!(Sensor::functionalities()[10], SensorFunctionality::Sunset);
    }

    #[test]
    fn should_have_a_builder_for_every_model_name() {
        let factory = DefaultValueFactory;
        for (model, build) in Sensor::models() {
            let sensor = build("probe", &factory).unwrap();
            assert_eq!(sensor.name(), "probe", "model {model} ignored the name");
        }
    }

    #[test]
    fn should_give_sunrise_sensor_a_time_of_day_measurement() {
        let sensor = sunrise("dawn", &DefaultValueFactory).unwrap();
        assert_eq!(sensor.measurement().kind(), MeasurementKind::TimeOfDay);
        assert_eq!(sensor.functionality(), SensorFunctionality::Sunrise);
    }

    #[test]
    fn should_roundtrip_functionality_through_display_and_from_str() {
        for tag in SensorFunctionality::ALL {
            let parsed: SensorFunctionality = tag.to_string().parse().unwrap();
            assert_eq!(parsed, tag);
        }
    }

    #[test]
    fn should_fail_parsing_unknown_functionality() {
        let result: Result<SensorFunctionality, ()> = "telepathy".parse();
        assert!(result.is_err());
    }
}
