//! Actuators — controllable capabilities carrying one measurement.
//!
//! Switch and blind-roller actuators receive their measurement at
//! construction time. Range actuators defer it: the measurement is created
//! when [`Actuator::configure_int`] or [`Actuator::configure_decimal`]
//! installs the bounds, and reads before that observe no value.

use serde::{Deserialize, Serialize};

use crate::capability::{Capability, Constructor, validate_name};
use crate::error::ValidationError;
use crate::measurement::{Measurement, MeasurementKind, ValueFactory};

/// What an actuator controls. Closed enumeration; not user-settable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActuatorFunctionality {
    OnOff,
    Range,
    BlindRoller,
}

impl ActuatorFunctionality {
    /// Every actuator functionality, in declaration order.
    pub const ALL: [Self; 3] = [Self::OnOff, Self::Range, Self::BlindRoller];
}

impl std::fmt::Display for ActuatorFunctionality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::OnOff => "on_off",
            Self::Range => "range",
            Self::BlindRoller => "blind_roller",
        };
        f.write_str(label)
    }
}

impl std::str::FromStr for ActuatorFunctionality {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "on_off" => Ok(Self::OnOff),
            "range" => Ok(Self::Range),
            "blind_roller" => Ok(Self::BlindRoller),
            _ => Err(()),
        }
    }
}

/// Which numeric representation a range actuator's measurement uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangeVariant {
    Int,
    Decimal,
}

/// An actuator instance: immutable name and functionality, at most one
/// measurement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actuator {
    name: String,
    functionality: ActuatorFunctionality,
    range_variant: Option<RangeVariant>,
    measurement: Option<Measurement>,
}

impl Actuator {
    fn immediate(
        name: &str,
        functionality: ActuatorFunctionality,
        kind: MeasurementKind,
        values: &dyn ValueFactory,
    ) -> Result<Self, ValidationError> {
        validate_name(name)?;
        Ok(Self {
            name: name.to_string(),
            functionality,
            range_variant: None,
            measurement: Some(values.create(kind)),
        })
    }

    fn deferred(name: &str, variant: RangeVariant) -> Result<Self, ValidationError> {
        validate_name(name)?;
        Ok(Self {
            name: name.to_string(),
            functionality: ActuatorFunctionality::Range,
            range_variant: Some(variant),
            measurement: None,
        })
    }

    /// The actuator's immutable instance name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The actuator's immutable functionality tag.
    #[must_use]
    pub fn functionality(&self) -> ActuatorFunctionality {
        self.functionality
    }

    /// The actuator's measurement, if one has been created yet.
    ///
    /// Range actuators have no measurement until configured.
    #[must_use]
    pub fn measurement(&self) -> Option<&Measurement> {
        self.measurement.as_ref()
    }

    /// Whether the actuator is ready to accept writes.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.measurement.is_some()
    }

    /// Install inclusive integer bounds on an integer range actuator,
    /// creating its measurement through `values`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::RangeNotAccepted`] when the actuator is
    /// not an unconfigured integer range actuator, or
    /// [`ValidationError::InvalidBounds`] when `lower > upper`.
    pub fn configure_int(
        &mut self,
        lower: i64,
        upper: i64,
        values: &dyn ValueFactory,
    ) -> Result<(), ValidationError> {
        if self.range_variant != Some(RangeVariant::Int) || self.measurement.is_some() {
            return Err(ValidationError::RangeNotAccepted);
        }
        self.measurement = Some(values.int_range(lower, upper)?);
        Ok(())
    }

    /// Install inclusive decimal bounds on a decimal range actuator,
    /// creating its measurement through `values`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::RangeNotAccepted`] when the actuator is
    /// not an unconfigured decimal range actuator, or
    /// [`ValidationError::InvalidBounds`] when the bounds are not finite or
    /// inverted.
    pub fn configure_decimal(
        &mut self,
        lower: f64,
        upper: f64,
        values: &dyn ValueFactory,
    ) -> Result<(), ValidationError> {
        if self.range_variant != Some(RangeVariant::Decimal) || self.measurement.is_some() {
            return Err(ValidationError::RangeNotAccepted);
        }
        self.measurement = Some(values.decimal_range(lower, upper)?);
        Ok(())
    }

    /// Set the actuator from a textual command.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NotConfigured`] when the actuator has no
    /// measurement yet; otherwise propagates the measurement's parse and
    /// bounds failures, keeping the previous reading on failure.
    pub fn set_value(&mut self, text: &str) -> Result<(), ValidationError> {
        match &mut self.measurement {
            Some(measurement) => measurement.set_from_str(text),
            None => Err(ValidationError::NotConfigured),
        }
    }
}

fn switch_on_off(name: &str, values: &dyn ValueFactory) -> Result<Actuator, ValidationError> {
    Actuator::immediate(
        name,
        ActuatorFunctionality::OnOff,
        MeasurementKind::OnOff,
        values,
    )
}

fn blind_roller(name: &str, values: &dyn ValueFactory) -> Result<Actuator, ValidationError> {
    Actuator::immediate(
        name,
        ActuatorFunctionality::BlindRoller,
        MeasurementKind::Percentage,
        values,
    )
}

fn range_int(name: &str, _values: &dyn ValueFactory) -> Result<Actuator, ValidationError> {
    Actuator::deferred(name, RangeVariant::Int)
}

fn range_decimal(name: &str, _values: &dyn ValueFactory) -> Result<Actuator, ValidationError> {
    Actuator::deferred(name, RangeVariant::Decimal)
}

/// The statically registered actuator model table.
const MODELS: &[(&str, Constructor<Actuator>)] = &[
    ("SwitchOnOffActuator", switch_on_off),
    ("RangeActuatorInt", range_int),
    ("RangeActuatorDecimal", range_decimal),
    ("BlindRollerActuator", blind_roller),
];

impl Capability for Actuator {
    type Functionality = ActuatorFunctionality;

    fn functionalities() -> &'static [ActuatorFunctionality] {
        &ActuatorFunctionality::ALL
    }

    fn models() -> &'static [(&'static str, Constructor<Self>)] {
        MODELS
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn functionality(&self) -> ActuatorFunctionality {
        self.functionality
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measurement::DefaultValueFactory;

    #[test]
    fn should_build_switch_with_on_off_measurement() {
        let actuator = switch_on_off("lamp1", &DefaultValueFactory).unwrap();
        assert_eq!(actuator.name(), "lamp1");
        assert_eq!(actuator.functionality(), ActuatorFunctionality::OnOff);
        assert_eq!(
            actuator.measurement().map(Measurement::kind),
            Some(MeasurementKind::OnOff)
        );
    }

    #[test]
    fn should_switch_on_and_off_through_set_value() {
        let mut actuator = switch_on_off("lamp1", &DefaultValueFactory).unwrap();
        actuator.set_value("on").unwrap();
        assert_eq!(actuator.measurement().unwrap().to_string(), "on");
        actuator.set_value("off").unwrap();
        assert_eq!(actuator.measurement().unwrap().to_string(), "off");
    }

    #[test]
    fn should_defer_measurement_for_range_actuators() {
        let actuator = range_int("dimmer", &DefaultValueFactory).unwrap();
        assert!(!actuator.is_configured());
        assert!(actuator.measurement().is_none());
        assert_eq!(actuator.functionality(), ActuatorFunctionality::Range);
    }

    #[test]
    fn should_reject_writes_before_configuration() {
        let mut actuator = range_int("dimmer", &DefaultValueFactory).unwrap();
        let result = actuator.set_value("5");
        assert!(matches!(result, Err(ValidationError::NotConfigured)));
    }

    #[test]
    fn should_enforce_bounds_installed_by_configure() {
        let mut actuator = range_int("dimmer", &DefaultValueFactory).unwrap();
        actuator.configure_int(0, 10, &DefaultValueFactory).unwrap();

        actuator.set_value("7").unwrap();
        assert_eq!(actuator.measurement().unwrap().to_string(), "7");

        let result = actuator.set_value("11");
        assert!(matches!(result, Err(ValidationError::OutOfBounds { .. })));
        assert_eq!(actuator.measurement().unwrap().to_string(), "7");
    }

    #[test]
    fn should_reject_second_configuration() {
        let mut actuator = range_decimal("volume", &DefaultValueFactory).unwrap();
        actuator
            .configure_decimal(-1.0, 1.0, &DefaultValueFactory)
            .unwrap();
        let result = actuator.configure_decimal(0.0, 2.0, &DefaultValueFactory);
        assert!(matches!(result, Err(ValidationError::RangeNotAccepted)));
    }

    #[test]
    fn should_reject_range_configuration_on_switch() {
        let mut actuator = switch_on_off("lamp1", &DefaultValueFactory).unwrap();
        let result = actuator.configure_int(0, 10, &DefaultValueFactory);
        assert!(matches!(result, Err(ValidationError::RangeNotAccepted)));
    }

    #[test]
    fn should_reject_mismatched_range_variant() {
        let mut actuator = range_int("dimmer", &DefaultValueFactory).unwrap();
        let result = actuator.configure_decimal(0.0, 1.0, &DefaultValueFactory);
        assert!(matches!(result, Err(ValidationError::RangeNotAccepted)));
    }

    #[test]
    fn should_propagate_invalid_bounds_from_configure() {
        let mut actuator = range_int("dimmer", &DefaultValueFactory).unwrap();
        let result = actuator.configure_int(10, 0, &DefaultValueFactory);
        assert!(matches!(result, Err(ValidationError::InvalidBounds { .. })));
        assert!(!actuator.is_configured());
    }

    #[test]
    fn should_reject_blank_actuator_name() {
        let result = switch_on_off(" ", &DefaultValueFactory);
        assert!(matches!(result, Err(ValidationError::EmptyName)));
    }

    #[test]
    fn should_give_blind_roller_a_percentage_measurement() {
        let mut actuator = blind_roller("blind1", &DefaultValueFactory).unwrap();
        actuator.set_value("30").unwrap();
        assert_eq!(actuator.measurement().unwrap().to_string(), "30 %");
    }
}
