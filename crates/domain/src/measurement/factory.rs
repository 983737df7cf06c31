//! Value factory — the injected collaborator that builds measurement values.
//!
//! Capabilities never construct [`Measurement`]s directly; they ask the
//! factory handed to them at construction (or configuration) time. Tests
//! can substitute their own factory to observe or constrain value creation.

use crate::error::ValidationError;
use crate::measurement::{Measurement, MeasurementKind};

/// Builds measurement values of a requested kind.
pub trait ValueFactory {
    /// Build a value of `kind` with default bounds where applicable.
    fn create(&self, kind: MeasurementKind) -> Measurement;

    /// Build an integer range value with explicit inclusive bounds.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidBounds`] when `lower > upper`.
    fn int_range(&self, lower: i64, upper: i64) -> Result<Measurement, ValidationError>;

    /// Build a decimal range value with explicit inclusive bounds.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidBounds`] when either bound is not
    /// finite or `lower > upper`.
    fn decimal_range(&self, lower: f64, upper: f64) -> Result<Measurement, ValidationError>;
}

/// The stock factory: delegates straight to [`Measurement`] constructors.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultValueFactory;

impl ValueFactory for DefaultValueFactory {
    fn create(&self, kind: MeasurementKind) -> Measurement {
        Measurement::new(kind)
    }

    fn int_range(&self, lower: i64, upper: i64) -> Result<Measurement, ValidationError> {
        Measurement::int_range(lower, upper)
    }

    fn decimal_range(&self, lower: f64, upper: f64) -> Result<Measurement, ValidationError> {
        Measurement::decimal_range(lower, upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_value_of_requested_kind() {
        let factory = DefaultValueFactory;
        let value = factory.create(MeasurementKind::Celsius);
        assert_eq!(value.kind(), MeasurementKind::Celsius);
    }

    #[test]
    fn should_create_int_range_with_given_bounds() {
        let factory = DefaultValueFactory;
        let value = factory.int_range(-10, 10).unwrap();
        assert_eq!(value.kind(), MeasurementKind::IntRange);
        assert_eq!(value.to_string(), "-10");
    }

    #[test]
    fn should_propagate_invalid_bounds() {
        let factory = DefaultValueFactory;
        assert!(factory.decimal_range(2.0, 1.0).is_err());
    }
}
