//! Capabilities — sensors and actuators.
//!
//! A capability is a named, polymorphic unit built by a
//! [`Catalogue`](crate::catalogue::Catalogue) from a configuration-declared
//! model name. Each capability carries one functionality tag from a closed
//! enumeration and owns at most one
//! [`Measurement`](crate::measurement::Measurement).

pub mod actuator;
pub mod sensor;

pub use actuator::{Actuator, ActuatorFunctionality, RangeVariant};
pub use sensor::{Sensor, SensorFunctionality};

use crate::error::ValidationError;
use crate::measurement::ValueFactory;

/// A model-table entry: builds a capability from an instance name and a
/// value factory.
pub type Constructor<C> = fn(&str, &dyn ValueFactory) -> Result<C, ValidationError>;

/// Common surface of the two capability families, used by the generic
/// catalogue.
pub trait Capability: Sized {
    /// The family's closed functionality enumeration.
    type Functionality: Copy + Eq + std::fmt::Display + 'static;

    /// Every functionality tag the family supports, independent of what is
    /// configured.
    fn functionalities() -> &'static [Self::Functionality];

    /// The statically registered model table: model name → constructor.
    fn models() -> &'static [(&'static str, Constructor<Self>)];

    /// The capability's immutable instance name.
    fn name(&self) -> &str;

    /// The capability's immutable functionality tag.
    fn functionality(&self) -> Self::Functionality;
}

/// Reject empty or whitespace-only capability names.
pub(crate) fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(())
}
