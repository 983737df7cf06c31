//! Common error types used across the workspace.
//!
//! The domain knows exactly two failure families: [`ValidationError`] for
//! arguments that violate a precondition, and [`ConfigurationError`] for a
//! configuration source that cannot be read. Lookup and resolution misses
//! are *not* errors — they surface as `Option::None` or `false` results.

use thiserror::Error;

/// Top-level error for the domus workspace.
///
/// Each layer defines its own typed errors and converts via `#[from]`.
#[derive(Debug, Error)]
pub enum DomusError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("configuration error")]
    Configuration(#[from] ConfigurationError),
}

/// A constructor or method argument violated a domain invariant.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A name was empty or blank.
    #[error("name must not be blank")]
    EmptyName,

    /// A device model was empty or blank.
    #[error("device model must not be blank")]
    EmptyModel,

    /// A room floor label was empty or blank.
    #[error("floor must not be blank")]
    EmptyFloor,

    /// A physical dimension was NaN, infinite, or not strictly positive.
    #[error("dimension {field} must be finite and positive, got {value}")]
    InvalidDimension { field: &'static str, value: f64 },

    /// Range bounds were NaN, infinite, or inverted.
    #[error("invalid bounds: lower {lower} must not exceed upper {upper}")]
    InvalidBounds { lower: f64, upper: f64 },

    /// A textual reading did not parse as the value's representation.
    #[error("cannot parse {text:?} as a {kind} reading")]
    UnparsableValue { kind: &'static str, text: String },

    /// A parsed reading fell outside the value's inclusive bounds.
    #[error("value {value} is outside bounds [{lower}, {upper}]")]
    OutOfBounds { value: f64, lower: f64, upper: f64 },

    /// A range actuator was written to before `configure` installed bounds.
    #[error("actuator has no configured range")]
    NotConfigured,

    /// A range configuration was offered to an actuator that cannot take
    /// one (wrong variant, or already configured).
    #[error("actuator does not accept a range configuration")]
    RangeNotAccepted,
}

/// The configuration source was missing or unreadable.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    /// The source was readable but did not declare the requested key.
    #[error("configuration key {key:?} is not defined")]
    MissingKey { key: String },

    /// The named source could not be read or parsed.
    #[error("cannot load configuration from {origin:?}: {cause}")]
    Source { origin: String, cause: String },
}
