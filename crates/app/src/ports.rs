//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside
//! world. They are defined here (in `app`) so that both the use-case layer
//! and the adapter layer can depend on them without creating circular
//! dependencies.

use domus_domain::error::ConfigurationError;

/// A source of configuration: a key → string-list mapping.
///
/// The catalogue bootstrap reads the `sensor` and `actuator` keys from it.
pub trait ConfigSource {
    /// The list of strings declared under `key`, in declaration order.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::MissingKey`] when the source does not
    /// declare `key`. An empty list is *not* an error.
    fn string_list(&self, key: &str) -> Result<Vec<String>, ConfigurationError>;
}
