//! Capability catalogue — resolves configuration-declared model names into
//! live capability instances.
//!
//! The catalogue is a name-to-behavior dispatch table with graceful
//! degradation. Lookup against the configured allow-list is deliberately
//! lenient (substring match, declaration order), while construction failure
//! is strict and silent: a mis-declared or unimplemented model degrades to
//! "not found" instead of failing the aggregate that asked for it.

use crate::capability::{Actuator, Capability, Sensor};
use crate::measurement::ValueFactory;

/// Catalogue over the sensor family.
pub type SensorCatalogue = Catalogue<Sensor>;

/// Catalogue over the actuator family.
pub type ActuatorCatalogue = Catalogue<Actuator>;

/// A registry of configuration-declared model names for one capability
/// family, backed by the family's statically registered model table.
#[derive(Debug, Clone)]
pub struct Catalogue<C> {
    recognized: Vec<String>,
    _family: std::marker::PhantomData<fn() -> C>,
}

impl<C: Capability + 'static> Catalogue<C> {
    /// Build a catalogue from the configuration-declared model names.
    ///
    /// An empty list is a valid, empty catalogue.
    #[must_use]
    pub fn new(recognized: Vec<String>) -> Self {
        Self {
            recognized,
            _family: std::marker::PhantomData,
        }
    }

    /// The declared model names, in declaration order.
    #[must_use]
    pub fn recognized_names(&self) -> &[String] {
        &self.recognized
    }

    /// The family's full closed functionality enumeration.
    ///
    /// Deliberately independent of [`recognized_names`](Self::recognized_names):
    /// configuration narrows what can be *constructed*, never what the
    /// family can classify.
    #[must_use]
    pub fn functionalities(&self) -> &'static [C::Functionality] {
        C::functionalities()
    }

    /// Return the functionality named by `tag` when it is a member of the
    /// family's enumeration, `None` otherwise. Constructs nothing.
    #[must_use]
    pub fn lookup_functionality(&self, tag: &str) -> Option<C::Functionality> {
        C::functionalities()
            .iter()
            .find(|f| f.to_string() == tag)
            .copied()
    }

    /// Resolve `model` into a live capability named `instance_name`.
    ///
    /// The first recognized name *containing* `model` as a substring
    /// (case-sensitive, declaration order) selects it; the match then has
    /// to appear in the family's model table. Any construction failure,
    /// for any reason, is reported uniformly as `None`.
    #[must_use]
    pub fn resolve(
        &self,
        model: &str,
        instance_name: &str,
        values: &dyn ValueFactory,
    ) -> Option<C> {
        self.recognized
            .iter()
            .find(|recognized| recognized.contains(model))?;
        let (_, build) = C::models().iter().find(|(name, _)| *name == model)?;
        build(instance_name, values).ok()
    }
}
