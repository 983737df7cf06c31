//! Device — an aggregate owning sensors and actuators by name.
//!
//! Sensor and actuator names are unique within a device, compared
//! case-insensitively; the two namespaces are independent of each other.
//! Capabilities are created through a [`Catalogue`](crate::catalogue) and
//! owned exclusively by the device for the rest of their lifetime.

use serde::{Deserialize, Serialize};

use crate::capability::{
    Actuator, ActuatorFunctionality, Capability, Sensor, SensorFunctionality,
};
use crate::catalogue::{ActuatorCatalogue, SensorCatalogue};
use crate::error::ValidationError;
use crate::measurement::ValueFactory;

/// A physical or virtual thing holding capabilities.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Device {
    name: String,
    model: String,
    active: bool,
    sensors: Vec<Sensor>,
    actuators: Vec<Actuator>,
}

impl Device {
    /// Create a builder for constructing a [`Device`].
    #[must_use]
    pub fn builder() -> DeviceBuilder {
        DeviceBuilder::default()
    }

    /// Construct an inactive device with no capabilities.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyName`] or
    /// [`ValidationError::EmptyModel`] when either argument is blank.
    pub fn new(name: impl Into<String>, model: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        let model = model.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if model.trim().is_empty() {
            return Err(ValidationError::EmptyModel);
        }
        Ok(Self {
            name,
            model,
            active: false,
            sensors: Vec::new(),
            actuators: Vec::new(),
        })
    }

    /// The device's immutable name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The device's immutable model label.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Whether the device is currently active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Move the device to `target`, returning whether a transition
    /// actually occurred. Idempotent.
    pub fn switch(&mut self, target: bool) -> bool {
        if self.active == target {
            return false;
        }
        self.active = target;
        true
    }

    /// Ask `catalogue` to resolve `model` and store the resulting sensor
    /// under `instance_name`.
    ///
    /// Returns `None` when the model cannot be resolved or a sensor with a
    /// case-insensitive equal name already exists — first add wins, later
    /// adds are rejected silently.
    pub fn add_sensor(
        &mut self,
        model: &str,
        instance_name: &str,
        catalogue: &SensorCatalogue,
        values: &dyn ValueFactory,
    ) -> Option<&Sensor> {
        if self.sensor(instance_name).is_some() {
            return None;
        }
        let sensor = catalogue.resolve(model, instance_name, values)?;
        self.sensors.push(sensor);
        self.sensors.last()
    }

    /// Ask `catalogue` to resolve `model` and store the resulting actuator
    /// under `instance_name`. Same rejection rules as
    /// [`add_sensor`](Self::add_sensor), against the actuator namespace.
    pub fn add_actuator(
        &mut self,
        model: &str,
        instance_name: &str,
        catalogue: &ActuatorCatalogue,
        values: &dyn ValueFactory,
    ) -> Option<&Actuator> {
        if self.actuator(instance_name).is_some() {
            return None;
        }
        let actuator = catalogue.resolve(model, instance_name, values)?;
        self.actuators.push(actuator);
        self.actuators.last()
    }

    /// Case-insensitive sensor lookup.
    #[must_use]
    pub fn sensor(&self, name: &str) -> Option<&Sensor> {
        self.sensors
            .iter()
            .find(|s| s.name().eq_ignore_ascii_case(name))
    }

    /// Case-insensitive mutable sensor lookup.
    pub fn sensor_mut(&mut self, name: &str) -> Option<&mut Sensor> {
        self.sensors
            .iter_mut()
            .find(|s| s.name().eq_ignore_ascii_case(name))
    }

    /// Case-insensitive actuator lookup.
    #[must_use]
    pub fn actuator(&self, name: &str) -> Option<&Actuator> {
        self.actuators
            .iter()
            .find(|a| a.name().eq_ignore_ascii_case(name))
    }

    /// Case-insensitive mutable actuator lookup.
    pub fn actuator_mut(&mut self, name: &str) -> Option<&mut Actuator> {
        self.actuators
            .iter_mut()
            .find(|a| a.name().eq_ignore_ascii_case(name))
    }

    /// The owned sensors, in insertion order.
    #[must_use]
    pub fn sensors(&self) -> &[Sensor] {
        &self.sensors
    }

    /// The owned actuators, in insertion order.
    #[must_use]
    pub fn actuators(&self) -> &[Actuator] {
        &self.actuators
    }

    /// The sensor family's full functionality enumeration.
    #[must_use]
    pub fn sensor_functionalities() -> &'static [SensorFunctionality] {
        Sensor::functionalities()
    }

    /// The actuator family's full functionality enumeration.
    #[must_use]
    pub fn actuator_functionalities() -> &'static [ActuatorFunctionality] {
        Actuator::functionalities()
    }
}

/// Step-by-step builder for [`Device`].
#[derive(Debug, Default)]
pub struct DeviceBuilder {
    name: Option<String>,
    model: Option<String>,
}

impl DeviceBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Consume the builder, validate, and return a [`Device`].
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyName`] or
    /// [`ValidationError::EmptyModel`] when either field is missing or
    /// blank.
    pub fn build(self) -> Result<Device, ValidationError> {
        Device::new(
            self.name.unwrap_or_default(),
            self.model.unwrap_or_default(),
        )
    }
}
