//! Home service — orchestrates the house hierarchy and capability
//! resolution.
//!
//! The service owns one [`House`], the loaded [`CapabilityCatalogues`],
//! and the injected value factory, so callers never wire those three
//! together by hand. "Not found" and duplicate-name outcomes are plain
//! `false`/`None` results; only precondition violations are errors.

use domus_domain::error::ValidationError;
use domus_domain::house::House;
use domus_domain::measurement::ValueFactory;
use domus_domain::room::Room;

use crate::catalogues::CapabilityCatalogues;

/// Application service for building and operating a house.
pub struct HomeService<V> {
    house: House,
    catalogues: CapabilityCatalogues,
    values: V,
}

impl<V: ValueFactory> HomeService<V> {
    /// Create a service around an existing house.
    pub fn new(house: House, catalogues: CapabilityCatalogues, values: V) -> Self {
        Self {
            house,
            catalogues,
            values,
        }
    }

    /// Read access to the underlying house.
    #[must_use]
    pub fn house(&self) -> &House {
        &self.house
    }

    /// Add a room, returning whether it was stored (`false` on duplicate
    /// case-insensitive name).
    ///
    /// # Errors
    ///
    /// Propagates [`ValidationError`] from room construction unchanged.
    #[tracing::instrument(skip(self))]
    pub fn add_room(
        &mut self,
        name: &str,
        floor: &str,
        height: f64,
        width: f64,
        length: f64,
    ) -> Result<bool, ValidationError> {
        let room = Room::builder()
            .name(name)
            .floor(floor)
            .dimensions(height, width, length)
            .build()?;
        Ok(self.house.add_room(room))
    }

    /// Add a device to `room`, returning whether it was stored (`false`
    /// when the room is unknown or the device name collides).
    ///
    /// # Errors
    ///
    /// Propagates [`ValidationError`] from device construction unchanged.
    #[tracing::instrument(skip(self))]
    pub fn add_device(
        &mut self,
        room: &str,
        name: &str,
        model: &str,
    ) -> Result<bool, ValidationError> {
        match self.house.room_mut(room) {
            Some(room) => room.add_device(name, model),
            None => {
                tracing::debug!(room, "room not found");
                Ok(false)
            }
        }
    }

    /// Resolve `model` through the sensor catalogue and attach the result
    /// to `device` in `room`. Returns whether a sensor was created.
    #[tracing::instrument(skip(self))]
    pub fn add_sensor(&mut self, room: &str, device: &str, model: &str, name: &str) -> bool {
        let Some(device) = self
            .house
            .room_mut(room)
            .and_then(|room| room.device_mut(device))
        else {
            tracing::debug!(room, device, "device not found");
            return false;
        };
        let created = device
            .add_sensor(model, name, &self.catalogues.sensors, &self.values)
            .is_some();
        if !created {
            tracing::debug!(model, sensor = name, "sensor not created");
        }
        created
    }

    /// Resolve `model` through the actuator catalogue and attach the
    /// result to `device` in `room`. Returns whether an actuator was
    /// created.
    #[tracing::instrument(skip(self))]
    pub fn add_actuator(&mut self, room: &str, device: &str, model: &str, name: &str) -> bool {
        let Some(device) = self
            .house
            .room_mut(room)
            .and_then(|room| room.device_mut(device))
        else {
            tracing::debug!(room, device, "device not found");
            return false;
        };
        let created = device
            .add_actuator(model, name, &self.catalogues.actuators, &self.values)
            .is_some();
        if !created {
            tracing::debug!(model, actuator = name, "actuator not created");
        }
        created
    }

    /// Switch `device` in `room` to `target`.
    ///
    /// Returns `None` when the device is unknown, otherwise whether a
    /// transition actually occurred.
    #[tracing::instrument(skip(self))]
    pub fn switch_device(&mut self, room: &str, device: &str, target: bool) -> Option<bool> {
        self.house
            .room_mut(room)
            .and_then(|room| room.device_mut(device))
            .map(|device| device.switch(target))
    }
}
