//! Room — an aggregate owning devices by name, with physical dimensions.

use serde::{Deserialize, Serialize};

use crate::device::Device;
use crate::error::ValidationError;

/// Physical dimensions of a room, in meters. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    height: f64,
    width: f64,
    length: f64,
}

impl Dimensions {
    /// Construct validated dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidDimension`] when any value is NaN,
    /// infinite, or not strictly positive.
    pub fn new(height: f64, width: f64, length: f64) -> Result<Self, ValidationError> {
        for (field, value) in [("height", height), ("width", width), ("length", length)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ValidationError::InvalidDimension { field, value });
            }
        }
        Ok(Self {
            height,
            width,
            length,
        })
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        self.length
    }
}

/// A room on a floor of a house, owning devices by case-insensitive name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    name: String,
    floor: String,
    dimensions: Dimensions,
    devices: Vec<Device>,
}

impl Room {
    /// Create a builder for constructing a [`Room`].
    #[must_use]
    pub fn builder() -> RoomBuilder {
        RoomBuilder::default()
    }

    /// The room's immutable name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The floor label the room sits on.
    #[must_use]
    pub fn floor(&self) -> &str {
        &self.floor
    }

    /// The room's dimensions, fixed at construction.
    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Construct a device from `name` and `model` and store it.
    ///
    /// Returns `Ok(false)` when a device with a case-insensitive equal name
    /// already exists; the existing device is kept untouched and no
    /// construction is attempted.
    ///
    /// # Errors
    ///
    /// Propagates [`ValidationError`] from device construction unchanged.
    pub fn add_device(
        &mut self,
        name: impl Into<String>,
        model: impl Into<String>,
    ) -> Result<bool, ValidationError> {
        let name = name.into();
        if self.device(&name).is_some() {
            return Ok(false);
        }
        self.devices.push(Device::new(name, model)?);
        Ok(true)
    }

    /// Case-insensitive device lookup.
    #[must_use]
    pub fn device(&self, name: &str) -> Option<&Device> {
        self.devices
            .iter()
            .find(|d| d.name().eq_ignore_ascii_case(name))
    }

    /// Case-insensitive mutable device lookup.
    pub fn device_mut(&mut self, name: &str) -> Option<&mut Device> {
        self.devices
            .iter_mut()
            .find(|d| d.name().eq_ignore_ascii_case(name))
    }

    /// The owned devices, in insertion order.
    #[must_use]
    pub fn devices(&self) -> &[Device] {
        &self.devices
    }
}

/// Step-by-step builder for [`Room`].
#[derive(Debug, Default)]
pub struct RoomBuilder {
    name: Option<String>,
    floor: Option<String>,
    dimensions: Option<(f64, f64, f64)>,
}

impl RoomBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn floor(mut self, floor: impl Into<String>) -> Self {
        self.floor = Some(floor.into());
        self
    }

    #[must_use]
    pub fn dimensions(mut self, height: f64, width: f64, length: f64) -> Self {
        self.dimensions = Some((height, width, length));
        self
    }

    /// Consume the builder, validate, and return a [`Room`].
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyName`] or
    /// [`ValidationError::EmptyFloor`] when either label is missing or
    /// blank, and [`ValidationError::InvalidDimension`] when any dimension
    /// is missing, NaN, infinite, or not strictly positive.
    pub fn build(self) -> Result<Room, ValidationError> {
        let name = self.name.unwrap_or_default();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        let floor = self.floor.unwrap_or_default();
        if floor.trim().is_empty() {
            return Err(ValidationError::EmptyFloor);
        }
        let (height, width, length) = self.dimensions.unwrap_or((f64::NAN, f64::NAN, f64::NAN));
        let dimensions = Dimensions::new(height, width, length)?;
        Ok(Room {
            name,
            floor,
            dimensions,
            devices: Vec::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room() -> Room {
        Room::builder()
            .name("Living Room")
            .floor("1")
            .dimensions(2.5, 3.0, 4.0)
            .build()
            .unwrap()
    }

    #[test]
    fn should_build_valid_room() {
        let room = room();
        assert_eq!(room.name(), "Living Room");
        assert_eq!(room.floor(), "1");
        assert!((room.dimensions().height() - 2.5).abs() < f64::EPSILON);
        assert!(room.devices().is_empty());
    }

    #[test]
    fn should_reject_blank_room_name() {
        let result = Room::builder().floor("1").dimensions(2.5, 3.0, 4.0).build();
        assert!(matches!(result, Err(ValidationError::EmptyName)));
    }

    #[test]
    fn should_reject_blank_floor() {
        let result = Room::builder()
            .name("Living Room")
            .floor("  ")
            .dimensions(2.5, 3.0, 4.0)
            .build();
        assert!(matches!(result, Err(ValidationError::EmptyFloor)));
    }

    #[test]
    fn should_reject_zero_height() {
        let result = Dimensions::new(0.0, 3.0, 4.0);
        assert!(matches!(
            result,
            Err(ValidationError::InvalidDimension {
                field: "height",
                ..
            })
        ));
    }

    #[test]
    fn should_reject_nan_height() {
        let result = Dimensions::new(f64::NAN, 3.0, 4.0);
        assert!(matches!(
            result,
            Err(ValidationError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn should_reject_negative_width_and_infinite_length() {
        assert!(Dimensions::new(2.5, -3.0, 4.0).is_err());
        assert!(Dimensions::new(2.5, 3.0, f64::INFINITY).is_err());
    }

    #[test]
    fn should_add_device_once_and_reject_case_insensitive_duplicate() {
        let mut room = room();
        assert!(room.add_device("d1", "modelA").unwrap());
        assert!(!room.add_device("D1", "modelB").unwrap());
        assert_eq!(room.devices().len(), 1);
        // First add wins.
        assert_eq!(room.device("d1").unwrap().model(), "modelA");
    }

    #[test]
    fn should_reject_duplicate_name_without_constructing() {
        let mut room = room();
        room.add_device("d1", "modelA").unwrap();
        // The duplicate name short-circuits before the blank model can
        // fail validation.
        assert_eq!(room.add_device("D1", ""), Ok(false));
        assert_eq!(room.devices().len(), 1);
    }

    #[test]
    fn should_propagate_validation_error_from_device_construction() {
        let mut room = room();
        let result = room.add_device("", "modelA");
        assert!(matches!(result, Err(ValidationError::EmptyName)));
        assert!(room.devices().is_empty());
    }

    #[test]
    fn should_look_up_device_case_insensitively() {
        let mut room = room();
        room.add_device("Thermostat", "TH-200").unwrap();
        assert!(room.device("thermostat").is_some());
        assert!(room.device_mut("THERMOSTAT").is_some());
        assert!(room.device("boiler").is_none());
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        let mut room = room();
        room.add_device("d1", "modelA").unwrap();
        let json = serde_json::to_string(&room).unwrap();
        let parsed: Room = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.name(), room.name());
        assert_eq!(parsed.devices().len(), 1);
    }
}
