//! House — the hierarchy root, owning rooms by case-insensitive name.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::room::Room;

/// A house: a named collection of rooms with unique names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct House {
    name: String,
    rooms: Vec<Room>,
}

impl House {
    /// Construct an empty house.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyName`] when `name` is blank.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(Self {
            name,
            rooms: Vec::new(),
        })
    }

    /// The house's immutable name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Take ownership of `room`, rejecting case-insensitive name
    /// collisions. Returns whether the room was stored.
    pub fn add_room(&mut self, room: Room) -> bool {
        if self.room(room.name()).is_some() {
            return false;
        }
        self.rooms.push(room);
        true
    }

    /// Case-insensitive room lookup.
    #[must_use]
    pub fn room(&self, name: &str) -> Option<&Room> {
        self.rooms
            .iter()
            .find(|r| r.name().eq_ignore_ascii_case(name))
    }

    /// Case-insensitive mutable room lookup.
    pub fn room_mut(&mut self, name: &str) -> Option<&mut Room> {
        self.rooms
            .iter_mut()
            .find(|r| r.name().eq_ignore_ascii_case(name))
    }

    /// The owned rooms, in insertion order.
    #[must_use]
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }
}
