//! Measurement values — typed, bounded, unit-carrying scalar readings.
//!
//! Every capability owns exactly one [`Measurement`]. The variant (its
//! *kind*) is fixed at construction time; [`Measurement::set_from_str`]
//! only ever replaces the reading, never the kind, and leaves the previous
//! reading untouched when the new one is rejected.

pub mod factory;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

pub use factory::{DefaultValueFactory, ValueFactory};

/// The closed set of measurement kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasurementKind {
    /// Integer reading within an inclusive range.
    IntRange,
    /// Decimal reading within an inclusive range.
    DecimalRange,
    /// Percentage, bounded to `[0, 100]`.
    Percentage,
    /// Temperature in degrees Celsius.
    Celsius,
    /// Instantaneous power in watts.
    Watts,
    /// Accumulated energy in watt-hours.
    WattHours,
    /// Wind speed paired with a cardinal direction.
    Wind,
    /// Solar irradiance in watts per square meter.
    Irradiance,
    /// Binary on/off reading.
    OnOff,
    /// Time-of-day reading (sunrise, sunset).
    TimeOfDay,
}

impl MeasurementKind {
    /// The fixed unit label for this kind.
    #[must_use]
    pub fn unit(self) -> &'static str {
        match self {
            Self::IntRange | Self::DecimalRange | Self::OnOff | Self::TimeOfDay => "",
            Self::Percentage => "%",
            Self::Celsius => "\u{b0}C",
            Self::Watts => "W",
            Self::WattHours => "Wh",
            Self::Wind => "km/h",
            Self::Irradiance => "W/m\u{b2}",
        }
    }

    /// Short label used in parse-failure messages.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::IntRange => "integer",
            Self::DecimalRange | Self::Percentage => "decimal",
            Self::Celsius => "temperature",
            Self::Watts => "power",
            Self::WattHours => "energy",
            Self::Wind => "wind",
            Self::Irradiance => "irradiance",
            Self::OnOff => "on/off",
            Self::TimeOfDay => "time",
        }
    }
}

impl std::fmt::Display for MeasurementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Compass direction attached to a wind reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardinalDirection {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl std::fmt::Display for CardinalDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::N => "N",
            Self::NE => "NE",
            Self::E => "E",
            Self::SE => "SE",
            Self::S => "S",
            Self::SW => "SW",
            Self::W => "W",
            Self::NW => "NW",
        };
        f.write_str(label)
    }
}

impl std::str::FromStr for CardinalDirection {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "N" => Ok(Self::N),
            "NE" => Ok(Self::NE),
            "E" => Ok(Self::E),
            "SE" => Ok(Self::SE),
            "S" => Ok(Self::S),
            "SW" => Ok(Self::SW),
            "W" => Ok(Self::W),
            "NW" => Ok(Self::NW),
            _ => Err(()),
        }
    }
}

/// One typed scalar reading with a unit and, for range kinds, inclusive bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Measurement {
    IntRange { current: i64, lower: i64, upper: i64 },
    DecimalRange { current: f64, lower: f64, upper: f64 },
    Percentage { current: f64 },
    Celsius { current: f64 },
    Watts { current: f64 },
    WattHours { current: f64 },
    Wind { speed: f64, direction: CardinalDirection },
    Irradiance { current: f64 },
    OnOff { on: bool },
    TimeOfDay { current: chrono::NaiveTime },
}

impl Measurement {
    /// Construct a value of `kind` with default bounds where applicable.
    #[must_use]
    pub fn new(kind: MeasurementKind) -> Self {
        match kind {
            MeasurementKind::IntRange => Self::IntRange {
                current: 0,
                lower: 0,
                upper: 100,
            },
            MeasurementKind::DecimalRange => Self::DecimalRange {
                current: 0.0,
                lower: 0.0,
                upper: 100.0,
            },
            MeasurementKind::Percentage => Self::Percentage { current: 0.0 },
            MeasurementKind::Celsius => Self::Celsius { current: 0.0 },
            MeasurementKind::Watts => Self::Watts { current: 0.0 },
            MeasurementKind::WattHours => Self::WattHours { current: 0.0 },
            MeasurementKind::Wind => Self::Wind {
                speed: 0.0,
                direction: CardinalDirection::N,
            },
            MeasurementKind::Irradiance => Self::Irradiance { current: 0.0 },
            MeasurementKind::OnOff => Self::OnOff { on: false },
            MeasurementKind::TimeOfDay => Self::TimeOfDay {
                current: chrono::NaiveTime::MIN,
            },
        }
    }

    /// Construct an integer range value with explicit inclusive bounds.
    ///
    /// The reading starts at `lower`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidBounds`] when `lower > upper`.
    pub fn int_range(lower: i64, upper: i64) -> Result<Self, ValidationError> {
        if lower > upper {
            return Err(ValidationError::InvalidBounds {
                lower: lower as f64,
                upper: upper as f64,
            });
        }
        Ok(Self::IntRange {
            current: lower,
            lower,
            upper,
        })
    }

    /// Construct a decimal range value with explicit inclusive bounds.
    ///
    /// The reading starts at `lower`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidBounds`] when either bound is not
    /// finite or `lower > upper`.
    pub fn decimal_range(lower: f64, upper: f64) -> Result<Self, ValidationError> {
        if !lower.is_finite() || !upper.is_finite() || lower > upper {
            return Err(ValidationError::InvalidBounds { lower, upper });
        }
        Ok(Self::DecimalRange {
            current: lower,
            lower,
            upper,
        })
    }

    /// The kind of this value. Fixed for the value's whole lifetime.
    #[must_use]
    pub fn kind(&self) -> MeasurementKind {
        match self {
            Self::IntRange { .. } => MeasurementKind::IntRange,
            Self::DecimalRange { .. } => MeasurementKind::DecimalRange,
            Self::Percentage { .. } => MeasurementKind::Percentage,
            Self::Celsius { .. } => MeasurementKind::Celsius,
            Self::Watts { .. } => MeasurementKind::Watts,
            Self::WattHours { .. } => MeasurementKind::WattHours,
            Self::Wind { .. } => MeasurementKind::Wind,
            Self::Irradiance { .. } => MeasurementKind::Irradiance,
            Self::OnOff { .. } => MeasurementKind::OnOff,
            Self::TimeOfDay { .. } => MeasurementKind::TimeOfDay,
        }
    }

    /// The fixed unit label for this value.
    #[must_use]
    pub fn unit(&self) -> &'static str {
        self.kind().unit()
    }

    /// Replace the reading with one parsed from `text`.
    ///
    /// The reading is only mutated when `text` both parses as this kind's
    /// representation and, for bounded kinds, falls inside the inclusive
    /// bounds. Rejected writes leave the previous reading in place.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnparsableValue`] when `text` does not
    /// parse, or [`ValidationError::OutOfBounds`] when it parses to a value
    /// outside the bounds.
    pub fn set_from_str(&mut self, text: &str) -> Result<(), ValidationError> {
        let text = text.trim();
        match self {
            Self::IntRange {
                current,
                lower,
                upper,
            } => {
                let parsed: i64 = text
                    .parse()
                    .map_err(|_| unparsable(MeasurementKind::IntRange, text))?;
                if parsed < *lower || parsed > *upper {
                    return Err(ValidationError::OutOfBounds {
                        value: parsed as f64,
                        lower: *lower as f64,
                        upper: *upper as f64,
                    });
                }
                *current = parsed;
            }
            Self::DecimalRange {
                current,
                lower,
                upper,
            } => {
                let parsed = parse_finite(text, MeasurementKind::DecimalRange)?;
                if parsed < *lower || parsed > *upper {
                    return Err(ValidationError::OutOfBounds {
                        value: parsed,
                        lower: *lower,
                        upper: *upper,
                    });
                }
                *current = parsed;
            }
            Self::Percentage { current } => {
                let parsed = parse_finite(text, MeasurementKind::Percentage)?;
                if !(0.0..=100.0).contains(&parsed) {
                    return Err(ValidationError::OutOfBounds {
                        value: parsed,
                        lower: 0.0,
                        upper: 100.0,
                    });
                }
                *current = parsed;
            }
            Self::Celsius { current } => {
                *current = parse_finite(text, MeasurementKind::Celsius)?;
            }
            Self::Watts { current } => {
                *current = parse_finite(text, MeasurementKind::Watts)?;
            }
            Self::WattHours { current } => {
                *current = parse_finite(text, MeasurementKind::WattHours)?;
            }
            Self::Irradiance { current } => {
                *current = parse_finite(text, MeasurementKind::Irradiance)?;
            }
            Self::Wind { speed, direction } => {
                // Structured representation: "<direction> <speed>", e.g. "NE 12.5".
                let (dir_text, speed_text) = text
                    .split_once(char::is_whitespace)
                    .ok_or_else(|| unparsable(MeasurementKind::Wind, text))?;
                let parsed_dir: CardinalDirection = dir_text
                    .parse()
                    .map_err(|()| unparsable(MeasurementKind::Wind, text))?;
                let parsed_speed = parse_finite(speed_text.trim(), MeasurementKind::Wind)?;
                if parsed_speed < 0.0 {
                    return Err(ValidationError::OutOfBounds {
                        value: parsed_speed,
                        lower: 0.0,
                        upper: f64::INFINITY,
                    });
                }
                *direction = parsed_dir;
                *speed = parsed_speed;
            }
            Self::OnOff { on } => {
                *on = match text.to_ascii_lowercase().as_str() {
                    "on" => true,
                    "off" => false,
                    _ => return Err(unparsable(MeasurementKind::OnOff, text)),
                };
            }
            Self::TimeOfDay { current } => {
                *current = text
                    .parse()
                    .map_err(|_| unparsable(MeasurementKind::TimeOfDay, text))?;
            }
        }
        Ok(())
    }
}

fn unparsable(kind: MeasurementKind, text: &str) -> ValidationError {
    ValidationError::UnparsableValue {
        kind: kind.label(),
        text: text.to_string(),
    }
}

fn parse_finite(text: &str, kind: MeasurementKind) -> Result<f64, ValidationError> {
    let parsed: f64 = text.parse().map_err(|_| unparsable(kind, text))?;
    if parsed.is_finite() {
        Ok(parsed)
    } else {
        Err(unparsable(kind, text))
    }
}

impl std::fmt::Display for Measurement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IntRange { current, .. } => write!(f, "{current}"),
            Self::DecimalRange { current, .. } => write!(f, "{current}"),
            Self::Percentage { current } => write!(f, "{current} %"),
            Self::Celsius { current } => write!(f, "{current} \u{b0}C"),
            Self::Watts { current } => write!(f, "{current} W"),
            Self::WattHours { current } => write!(f, "{current} Wh"),
            Self::Wind { speed, direction } => write!(f, "{direction} {speed} km/h"),
            Self::Irradiance { current } => write!(f, "{current} W/m\u{b2}"),
            Self::OnOff { on } => f.write_str(if *on { "on" } else { "off" }),
            Self::TimeOfDay { current } => write!(f, "{}", current.format("%H:%M:%S")),
        }
    }
}
