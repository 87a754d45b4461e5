//! Zone domain model.
//!
//! # Responsibility
//! - Define the persisted geofence record and its draft (pre-insert) form.
//! - Validate editor input before it can reach the store.
//!
//! # Invariants
//! - `radius` is strictly positive, in meters.
//! - `name` is non-empty after trimming.
//! - `id` exists only on persisted records; drafts carry no id.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable store-assigned identifier for a persisted zone.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ZoneId = i64;

/// Target notification/audio state applied when a zone matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhoneMode {
    /// All sound off.
    Silent,
    /// Vibration only.
    Vibrate,
    /// Full sound. Also the reset state when no zone matches.
    Normal,
}

impl PhoneMode {
    /// Integer code used at the host-app boundary (matches the platform
    /// ringer-mode constants: silent=0, vibrate=1, normal=2).
    pub fn code(self) -> i64 {
        match self {
            Self::Silent => 0,
            Self::Vibrate => 1,
            Self::Normal => 2,
        }
    }

    /// Parses a host-app integer code back into a mode.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::Silent),
            1 => Some(Self::Vibrate),
            2 => Some(Self::Normal),
            _ => None,
        }
    }
}

impl Display for PhoneMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Silent => "silent",
            Self::Vibrate => "vibrate",
            Self::Normal => "normal",
        };
        write!(f, "{label}")
    }
}

/// Persisted geofence definition.
///
/// A zone is a circle on the earth's surface plus the mode the device
/// should adopt while inside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    /// Store-assigned id, stable across updates.
    pub id: ZoneId,
    /// User-facing label. Acts as the upsert natural key.
    pub name: String,
    /// Center latitude in degrees.
    pub latitude: f64,
    /// Center longitude in degrees.
    pub longitude: f64,
    /// Circle radius in meters. Always > 0.
    pub radius: f64,
    /// Mode to apply while the device is inside this zone.
    pub mode: PhoneMode,
}

impl Zone {
    /// Validates a persisted record read back from the store.
    pub fn validate(&self) -> Result<(), ZoneValidationError> {
        validate_fields(&self.name, self.latitude, self.longitude, self.radius)
    }
}

/// Editor-submitted zone candidate, not yet assigned an id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneDraft {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub radius: f64,
    pub mode: PhoneMode,
}

impl ZoneDraft {
    /// Validates editor input before persistence.
    ///
    /// # Errors
    /// - `EmptyName` when the trimmed name is empty.
    /// - `NonPositiveRadius` when `radius <= 0` or non-finite.
    /// - `CoordinateOutOfRange` when lat/lon are non-finite or outside
    ///   [-90, 90] / [-180, 180].
    pub fn validate(&self) -> Result<(), ZoneValidationError> {
        validate_fields(&self.name, self.latitude, self.longitude, self.radius)
    }

    /// Attaches a store-assigned id, producing the persisted form.
    pub fn into_zone(self, id: ZoneId) -> Zone {
        Zone {
            id,
            name: self.name,
            latitude: self.latitude,
            longitude: self.longitude,
            radius: self.radius,
            mode: self.mode,
        }
    }
}

fn validate_fields(
    name: &str,
    latitude: f64,
    longitude: f64,
    radius: f64,
) -> Result<(), ZoneValidationError> {
    if name.trim().is_empty() {
        return Err(ZoneValidationError::EmptyName);
    }
    if !radius.is_finite() || radius <= 0.0 {
        return Err(ZoneValidationError::NonPositiveRadius(radius));
    }
    if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
        return Err(ZoneValidationError::CoordinateOutOfRange {
            axis: "latitude",
            value: latitude,
        });
    }
    if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
        return Err(ZoneValidationError::CoordinateOutOfRange {
            axis: "longitude",
            value: longitude,
        });
    }
    Ok(())
}

/// Validation failure for zone input or persisted zone state.
#[derive(Debug, Clone, PartialEq)]
pub enum ZoneValidationError {
    EmptyName,
    NonPositiveRadius(f64),
    CoordinateOutOfRange { axis: &'static str, value: f64 },
}

impl Display for ZoneValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "zone name must not be empty"),
            Self::NonPositiveRadius(value) => {
                write!(f, "zone radius must be positive, got {value}")
            }
            Self::CoordinateOutOfRange { axis, value } => {
                write!(f, "zone {axis} out of range: {value}")
            }
        }
    }
}

impl Error for ZoneValidationError {}
