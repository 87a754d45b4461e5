//! Position sample model.
//!
//! Samples are ephemeral: delivered by the external location provider,
//! consumed by exactly one evaluation cycle, never persisted.

use serde::{Deserialize, Serialize};

/// One device position fix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
    /// Estimated horizontal accuracy in meters, when the provider reports it.
    pub accuracy: Option<f64>,
    /// Fix time in epoch milliseconds, when the provider reports it.
    pub timestamp_ms: Option<i64>,
}

impl Position {
    /// Builds a bare fix from coordinates only.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            accuracy: None,
            timestamp_ms: None,
        }
    }
}
