//! Mode application state and platform capability boundary.
//!
//! # Responsibility
//! - Track the mode last applied to the platform.
//! - Suppress redundant platform calls when already in the target mode.
//!
//! # Invariants
//! - `current` starts at `Normal` on construction and is never persisted.
//! - `current` only advances after the platform call succeeds; a failed
//!   call leaves it untouched.

use crate::geofence::evaluate::Decision;
use crate::model::zone::PhoneMode;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Platform capability that switches the device's notification/audio mode.
///
/// The host application implements this over its audio stack; core never
/// touches the platform directly.
pub trait ModeSetter {
    /// Applies `mode` on the device.
    ///
    /// # Errors
    /// - `SetModeError::PermissionDenied` when the required
    ///   notification-policy access has not been granted. Core treats this
    ///   as fatal and never retries it on its own.
    fn set_mode(&self, mode: PhoneMode) -> Result<(), SetModeError>;
}

/// Failure reported by the platform mode-setter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetModeError {
    /// Notification-policy (do-not-disturb) access is missing or revoked.
    PermissionDenied,
}

impl Display for SetModeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PermissionDenied => {
                write!(f, "notification-policy access denied by platform")
            }
        }
    }
}

impl Error for SetModeError {}

/// Result of applying one decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// Target already active; no platform call was made.
    Unchanged,
    /// Platform call succeeded and the tracked mode advanced.
    Switched,
}

/// Owns the applied-mode state and the debounce rule.
pub struct ModeController<S: ModeSetter> {
    setter: S,
    current: PhoneMode,
}

impl<S: ModeSetter> ModeController<S> {
    /// Creates a controller in the `Normal` reset state.
    pub fn new(setter: S) -> Self {
        Self {
            setter,
            current: PhoneMode::Normal,
        }
    }

    /// Mode last successfully applied to the platform.
    pub fn current(&self) -> PhoneMode {
        self.current
    }

    /// Applies an evaluation decision, debouncing no-op transitions.
    ///
    /// # Contract
    /// - `target == current` makes no platform call and returns
    ///   `Applied::Unchanged`.
    /// - On platform failure, `current` is unchanged and the error
    ///   propagates to the caller (the monitoring loop treats it as fatal).
    pub fn apply(&mut self, decision: &Decision) -> Result<Applied, SetModeError> {
        if decision.target == self.current {
            return Ok(Applied::Unchanged);
        }

        self.setter.set_mode(decision.target)?;

        info!(
            "event=mode_apply module=service status=ok from={} to={} zone={}",
            self.current,
            decision.target,
            decision
                .matched
                .map_or_else(|| "none".to_string(), |id| id.to_string())
        );
        self.current = decision.target;
        Ok(Applied::Switched)
    }
}
