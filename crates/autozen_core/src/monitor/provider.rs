//! Position provider capability boundary.
//!
//! # Responsibility
//! - Define how the host's location stack pushes samples into the loop.
//! - Guarantee cancellation semantics: dropping the subscription stops
//!   further deliveries.
//!
//! # Invariants
//! - Subscribing requires location access; denial is reported before the
//!   loop ever starts.
//! - Transient delivery failures are logged and skipped, never fatal.

use super::monitor_loop::LoopEvent;
use super::MonitorConfig;
use crate::model::position::Position;
use log::warn;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::mpsc::Sender;

/// Failure reported by the position provider at subscribe time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// Location access has not been granted to the host process.
    PermissionDenied,
    /// Provider is present but cannot deliver (no backend, hardware off).
    Unavailable(String),
}

impl Display for ProviderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PermissionDenied => write!(f, "location access denied by platform"),
            Self::Unavailable(reason) => write!(f, "position provider unavailable: {reason}"),
        }
    }
}

impl Error for ProviderError {}

/// Push endpoint the provider delivers samples into.
///
/// Cloneable so host callback closures can own one copy each.
#[derive(Clone)]
pub struct SampleSink {
    tx: Sender<LoopEvent>,
}

impl SampleSink {
    pub(crate) fn new(tx: Sender<LoopEvent>) -> Self {
        Self { tx }
    }

    /// Delivers one position fix to the loop.
    ///
    /// Returns `false` when the loop has already stopped; the provider
    /// should treat that as a cue to cancel itself.
    pub fn deliver(&self, sample: Position) -> bool {
        self.tx.send(LoopEvent::Sample(sample)).is_ok()
    }

    /// Reports a transient failure to obtain a fix. Logged, never fatal.
    pub fn report_failure(&self, reason: &str) {
        warn!("event=provider_failure module=monitor status=error reason={reason}");
    }
}

/// External location source the host implements.
pub trait PositionProvider {
    /// Registers for position updates at the configured minimum interval.
    ///
    /// # Errors
    /// - `ProviderError::PermissionDenied` when location access is missing;
    ///   the loop stays `Stopped` in that case.
    fn subscribe(
        &mut self,
        config: &MonitorConfig,
        sink: SampleSink,
    ) -> Result<Box<dyn Subscription>, ProviderError>;
}

/// Live position registration. Dropping it must stop further callbacks.
pub trait Subscription: Send {}
