//! Background monitoring loop and its provider boundary.
//!
//! # Responsibility
//! - Drive evaluate-and-apply cycles from pushed position samples.
//! - Own loop lifecycle (`Stopped -> Starting -> Running -> Stopped`).
//!
//! # Invariants
//! - Samples are consumed one at a time off a single channel, so cycles
//!   never overlap and applied-mode state cannot race.
//! - Only permission denial stops the loop; any other cycle error is
//!   logged and the loop waits for the next sample.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Duration;

pub mod monitor_loop;
pub mod provider;

pub use monitor_loop::{start, LoopState, MonitorHandle};
pub use provider::{PositionProvider, ProviderError, SampleSink, Subscription};

/// Interval the original service requested location updates at.
const DEFAULT_MIN_UPDATE_INTERVAL: Duration = Duration::from_secs(5);

/// Loop configuration handed to the position provider at subscribe time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorConfig {
    /// Minimum interval between delivered samples. Defaults to 5 seconds.
    pub min_update_interval: Duration,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            min_update_interval: DEFAULT_MIN_UPDATE_INTERVAL,
        }
    }
}

/// Failure to bring the monitoring loop up.
#[derive(Debug)]
pub enum MonitorError {
    /// Position subscription could not be registered.
    Provider(ProviderError),
}

impl Display for MonitorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Provider(err) => write!(f, "{err}"),
        }
    }
}

impl Error for MonitorError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Provider(err) => Some(err),
        }
    }
}

impl From<ProviderError> for MonitorError {
    fn from(value: ProviderError) -> Self {
        Self::Provider(value)
    }
}
