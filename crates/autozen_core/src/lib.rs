//! Core engine for location-triggered phone mode switching.
//! This crate is the single source of truth for business invariants:
//! geofence matching, first-match tie-breaking, mode debouncing, and
//! durable zone storage.

pub mod db;
pub mod geofence;
pub mod logging;
pub mod model;
pub mod monitor;
pub mod repo;
pub mod service;

pub use geofence::evaluate::{evaluate, haversine_distance_m, Decision};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::position::Position;
pub use model::zone::{PhoneMode, Zone, ZoneDraft, ZoneId, ZoneValidationError};
pub use monitor::{
    start as start_monitor, LoopState, MonitorConfig, MonitorError, MonitorHandle,
    PositionProvider, ProviderError, SampleSink, Subscription,
};
pub use repo::zone_repo::{RepoError, RepoResult, SqliteZoneRepository, ZoneRepository};
pub use service::mode_controller::{Applied, ModeController, ModeSetter, SetModeError};
pub use service::zone_service::ZoneService;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
