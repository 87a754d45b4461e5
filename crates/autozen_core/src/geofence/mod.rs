//! Pure geofence evaluation.
//!
//! # Responsibility
//! - Decide the target mode for a position against the saved zone set.
//! - Keep the decision free of I/O so it stays trivially testable.
//!
//! # Invariants
//! - Zones are scanned in slice order; the first match wins.
//! - No match resolves to `PhoneMode::Normal`.

pub mod evaluate;
