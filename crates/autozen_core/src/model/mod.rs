//! Domain model for geofenced mode zones.
//!
//! # Responsibility
//! - Define the canonical zone record and the target-mode enumeration.
//! - Define the ephemeral position sample consumed by the evaluator.
//!
//! # Invariants
//! - Every persisted zone has a positive radius and a non-empty name.
//! - Zone ids are assigned by the store and never reused after deletion.

pub mod position;
pub mod zone;
