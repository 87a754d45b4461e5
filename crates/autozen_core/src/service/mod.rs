//! Use-case services orchestrating repository and platform capabilities.
//!
//! # Responsibility
//! - Provide stable entry points for zone editing and mode application.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Services never bypass repository validation/persistence contracts.
//! - The mode controller is the only writer of applied-mode state.

pub mod mode_controller;
pub mod zone_service;
