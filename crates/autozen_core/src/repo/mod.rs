//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the data access contract the engine evaluates against.
//! - Isolate SQLite query details from service/loop orchestration.
//!
//! # Invariants
//! - Repository writes enforce zone validation before persistence.
//! - Repository APIs return semantic errors (`NotFound`) in addition to DB
//!   transport errors.

pub mod zone_repo;
