//! Persistence adapter layer.
//!
//! # Responsibility
//! - Define the snapshot load/save contract the record store depends on.
//! - Isolate SQLite details from store and service code.
//!
//! # Invariants
//! - `load` after `save` on the same slot yields a deeply equal sequence,
//!   provided no other writer touched the slot in between.

pub mod snapshot_repo;
