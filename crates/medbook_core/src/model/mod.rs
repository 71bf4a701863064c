//! Domain model for the practitioner directory.
//!
//! # Responsibility
//! - Define the canonical record shape shared by store, codec and query view.
//!
//! # Invariants
//! - Every record is identified by a stable `DoctorId`.
//! - Deletion is a hard delete; no tombstone state exists in the model.

pub mod doctor;
