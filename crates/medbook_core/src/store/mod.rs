//! Authoritative in-memory record store.
//!
//! # Responsibility
//! - Hold the ordered record sequence for the running session.
//! - Keep durable storage in sync after every mutation.

pub mod doctor_store;
