//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store, codec and query view into the intent-level API the
//!   interaction surface consumes.
//! - Keep UI layers decoupled from storage details.

pub mod directory_service;
