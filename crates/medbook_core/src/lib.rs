//! Core domain logic for the medbook practitioner directory.
//! This crate is the single source of truth for record, persistence and
//! bulk-transfer invariants; interaction surfaces stay outside.

pub mod codec;
pub mod db;
pub mod logging;
pub mod model;
pub mod query;
pub mod repo;
pub mod service;
pub mod store;

pub use codec::workbook::{
    decode_workbook, encode_workbook, ExportError, ImportError, EXPORT_FILE_NAME, EXPORT_HEADER,
    EXPORT_SHEET_NAME,
};
pub use logging::{default_log_level, init_logging};
pub use model::doctor::{Doctor, DoctorDraft, DoctorId, DraftValidationError};
pub use query::view::{
    city_options, specialty_options, view, FacetFilter, ViewQuery, FACET_ALL,
};
pub use repo::snapshot_repo::{
    RepoError, RepoResult, SnapshotRepository, SqliteSnapshotRepository, DOCTORS_SLOT,
};
pub use service::directory_service::DirectoryService;
pub use store::doctor_store::DoctorStore;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
