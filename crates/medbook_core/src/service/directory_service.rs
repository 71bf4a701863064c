//! Directory use-case service.
//!
//! # Responsibility
//! - Accept add/update/remove intents, enforcing the form's required-field
//!   contract before they reach the store.
//! - Drive bulk import/export through the workbook codec.
//!
//! # Invariants
//! - Import is all-or-nothing at the decode boundary; a failed decode
//!   commits zero records.
//! - Export always encodes the currently visible (filtered) set.

use crate::codec::workbook::{decode_workbook, encode_workbook, ExportError, ImportError};
use crate::model::doctor::{Doctor, DoctorDraft, DoctorId, DraftValidationError};
use crate::query::view::{city_options, specialty_options, view, ViewQuery};
use crate::repo::snapshot_repo::SnapshotRepository;
use crate::store::doctor_store::DoctorStore;
use log::info;

/// Intent-level API over one practitioner directory.
pub struct DirectoryService<R: SnapshotRepository> {
    store: DoctorStore<R>,
}

impl<R: SnapshotRepository> DirectoryService<R> {
    /// Opens the directory, restoring any persisted records.
    pub fn open(repo: R) -> Self {
        Self {
            store: DoctorStore::open(repo),
        }
    }

    /// Full record sequence, in insertion order.
    pub fn doctors(&self) -> &[Doctor] {
        self.store.records()
    }

    /// Creates a record from a form submission.
    ///
    /// # Errors
    /// - [`DraftValidationError`] when a required field is blank; the store
    ///   is not touched in that case.
    pub fn add_doctor(&mut self, draft: DoctorDraft) -> Result<Doctor, DraftValidationError> {
        draft.validate()?;
        Ok(self.store.add(draft))
    }

    /// Replaces an existing record with the form's merged edit.
    ///
    /// An unknown id passes validation and is then silently ignored by the
    /// store.
    pub fn update_doctor(&mut self, doctor: Doctor) -> Result<(), DraftValidationError> {
        doctor.to_draft().validate()?;
        self.store.update(doctor);
        Ok(())
    }

    /// Deletes a record once the surface has confirmed the action.
    pub fn remove_doctor(&mut self, id: DoctorId) {
        self.store.remove(id);
    }

    /// Visible subset for the current search/filter state.
    pub fn visible(&self, query: &ViewQuery) -> Vec<Doctor> {
        view(self.store.records(), query)
    }

    /// City dropdown options, `"all"` first.
    pub fn city_options(&self) -> Vec<String> {
        city_options(self.store.records())
    }

    /// Specialty dropdown options, `"all"` first.
    pub fn specialty_options(&self) -> Vec<String> {
        specialty_options(self.store.records())
    }

    /// Decodes workbook bytes and appends every data row as a new record.
    ///
    /// Returns the number of appended records, which the surface reports
    /// back to the user.
    ///
    /// # Errors
    /// - [`ImportError`] on unreadable input; the store is left untouched.
    pub fn import_workbook(&mut self, bytes: &[u8]) -> Result<usize, ImportError> {
        let drafts = decode_workbook(bytes)?;
        let appended = self.store.add_batch(drafts);
        info!("event=import module=service status=ok appended={appended}");
        Ok(appended)
    }

    /// Encodes the currently visible set as workbook bytes.
    ///
    /// The surface writes the bytes to [`EXPORT_FILE_NAME`]; ids are never
    /// part of the output.
    ///
    /// [`EXPORT_FILE_NAME`]: crate::codec::workbook::EXPORT_FILE_NAME
    pub fn export_workbook(&self, query: &ViewQuery) -> Result<Vec<u8>, ExportError> {
        let visible = self.visible(query);
        let bytes = encode_workbook(&visible)?;
        info!(
            "event=export module=service status=ok rows={} bytes={}",
            visible.len(),
            bytes.len()
        );
        Ok(bytes)
    }
}
