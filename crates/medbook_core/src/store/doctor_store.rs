//! Record store over an injected snapshot repository.
//!
//! # Responsibility
//! - Expose the only mutation points for the record sequence.
//! - Persist the full sequence after each successful mutation.
//!
//! # Invariants
//! - Insertion order is preserved; `update` replaces in place.
//! - Ids are unique across the store; they are generated here, never accepted
//!   from callers on create.
//! - Storage failures never poison the session: a failed load starts empty,
//!   a failed save keeps the in-memory sequence authoritative.

use crate::model::doctor::{Doctor, DoctorDraft, DoctorId};
use crate::repo::snapshot_repo::SnapshotRepository;
use log::{debug, error, info, warn};

/// Ordered record collection, the single source of truth for a session.
pub struct DoctorStore<R: SnapshotRepository> {
    records: Vec<Doctor>,
    repo: R,
}

impl<R: SnapshotRepository> DoctorStore<R> {
    /// Restores the persisted sequence, or starts empty.
    ///
    /// # Contract
    /// - A missing slot is a normal first start.
    /// - A read or parse failure is logged and treated as "no prior data";
    ///   it is never fatal.
    pub fn open(repo: R) -> Self {
        let records = match repo.load() {
            Ok(Some(records)) => {
                info!(
                    "event=store_load module=store status=ok count={}",
                    records.len()
                );
                records
            }
            Ok(None) => {
                info!("event=store_load module=store status=ok count=0 slot=empty");
                Vec::new()
            }
            Err(err) => {
                warn!("event=store_load module=store status=recovered error={err}");
                Vec::new()
            }
        };

        Self { records, repo }
    }

    /// Current sequence, in insertion order.
    pub fn records(&self) -> &[Doctor] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Looks up one record by id.
    pub fn get(&self, id: DoctorId) -> Option<&Doctor> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Appends a new record with a freshly generated id and returns it.
    ///
    /// No duplicate detection happens here; two records may carry identical
    /// field values under different ids.
    pub fn add(&mut self, draft: DoctorDraft) -> Doctor {
        let record = Doctor::new(draft);
        self.records.push(record.clone());
        self.sync();
        record
    }

    /// Appends one record per draft, in input order, after all existing
    /// entries. Returns the number appended.
    ///
    /// The whole batch is committed under a single persistence sync.
    pub fn add_batch(&mut self, drafts: Vec<DoctorDraft>) -> usize {
        let appended = drafts.len();
        self.records.extend(drafts.into_iter().map(Doctor::new));
        if appended > 0 {
            self.sync();
        }
        appended
    }

    /// Replaces the record with a matching id in place.
    ///
    /// An unknown id is a silent no-op: nothing changes and no error is
    /// raised. See DESIGN.md for the open question around stricter handling.
    pub fn update(&mut self, doctor: Doctor) {
        match self.records.iter_mut().find(|r| r.id == doctor.id) {
            Some(slot) => {
                *slot = doctor;
                self.sync();
            }
            None => {
                debug!(
                    "event=store_update module=store status=ignored reason=unknown_id id={}",
                    doctor.id
                );
            }
        }
    }

    /// Deletes the record with a matching id. No-op when absent.
    pub fn remove(&mut self, id: DoctorId) {
        let before = self.records.len();
        self.records.retain(|record| record.id != id);
        if self.records.len() != before {
            self.sync();
        } else {
            debug!("event=store_remove module=store status=ignored reason=unknown_id id={id}");
        }
    }

    /// Writes the full sequence to durable storage.
    ///
    /// A write failure (quota, locked file) is logged and swallowed; the
    /// in-memory sequence stays authoritative for the rest of the session.
    fn sync(&self) {
        if let Err(err) = self.repo.save(&self.records) {
            error!(
                "event=store_sync module=store status=error count={} error={err}",
                self.records.len()
            );
        }
    }
}
