//! Doctor domain model.
//!
//! # Responsibility
//! - Define the canonical practitioner record and its draft (pre-id) form.
//! - Provide the required-field check used by form-level intents.
//!
//! # Invariants
//! - `id` is generated by the system, unique, and immutable once assigned.
//! - The five non-id fields are always present as strings; empty strings are
//!   a permitted degraded state for rows that arrived via bulk import.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a practitioner record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type DoctorId = Uuid;

/// One practitioner entry.
///
/// Serialized keys use the external camelCase contract so persisted snapshots
/// keep the shape `{"id", "fullName", "address", "phone", "specialty", "city"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    /// Stable global ID, never supplied by callers.
    pub id: DoctorId,
    pub full_name: String,
    pub address: String,
    pub phone: String,
    /// Filter facet.
    pub specialty: String,
    /// Filter facet.
    pub city: String,
}

/// The five caller-supplied fields of a record, before an id exists.
///
/// This is what the form submits on create and what one decoded spreadsheet
/// row becomes on import.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DoctorDraft {
    pub full_name: String,
    pub address: String,
    pub phone: String,
    pub specialty: String,
    pub city: String,
}

/// Required-field violation raised at the intent boundary.
///
/// The store itself never runs this check; see [`DoctorDraft::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftValidationError {
    /// External (camelCase) name of the first missing field.
    pub field: &'static str,
}

impl Display for DraftValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "required field `{}` is missing or empty", self.field)
    }
}

impl Error for DraftValidationError {}

impl DoctorDraft {
    /// Checks that every field carries a non-blank value.
    ///
    /// # Contract
    /// - Mirrors the form's `required` inputs; blocks add/update intents
    ///   before they reach the record store.
    /// - Batch import deliberately bypasses this check, so short spreadsheet
    ///   rows may commit records with empty fields.
    ///
    /// # Errors
    /// - Returns the first missing field in column order.
    pub fn validate(&self) -> Result<(), DraftValidationError> {
        for (field, value) in [
            ("fullName", self.full_name.as_str()),
            ("address", self.address.as_str()),
            ("phone", self.phone.as_str()),
            ("specialty", self.specialty.as_str()),
            ("city", self.city.as_str()),
        ] {
            if value.trim().is_empty() {
                return Err(DraftValidationError { field });
            }
        }
        Ok(())
    }
}

impl Doctor {
    /// Creates a record from a draft with a freshly generated id.
    pub fn new(draft: DoctorDraft) -> Self {
        Self::with_id(Uuid::new_v4(), draft)
    }

    /// Creates a record with a caller-provided id.
    ///
    /// Only the store's own paths and tests should use this; normal creation
    /// always generates the id.
    pub fn with_id(id: DoctorId, draft: DoctorDraft) -> Self {
        Self {
            id,
            full_name: draft.full_name,
            address: draft.address,
            phone: draft.phone,
            specialty: draft.specialty,
            city: draft.city,
        }
    }

    /// The five searchable field values, in column order.
    ///
    /// Search and export iterate this fixed enumeration; the record shape is
    /// known at design time, so no reflective field walking happens anywhere.
    pub fn field_values(&self) -> [&str; 5] {
        [
            &self.full_name,
            &self.address,
            &self.phone,
            &self.specialty,
            &self.city,
        ]
    }

    /// Copies the non-id fields back into draft form.
    pub fn to_draft(&self) -> DoctorDraft {
        DoctorDraft {
            full_name: self.full_name.clone(),
            address: self.address.clone(),
            phone: self.phone.clone(),
            specialty: self.specialty.clone(),
            city: self.city.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Doctor, DoctorDraft};

    fn draft(name: &str) -> DoctorDraft {
        DoctorDraft {
            full_name: name.to_string(),
            address: "Hauptstr. 1".to_string(),
            phone: "030-1".to_string(),
            specialty: "Kardiologie".to_string(),
            city: "Berlin".to_string(),
        }
    }

    #[test]
    fn new_assigns_distinct_ids() {
        let first = Doctor::new(draft("A. Müller"));
        let second = Doctor::new(draft("A. Müller"));
        assert_ne!(first.id, second.id);
        assert_eq!(first.full_name, second.full_name);
    }

    #[test]
    fn validate_names_first_missing_field() {
        let mut incomplete = draft("B. Schmidt");
        incomplete.phone = "  ".to_string();
        let err = incomplete.validate().unwrap_err();
        assert_eq!(err.field, "phone");

        assert!(draft("ok").validate().is_ok());
        assert!(DoctorDraft::default().validate().is_err());
    }

    #[test]
    fn serde_uses_camel_case_keys() {
        let doctor = Doctor::new(draft("A. Müller"));
        let json = serde_json::to_string(&doctor).unwrap();
        assert!(json.contains("\"fullName\""));
        assert!(json.contains("\"specialty\""));
        assert!(!json.contains("full_name"));

        let back: Doctor = serde_json::from_str(&json).unwrap();
        assert_eq!(back, doctor);
    }
}
