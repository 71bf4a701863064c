//! Workbook decode/encode for bulk import and export.
//!
//! # Responsibility
//! - Decode the first worksheet of an `.xlsx`/`.xls` workbook into drafts.
//! - Encode a record batch into a single-sheet workbook with fixed headers.
//!
//! # Invariants
//! - Row 1 is skipped unconditionally on decode, whatever it contains.
//! - Column mapping is positional; header text in the source file is never
//!   consulted.

use crate::model::doctor::{Doctor, DoctorDraft};
use calamine::{open_workbook_auto_from_rs, Data, Reader};
use rust_xlsxwriter::{Workbook, XlsxError};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::Cursor;

/// Sheet name of the exported workbook.
pub const EXPORT_SHEET_NAME: &str = "Ärzte";

/// Fixed filename the interaction surface writes the export bytes to.
pub const EXPORT_FILE_NAME: &str = "aerzte-export.xlsx";

/// Human-readable header labels emitted on export, in column order.
pub const EXPORT_HEADER: [&str; 5] = [
    "Vollständiger Name",
    "Adresse",
    "Telefonnummer",
    "Fachgebiet",
    "Stadt",
];

/// Positional column names quoted in import error messages.
const EXPECTED_COLUMNS: &str = "Name, Adresse, Telefon, Fachgebiet, Stadt";

/// Decode failure on a malformed or incompatible file.
///
/// Surfaced to the user; the message names the expected column order so the
/// file can be fixed and retried.
#[derive(Debug)]
pub enum ImportError {
    /// The bytes are not a readable workbook.
    Unreadable(calamine::Error),
    /// The workbook contains no worksheet.
    MissingWorksheet,
}

impl Display for ImportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unreadable(err) => write!(
                f,
                "could not read workbook ({err}); expected columns in order: {EXPECTED_COLUMNS}"
            ),
            Self::MissingWorksheet => write!(
                f,
                "workbook has no worksheet; expected a first sheet with columns in order: {EXPECTED_COLUMNS}"
            ),
        }
    }
}

impl Error for ImportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Unreadable(err) => Some(err),
            Self::MissingWorksheet => None,
        }
    }
}

/// Encode failure while building the export workbook.
#[derive(Debug)]
pub struct ExportError(XlsxError);

impl Display for ExportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "could not build export workbook: {}", self.0)
    }
}

impl Error for ExportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.0)
    }
}

impl From<XlsxError> for ExportError {
    fn from(value: XlsxError) -> Self {
        Self(value)
    }
}

/// Decodes workbook bytes into one draft per data row.
///
/// # Contract
/// - Only the first worksheet is read; additional sheets are ignored.
/// - The first row is treated as a header and skipped regardless of content.
/// - Cells map positionally to [full name, address, phone, specialty, city];
///   missing trailing cells become empty strings rather than rejecting the
///   row.
///
/// # Errors
/// - [`ImportError`] when the bytes are not a readable workbook; the caller
///   must commit nothing in that case.
pub fn decode_workbook(bytes: &[u8]) -> Result<Vec<DoctorDraft>, ImportError> {
    let mut workbook =
        open_workbook_auto_from_rs(Cursor::new(bytes)).map_err(ImportError::Unreadable)?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or(ImportError::MissingWorksheet)?
        .map_err(ImportError::Unreadable)?;

    let drafts = range
        .rows()
        .skip(1)
        .map(|row| DoctorDraft {
            full_name: cell_text(row, 0),
            address: cell_text(row, 1),
            phone: cell_text(row, 2),
            specialty: cell_text(row, 3),
            city: cell_text(row, 4),
        })
        .collect();

    Ok(drafts)
}

/// Encodes records into a single-sheet workbook.
///
/// The id field is stripped; the output carries exactly the five field
/// columns under the fixed [`EXPORT_HEADER`] labels, one row per record in
/// input order. Callers pass the currently visible (filtered) set, not the
/// full store.
pub fn encode_workbook(records: &[Doctor]) -> Result<Vec<u8>, ExportError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(EXPORT_SHEET_NAME)?;

    for (col, label) in EXPORT_HEADER.iter().enumerate() {
        sheet.write_string(0, col as u16, *label)?;
    }
    for (row, record) in records.iter().enumerate() {
        for (col, value) in record.field_values().iter().enumerate() {
            sheet.write_string(row as u32 + 1, col as u16, *value)?;
        }
    }

    Ok(workbook.save_to_buffer()?)
}

fn cell_text(row: &[Data], index: usize) -> String {
    match row.get(index) {
        None | Some(Data::Empty) => String::new(),
        Some(Data::String(value)) => value.clone(),
        // Numbers, booleans and dates are stringified; phone-like columns
        // often arrive as numeric cells from hand-edited sheets.
        Some(other) => other.to_string(),
    }
}
