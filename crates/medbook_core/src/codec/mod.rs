//! Tabular codec for bulk transfer.
//!
//! # Responsibility
//! - Convert between record batches and spreadsheet workbook bytes.
//!
//! # Invariants
//! - Decode never touches the record store; a failed decode commits nothing.
//! - Ids are never written to or read from workbooks.

pub mod workbook;
