//! Snapshot repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist the full record array as one JSON payload under a fixed slot key.
//! - Restore the array on startup, reporting corrupt payloads as typed errors.
//!
//! # Invariants
//! - `save` overwrites the whole slot; there is no partial update path.
//! - Payload keys follow the external camelCase contract of [`Doctor`].

use crate::db::DbError;
use crate::model::doctor::Doctor;
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Slot key holding the practitioner directory.
pub const DOCTORS_SLOT: &str = "doctors";

pub type RepoResult<T> = Result<T, RepoError>;

/// Persistence-layer error for snapshot reads and writes.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// Stored payload exists but is not a valid record array.
    MalformedSnapshot {
        slot: String,
        message: String,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::MalformedSnapshot { slot, message } => {
                write!(f, "malformed snapshot in slot `{slot}`: {message}")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::MalformedSnapshot { .. } => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Load/save contract for the durable record snapshot.
///
/// The record store owns an implementation of this trait and calls `save`
/// after every successful mutation; `load` runs once at startup.
pub trait SnapshotRepository {
    /// Reads the slot. `None` means the slot has never been written.
    fn load(&self) -> RepoResult<Option<Vec<Doctor>>>;
    /// Serializes `records` and overwrites the slot.
    fn save(&self, records: &[Doctor]) -> RepoResult<()>;
}

/// SQLite-backed snapshot repository over a borrowed connection.
pub struct SqliteSnapshotRepository<'conn> {
    conn: &'conn Connection,
    slot: &'static str,
}

impl<'conn> SqliteSnapshotRepository<'conn> {
    /// Repository over the default directory slot.
    pub fn new(conn: &'conn Connection) -> Self {
        Self::with_slot(conn, DOCTORS_SLOT)
    }

    /// Repository over a caller-chosen slot key.
    pub fn with_slot(conn: &'conn Connection, slot: &'static str) -> Self {
        Self { conn, slot }
    }
}

impl SnapshotRepository for SqliteSnapshotRepository<'_> {
    fn load(&self) -> RepoResult<Option<Vec<Doctor>>> {
        let payload: Option<String> = self
            .conn
            .query_row(
                "SELECT payload FROM snapshots WHERE slot = ?1;",
                [self.slot],
                |row| row.get(0),
            )
            .optional()?;

        let Some(payload) = payload else {
            return Ok(None);
        };

        let records =
            serde_json::from_str(&payload).map_err(|err| RepoError::MalformedSnapshot {
                slot: self.slot.to_string(),
                message: err.to_string(),
            })?;
        Ok(Some(records))
    }

    fn save(&self, records: &[Doctor]) -> RepoResult<()> {
        let payload =
            serde_json::to_string(records).map_err(|err| RepoError::MalformedSnapshot {
                slot: self.slot.to_string(),
                message: err.to_string(),
            })?;

        self.conn.execute(
            "INSERT INTO snapshots (slot, payload, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(slot) DO UPDATE SET
                payload = excluded.payload,
                updated_at = excluded.updated_at;",
            params![self.slot, payload],
        )?;

        Ok(())
    }
}
