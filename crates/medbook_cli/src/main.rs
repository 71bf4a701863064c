//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `medbook_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use medbook_core::db::open_db_in_memory;
use medbook_core::{DirectoryService, SqliteSnapshotRepository};

fn main() {
    println!("medbook_core version={}", medbook_core::core_version());

    match open_db_in_memory() {
        Ok(conn) => {
            let service = DirectoryService::open(SqliteSnapshotRepository::new(&conn));
            println!("directory ok, records={}", service.doctors().len());
        }
        Err(err) => {
            eprintln!("storage bootstrap failed: {err}");
            std::process::exit(1);
        }
    }
}
