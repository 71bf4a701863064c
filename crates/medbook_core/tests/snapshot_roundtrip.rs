use medbook_core::db::{open_db, open_db_in_memory};
use medbook_core::{
    DoctorDraft, DoctorStore, SnapshotRepository, SqliteSnapshotRepository, DOCTORS_SLOT,
};
use rusqlite::params;

fn draft(name: &str, city: &str, specialty: &str) -> DoctorDraft {
    DoctorDraft {
        full_name: name.to_string(),
        address: "Hauptstr. 1".to_string(),
        phone: "030-1".to_string(),
        specialty: specialty.to_string(),
        city: city.to_string(),
    }
}

#[test]
fn load_on_fresh_storage_yields_empty_slot() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSnapshotRepository::new(&conn);
    assert!(repo.load().unwrap().is_none());
}

#[test]
fn save_then_load_yields_deeply_equal_records() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSnapshotRepository::new(&conn);

    let mut store = DoctorStore::open(SqliteSnapshotRepository::new(&conn));
    store.add(draft("A. Müller", "Berlin", "Kardiologie"));
    store.add(draft("B. Schmidt", "Hamburg", "HNO"));
    store.remove(store.records()[0].id);
    let expected = store.records().to_vec();

    let loaded = repo.load().unwrap().unwrap();
    assert_eq!(loaded, expected);
}

#[test]
fn restart_over_the_same_file_restores_the_sequence() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("medbook.sqlite3");

    let before_restart = {
        let conn = open_db(&path).unwrap();
        let mut store = DoctorStore::open(SqliteSnapshotRepository::new(&conn));
        store.add(draft("A. Müller", "Berlin", "Kardiologie"));
        store.add(draft("C. Weber", "München", "Neurologie"));
        store.records().to_vec()
    };

    let conn = open_db(&path).unwrap();
    let store = DoctorStore::open(SqliteSnapshotRepository::new(&conn));
    assert_eq!(store.records(), before_restart.as_slice());
}

#[test]
fn scenario_single_add_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("medbook.sqlite3");

    let created = {
        let conn = open_db(&path).unwrap();
        let mut store = DoctorStore::open(SqliteSnapshotRepository::new(&conn));
        assert!(store.is_empty());
        let created = store.add(DoctorDraft {
            full_name: "A. Müller".to_string(),
            address: "Hauptstr. 1".to_string(),
            phone: "030-1".to_string(),
            specialty: "Kardiologie".to_string(),
            city: "Berlin".to_string(),
        });
        assert_eq!(store.len(), 1);
        created
    };

    let conn = open_db(&path).unwrap();
    let store = DoctorStore::open(SqliteSnapshotRepository::new(&conn));
    assert_eq!(store.records(), std::slice::from_ref(&created));
}

#[test]
fn corrupt_payload_fails_soft_to_an_empty_store() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO snapshots (slot, payload) VALUES (?1, ?2);",
        params![DOCTORS_SLOT, "{not json"],
    )
    .unwrap();

    let repo = SqliteSnapshotRepository::new(&conn);
    assert!(repo.load().is_err());

    // The store absorbs the same failure and starts a usable empty session.
    let mut store = DoctorStore::open(SqliteSnapshotRepository::new(&conn));
    assert!(store.is_empty());
    store.add(draft("Fresh", "Berlin", "Kardiologie"));
    assert_eq!(store.len(), 1);
}

#[test]
fn save_failure_keeps_the_in_memory_sequence_authoritative() {
    let conn = open_db_in_memory().unwrap();
    let mut store = DoctorStore::open(SqliteSnapshotRepository::new(&conn));
    store.add(draft("Persisted", "Berlin", "Kardiologie"));

    // Simulate a broken storage backend mid-session.
    conn.execute_batch("DROP TABLE snapshots;").unwrap();

    let created = store.add(draft("Memory only", "Hamburg", "HNO"));
    assert_eq!(store.len(), 2);
    assert_eq!(store.get(created.id).unwrap().full_name, "Memory only");
}

#[test]
fn slots_are_independent() {
    let conn = open_db_in_memory().unwrap();
    let default_repo = SqliteSnapshotRepository::new(&conn);
    let other_repo = SqliteSnapshotRepository::with_slot(&conn, "doctors-archive");

    let mut store = DoctorStore::open(SqliteSnapshotRepository::new(&conn));
    store.add(draft("A. Müller", "Berlin", "Kardiologie"));

    assert_eq!(default_repo.load().unwrap().unwrap().len(), 1);
    assert!(other_repo.load().unwrap().is_none());
}
