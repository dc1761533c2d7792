use ptable_core::db::migrations::latest_version;
use ptable_core::{open_db, open_db_maintenance, DbError, PeriodicTable};

mod common;

#[test]
fn maintenance_open_applies_all_migrations() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ptable.db");

    let conn = open_db_maintenance(&path).unwrap();
    let version: u32 = conn
        .query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(version, latest_version());
    drop(conn);

    // Re-opening an up-to-date store is a no-op.
    assert!(open_db_maintenance(&path).is_ok());
}

#[test]
fn runtime_open_is_read_only() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ptable.db");

    let conn = open_db_maintenance(&path).unwrap();
    conn.execute_batch(include_str!("common/fixture.sql")).unwrap();
    drop(conn);

    let table = PeriodicTable::open(&path).unwrap();
    assert_eq!(table.resolve("Fe").unwrap().atomic_number(), 26);
    assert_eq!(table.schema_version().unwrap(), latest_version());

    // Writes through the runtime handle must fail.
    let result = table
        .connection()
        .execute("UPDATE elements SET name = 'Irn' WHERE atomic_number = 26;", []);
    assert!(result.is_err());
    // And the data is untouched.
    assert_eq!(table.resolve(26u32).unwrap().name(), "Iron");
}

#[test]
fn missing_store_file_aborts_initialization() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does_not_exist.db");
    assert!(matches!(
        PeriodicTable::open(&path).unwrap_err(),
        DbError::Sqlite(_)
    ));
}

#[test]
fn newer_schema_versions_are_rejected_at_open() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ptable.db");

    let conn = open_db_maintenance(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 99;").unwrap();
    drop(conn);

    match open_db(&path).unwrap_err() {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 99);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("expected UnsupportedSchemaVersion, got {other:?}"),
    }
}

#[test]
fn older_schema_versions_are_rejected_for_runtime_use() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ptable.db");

    let conn = open_db_maintenance(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 1;").unwrap();
    drop(conn);

    // The runtime never migrates in place; a stale store is refused.
    assert!(matches!(
        open_db(&path).unwrap_err(),
        DbError::UnsupportedSchemaVersion { db_version: 1, .. }
    ));
}

#[test]
fn concurrent_read_only_handles_see_the_same_data() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ptable.db");

    let conn = open_db_maintenance(&path).unwrap();
    conn.execute_batch(include_str!("common/fixture.sql")).unwrap();
    drop(conn);

    let first = PeriodicTable::open(&path).unwrap();
    let second = PeriodicTable::open(&path).unwrap();
    assert_eq!(
        first.resolve("Na").unwrap().atomic_number(),
        second.resolve("sodium").unwrap().atomic_number()
    );
}

#[test]
fn schema_enforces_isotope_key_invariants() {
    let table = common::fixture_table();

    // Duplicate (Z, A) pair.
    let duplicate = table.connection().execute(
        "INSERT INTO isotopes (atomic_number, mass_number, mass, is_radioactive)
         VALUES (1, 1, 1.008, 0);",
        [],
    );
    assert!(duplicate.is_err());

    // Mass number below the atomic number.
    let invalid = table.connection().execute(
        "INSERT INTO isotopes (atomic_number, mass_number, mass, is_radioactive)
         VALUES (26, 20, 20.0, 0);",
        [],
    );
    assert!(invalid.is_err());
}
