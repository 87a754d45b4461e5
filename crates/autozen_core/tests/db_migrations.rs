use autozen_core::db::migrations::latest_version;
use autozen_core::db::{open_db, open_db_in_memory};
use autozen_core::{PhoneMode, SqliteZoneRepository, ZoneDraft, ZoneRepository};
use rusqlite::Connection;

#[test]
fn fresh_database_lands_on_latest_version() {
    let conn = open_db_in_memory().unwrap();
    let version: u32 = conn
        .query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(version, latest_version());
}

#[test]
fn zones_table_exists_with_expected_columns() {
    let conn = open_db_in_memory().unwrap();
    let mut stmt = conn.prepare("PRAGMA table_info(zones);").unwrap();
    let columns: Vec<String> = stmt
        .query_map([], |row| row.get::<_, String>(1))
        .unwrap()
        .map(Result::unwrap)
        .collect();
    assert_eq!(
        columns,
        ["id", "name", "latitude", "longitude", "radius", "mode"]
    );
}

#[test]
fn reopening_a_file_database_preserves_zones() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("autozen.db");

    {
        let conn = open_db(&path).unwrap();
        let repo = SqliteZoneRepository::new(&conn);
        repo.insert_zone(&ZoneDraft {
            name: "Office".to_string(),
            latitude: 37.0,
            longitude: -122.0,
            radius: 50.0,
            mode: PhoneMode::Silent,
        })
        .unwrap();
    }

    let conn = open_db(&path).unwrap();
    let repo = SqliteZoneRepository::new(&conn);
    let zones = repo.list_zones().unwrap();
    assert_eq!(zones.len(), 1);
    assert_eq!(zones[0].name, "Office");
}

#[test]
fn newer_schema_version_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");

    {
        let conn = Connection::open(&path).unwrap();
        conn.execute_batch(&format!(
            "PRAGMA user_version = {};",
            latest_version() + 1
        ))
        .unwrap();
    }

    assert!(open_db(&path).is_err());
}
