use autozen_core::db::open_db_in_memory;
use autozen_core::{
    PhoneMode, RepoError, SqliteZoneRepository, ZoneDraft, ZoneRepository, ZoneValidationError,
};

fn draft(name: &str, mode: PhoneMode) -> ZoneDraft {
    ZoneDraft {
        name: name.to_string(),
        latitude: 37.0,
        longitude: -122.0,
        radius: 50.0,
        mode,
    }
}

#[test]
fn insert_and_get_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteZoneRepository::new(&conn);

    let candidate = draft("Office", PhoneMode::Silent);
    let id = repo.insert_zone(&candidate).unwrap();

    let loaded = repo.get_zone(id).unwrap().unwrap();
    assert_eq!(loaded.id, id);
    assert_eq!(loaded.name, "Office");
    assert_eq!(loaded.latitude, 37.0);
    assert_eq!(loaded.longitude, -122.0);
    assert_eq!(loaded.radius, 50.0);
    assert_eq!(loaded.mode, PhoneMode::Silent);
}

#[test]
fn list_returns_insertion_order() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteZoneRepository::new(&conn);

    let first = repo.insert_zone(&draft("Home", PhoneMode::Normal)).unwrap();
    let second = repo
        .insert_zone(&draft("Office", PhoneMode::Silent))
        .unwrap();
    let third = repo
        .insert_zone(&draft("Library", PhoneMode::Vibrate))
        .unwrap();
    assert!(first < second && second < third);

    let zones = repo.list_zones().unwrap();
    let names: Vec<&str> = zones.iter().map(|zone| zone.name.as_str()).collect();
    assert_eq!(names, ["Home", "Office", "Library"]);
}

#[test]
fn ids_are_not_reused_after_delete() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteZoneRepository::new(&conn);

    let first = repo.insert_zone(&draft("Home", PhoneMode::Normal)).unwrap();
    repo.delete_zone(first).unwrap();

    let second = repo
        .insert_zone(&draft("Office", PhoneMode::Silent))
        .unwrap();
    assert!(second > first);
}

#[test]
fn update_fully_replaces_the_record() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteZoneRepository::new(&conn);

    let id = repo.insert_zone(&draft("Office", PhoneMode::Silent)).unwrap();

    let mut replacement = repo.get_zone(id).unwrap().unwrap();
    replacement.latitude = 40.0;
    replacement.radius = 120.0;
    replacement.mode = PhoneMode::Vibrate;
    repo.update_zone(&replacement).unwrap();

    let loaded = repo.get_zone(id).unwrap().unwrap();
    assert_eq!(loaded, replacement);
}

#[test]
fn update_missing_zone_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteZoneRepository::new(&conn);

    let ghost = draft("Ghost", PhoneMode::Silent).into_zone(999);
    let err = repo.update_zone(&ghost).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(999)));
}

#[test]
fn delete_is_idempotent() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteZoneRepository::new(&conn);

    let id = repo.insert_zone(&draft("Office", PhoneMode::Silent)).unwrap();
    repo.delete_zone(id).unwrap();
    repo.delete_zone(id).unwrap();
    assert!(repo.get_zone(id).unwrap().is_none());
}

#[test]
fn get_missing_zone_returns_none() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteZoneRepository::new(&conn);
    assert!(repo.get_zone(42).unwrap().is_none());
}

#[test]
fn invalid_drafts_never_reach_the_store() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteZoneRepository::new(&conn);

    let mut bad_radius = draft("Office", PhoneMode::Silent);
    bad_radius.radius = 0.0;
    let err = repo.insert_zone(&bad_radius).unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(ZoneValidationError::NonPositiveRadius(_))
    ));

    let bad_name = draft("  ", PhoneMode::Silent);
    let err = repo.insert_zone(&bad_name).unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(ZoneValidationError::EmptyName)
    ));

    assert!(repo.list_zones().unwrap().is_empty());
}

#[test]
fn zone_serde_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteZoneRepository::new(&conn);

    let id = repo.insert_zone(&draft("Office", PhoneMode::Silent)).unwrap();
    let zone = repo.get_zone(id).unwrap().unwrap();

    let json = serde_json::to_string(&zone).unwrap();
    assert!(json.contains("\"silent\""));
    let back: autozen_core::Zone = serde_json::from_str(&json).unwrap();
    assert_eq!(back, zone);
}
