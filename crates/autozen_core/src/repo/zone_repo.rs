//! Zone repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the `zones` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Write paths validate zones before SQL mutations.
//! - `list_zones` returns insertion order (`ORDER BY id ASC`); the
//!   evaluator's first-match-wins tie-break depends on it.
//! - Read paths reject invalid persisted state instead of masking it.

use crate::db::DbError;
use crate::model::zone::{PhoneMode, Zone, ZoneDraft, ZoneId, ZoneValidationError};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const ZONE_SELECT_SQL: &str = "SELECT
    id,
    name,
    latitude,
    longitude,
    radius,
    mode
FROM zones";

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for zone persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(ZoneValidationError),
    Db(DbError),
    NotFound(ZoneId),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "zone not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted zone data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::NotFound(_) => None,
            Self::InvalidData(_) => None,
        }
    }
}

impl From<ZoneValidationError> for RepoError {
    fn from(value: ZoneValidationError) -> Self {
        Self::Validation(value)
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

/// Repository interface for zone CRUD operations.
pub trait ZoneRepository {
    /// Lists all zones in insertion order.
    fn list_zones(&self) -> RepoResult<Vec<Zone>>;
    /// Persists a draft and returns the store-assigned id.
    fn insert_zone(&self, draft: &ZoneDraft) -> RepoResult<ZoneId>;
    /// Fully replaces the stored record with the given id.
    fn update_zone(&self, zone: &Zone) -> RepoResult<()>;
    /// Deletes by id. Idempotent: absent ids are a no-op.
    fn delete_zone(&self, id: ZoneId) -> RepoResult<()>;
    /// Gets one zone by id.
    fn get_zone(&self, id: ZoneId) -> RepoResult<Option<Zone>>;
}

/// SQLite-backed zone repository.
pub struct SqliteZoneRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteZoneRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl ZoneRepository for SqliteZoneRepository<'_> {
    fn list_zones(&self) -> RepoResult<Vec<Zone>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{ZONE_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut zones = Vec::new();

        while let Some(row) = rows.next()? {
            zones.push(parse_zone_row(row)?);
        }

        Ok(zones)
    }

    fn insert_zone(&self, draft: &ZoneDraft) -> RepoResult<ZoneId> {
        draft.validate()?;

        self.conn.execute(
            "INSERT INTO zones (name, latitude, longitude, radius, mode)
             VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                draft.name.as_str(),
                draft.latitude,
                draft.longitude,
                draft.radius,
                mode_to_db(draft.mode),
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn update_zone(&self, zone: &Zone) -> RepoResult<()> {
        zone.validate()?;

        let changed = self.conn.execute(
            "UPDATE zones
             SET
                name = ?1,
                latitude = ?2,
                longitude = ?3,
                radius = ?4,
                mode = ?5
             WHERE id = ?6;",
            params![
                zone.name.as_str(),
                zone.latitude,
                zone.longitude,
                zone.radius,
                mode_to_db(zone.mode),
                zone.id,
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(zone.id));
        }

        Ok(())
    }

    fn delete_zone(&self, id: ZoneId) -> RepoResult<()> {
        self.conn
            .execute("DELETE FROM zones WHERE id = ?1;", [id])?;
        Ok(())
    }

    fn get_zone(&self, id: ZoneId) -> RepoResult<Option<Zone>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{ZONE_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_zone_row(row)?));
        }

        Ok(None)
    }
}

fn parse_zone_row(row: &Row<'_>) -> RepoResult<Zone> {
    let mode_text: String = row.get("mode")?;
    let mode = parse_mode(&mode_text).ok_or_else(|| {
        RepoError::InvalidData(format!("invalid mode `{mode_text}` in zones.mode"))
    })?;

    let zone = Zone {
        id: row.get("id")?,
        name: row.get("name")?,
        latitude: row.get("latitude")?,
        longitude: row.get("longitude")?,
        radius: row.get("radius")?,
        mode,
    };
    zone.validate()?;
    Ok(zone)
}

fn mode_to_db(mode: PhoneMode) -> &'static str {
    match mode {
        PhoneMode::Silent => "silent",
        PhoneMode::Vibrate => "vibrate",
        PhoneMode::Normal => "normal",
    }
}

fn parse_mode(value: &str) -> Option<PhoneMode> {
    match value {
        "silent" => Some(PhoneMode::Silent),
        "vibrate" => Some(PhoneMode::Vibrate),
        "normal" => Some(PhoneMode::Normal),
        _ => None,
    }
}
