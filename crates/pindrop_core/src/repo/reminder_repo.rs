//! Reminder data-source contract and SQLite implementation.
//!
//! # Responsibility
//! - Define the storage-agnostic capability boundary for reminder
//!   persistence (get-all, get-by-id, upsert, bulk clear).
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - No operation panics across the boundary; every failure surfaces as a
//!   `SourceError`.
//! - `get_reminder` on an absent id is an error, never an empty success.
//! - `save_reminder` upserts by id; row identity and creation time survive
//!   repeated saves.

use crate::db::DbError;
use crate::model::reminder::{Reminder, ReminderId};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

const REMINDER_SELECT_SQL: &str = "SELECT
    id,
    title,
    description,
    location,
    latitude,
    longitude
FROM reminders";

const REQUIRED_COLUMNS: &[&str] = &[
    "id",
    "title",
    "description",
    "location",
    "latitude",
    "longitude",
    "created_at",
];

pub type SourceResult<T> = Result<T, SourceError>;

/// Data-access failure surfaced across the reminder data-source boundary.
#[derive(Debug)]
pub enum SourceError {
    /// Lookup by id found no row.
    NotFound(ReminderId),
    /// Generic storage failure described by a caller-facing message.
    Storage(String),
    /// SQLite transport or bootstrap failure.
    Db(DbError),
    /// Persisted row violates the expected shape.
    InvalidData(String),
    /// Connection has not been migrated to the expected schema version.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    /// Schema guard: the reminders table is missing entirely.
    MissingRequiredTable(&'static str),
    /// Schema guard: a required column is missing from the table.
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for SourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            // User-facing lookup-miss message; the id travels in logs only.
            Self::NotFound(_) => write!(f, "Reminder not found"),
            Self::Storage(message) => write!(f, "{message}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted reminder data: {message}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}"
            ),
            Self::MissingRequiredTable(table) => write!(f, "missing required table `{table}`"),
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "missing required column `{column}` in table `{table}`")
            }
        }
    }
}

impl Error for SourceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for SourceError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for SourceError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Capability boundary for reminder persistence, independent of storage
/// technology. View-models depend on this trait, not on SQLite.
pub trait ReminderDataSource {
    /// Returns all reminders in stable insertion order.
    fn get_reminders(&self) -> SourceResult<Vec<Reminder>>;
    /// Returns one reminder by id, or `SourceError::NotFound`.
    fn get_reminder(&self, id: ReminderId) -> SourceResult<Reminder>;
    /// Inserts or replaces the reminder identified by `reminder.id`.
    fn save_reminder(&self, reminder: &Reminder) -> SourceResult<()>;
    /// Removes every reminder. Used by sign-out and test reset flows.
    fn delete_all_reminders(&self) -> SourceResult<()>;
}

/// SQLite-backed reminder repository.
pub struct SqliteReminderRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteReminderRepository<'conn> {
    /// Wraps a connection after verifying it carries the migrated schema.
    ///
    /// # Errors
    /// - `UninitializedConnection` when `PRAGMA user_version` does not match
    ///   the latest migration.
    /// - `MissingRequiredTable` / `MissingRequiredColumn` when the reminders
    ///   table shape is incomplete.
    pub fn try_new(conn: &'conn Connection) -> SourceResult<Self> {
        let expected_version = crate::db::migrations::latest_version();
        let actual_version: u32 =
            conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
        if actual_version != expected_version {
            return Err(SourceError::UninitializedConnection {
                expected_version,
                actual_version,
            });
        }

        let table_exists: i64 = conn.query_row(
            "SELECT EXISTS(
                SELECT 1 FROM sqlite_master
                WHERE type = 'table' AND name = 'reminders'
            );",
            [],
            |row| row.get(0),
        )?;
        if table_exists == 0 {
            return Err(SourceError::MissingRequiredTable("reminders"));
        }

        let mut stmt = conn.prepare("SELECT name FROM pragma_table_info('reminders');")?;
        let mut rows = stmt.query([])?;
        let mut present = Vec::new();
        while let Some(row) = rows.next()? {
            present.push(row.get::<_, String>(0)?);
        }
        for column in REQUIRED_COLUMNS {
            if !present.iter().any(|name| name == column) {
                return Err(SourceError::MissingRequiredColumn {
                    table: "reminders",
                    column,
                });
            }
        }

        Ok(Self { conn })
    }
}

impl ReminderDataSource for SqliteReminderRepository<'_> {
    fn get_reminders(&self) -> SourceResult<Vec<Reminder>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{REMINDER_SELECT_SQL} ORDER BY created_at ASC, id ASC;"))?;

        let mut rows = stmt.query([])?;
        let mut reminders = Vec::new();
        while let Some(row) = rows.next()? {
            reminders.push(parse_reminder_row(row)?);
        }

        Ok(reminders)
    }

    fn get_reminder(&self, id: ReminderId) -> SourceResult<Reminder> {
        let mut stmt = self
            .conn
            .prepare(&format!("{REMINDER_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query(params![id.to_string()])?;
        match rows.next()? {
            Some(row) => parse_reminder_row(row),
            None => Err(SourceError::NotFound(id)),
        }
    }

    fn save_reminder(&self, reminder: &Reminder) -> SourceResult<()> {
        self.conn.execute(
            "INSERT INTO reminders (
                id,
                title,
                description,
                location,
                latitude,
                longitude,
                created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, (strftime('%s', 'now') * 1000))
            ON CONFLICT(id) DO UPDATE SET
                title = excluded.title,
                description = excluded.description,
                location = excluded.location,
                latitude = excluded.latitude,
                longitude = excluded.longitude;",
            params![
                reminder.id.to_string(),
                reminder.title.as_deref(),
                reminder.description.as_deref(),
                reminder.location.as_deref(),
                reminder.latitude,
                reminder.longitude,
            ],
        )?;

        Ok(())
    }

    fn delete_all_reminders(&self) -> SourceResult<()> {
        self.conn.execute("DELETE FROM reminders;", [])?;
        Ok(())
    }
}

fn parse_reminder_row(row: &Row<'_>) -> SourceResult<Reminder> {
    let id_text: String = row.get("id")?;
    let id = Uuid::parse_str(&id_text).map_err(|_| {
        SourceError::InvalidData(format!("invalid uuid value `{id_text}` in reminders.id"))
    })?;

    Ok(Reminder {
        id,
        title: row.get("title")?,
        description: row.get("description")?,
        location: row.get("location")?,
        latitude: row.get("latitude")?,
        longitude: row.get("longitude")?,
    })
}
