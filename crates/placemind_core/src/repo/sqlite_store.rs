//! SQLite-backed reminder store.
//!
//! # Responsibility
//! - Execute reminder CRUD against an open connection.
//! - Verify at construction time that the connection is migrated and carries
//!   the expected schema.
//!
//! # Invariants
//! - Saving twice under one id leaves exactly one row.
//! - Absence of a row is `Ok(None)` here; only the repository layer turns it
//!   into a not-found error.
//! - Read paths reject invalid persisted state instead of masking it.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::{Mutex, MutexGuard};

use rusqlite::{params, Connection, Row};
use uuid::Uuid;

use crate::db::{migrations, DbError};
use crate::model::reminder::{Reminder, ReminderId};

const REMINDER_SELECT_SQL: &str =
    "SELECT id, title, description, location, latitude, longitude FROM reminders";

const REMINDER_COLUMNS: [&str; 6] =
    ["id", "title", "description", "location", "latitude", "longitude"];

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Failures the SQLite store can report.
#[derive(Debug)]
pub enum StoreError {
    /// Connection-level database failure.
    Db(DbError),
    /// A persisted row could not be decoded into a reminder.
    InvalidData(String),
    /// The connection mutex was poisoned by a panicking holder.
    LockPoisoned,
    /// The connection was opened without running migrations.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    /// The schema is missing a table the store depends on.
    MissingRequiredTable(&'static str),
    /// The schema is missing a column the store depends on.
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Db(err) => write!(f, "database error: {err}"),
            StoreError::InvalidData(message) => write!(f, "invalid data: {message}"),
            StoreError::LockPoisoned => write!(f, "store connection lock poisoned"),
            StoreError::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection not initialized: schema version {actual_version}, expected {expected_version}"
            ),
            StoreError::MissingRequiredTable(table) => {
                write!(f, "schema is missing required table `{table}`")
            }
            StoreError::MissingRequiredColumn { table, column } => {
                write!(f, "schema is missing required column `{table}.{column}`")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            StoreError::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for StoreError {
    fn from(err: DbError) -> Self {
        StoreError::Db(err)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        StoreError::Db(DbError::Sqlite(err))
    }
}

/// Reminder CRUD over one SQLite connection.
///
/// The connection is guarded by a mutex so the store can be shared across
/// blocking worker tasks.
pub struct SqliteReminderStore {
    conn: Mutex<Connection>,
}

impl SqliteReminderStore {
    /// Wraps a connection after verifying it is migrated and carries the
    /// reminders schema.
    pub fn try_new(conn: Connection) -> StoreResult<Self> {
        ensure_schema_ready(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| StoreError::LockPoisoned)
    }

    /// Inserts the reminder, replacing any previous row under the same id.
    pub fn save_reminder(&self, reminder: &Reminder) -> StoreResult<()> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT OR REPLACE INTO reminders (id, title, description, location, latitude, longitude)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
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

    /// Returns every stored reminder. Order is unspecified.
    pub fn get_reminders(&self) -> StoreResult<Vec<Reminder>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(&format!("{REMINDER_SELECT_SQL};"))?;
        let mut rows = stmt.query([])?;
        let mut reminders = Vec::new();
        while let Some(row) = rows.next()? {
            reminders.push(parse_reminder_row(row)?);
        }
        Ok(reminders)
    }

    /// Returns the reminder stored under `id`, if any.
    pub fn get_reminder_by_id(&self, id: ReminderId) -> StoreResult<Option<Reminder>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(&format!("{REMINDER_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_reminder_row(row)?));
        }
        Ok(None)
    }

    /// Removes every stored reminder.
    pub fn delete_all_reminders(&self) -> StoreResult<()> {
        let conn = self.lock()?;
        conn.execute("DELETE FROM reminders;", [])?;
        Ok(())
    }
}

fn ensure_schema_ready(conn: &Connection) -> StoreResult<()> {
    let expected_version = migrations::latest_version();
    let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    if actual_version != expected_version {
        return Err(StoreError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }
    if !table_exists(conn, "reminders")? {
        return Err(StoreError::MissingRequiredTable("reminders"));
    }
    for column in REMINDER_COLUMNS {
        if !table_has_column(conn, "reminders", column)? {
            return Err(StoreError::MissingRequiredColumn {
                table: "reminders",
                column,
            });
        }
    }
    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> StoreResult<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type = 'table' AND name = ?1;")?;
    Ok(stmt.exists([table])?)
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> StoreResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let name: String = row.get("name")?;
        if name == column {
            return Ok(true);
        }
    }
    Ok(false)
}

fn parse_reminder_row(row: &Row<'_>) -> StoreResult<Reminder> {
    let id_text: String = row.get("id")?;
    let id = Uuid::parse_str(&id_text).map_err(|_| {
        StoreError::InvalidData(format!("invalid uuid value `{id_text}` in reminders.id"))
    })?;
    Reminder::with_id(
        id,
        row.get("title")?,
        row.get("description")?,
        row.get("location")?,
        row.get("latitude")?,
        row.get("longitude")?,
    )
    .map_err(|err| StoreError::InvalidData(format!("invalid persisted reminder `{id_text}`: {err}")))
}
