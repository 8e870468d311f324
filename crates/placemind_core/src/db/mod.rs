//! SQLite bootstrap and schema migration entry points.
//!
//! # Responsibility
//! - Open and configure the SQLite connections backing the reminders store.
//! - Run pending schema migrations before any reminder data is touched.
//!
//! # Invariants
//! - The applied schema version lives in `PRAGMA user_version`.
//! - A database stamped by a newer build is rejected, never downgraded.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

/// Bootstrap-level database failure.
#[derive(Debug)]
pub enum DbError {
    /// Transport or engine error reported by SQLite.
    Sqlite(rusqlite::Error),
    /// The database was stamped by a newer build of this crate.
    SchemaAhead { found: u32, supported: u32 },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DbError::Sqlite(err) => write!(f, "{err}"),
            DbError::SchemaAhead { found, supported } => write!(
                f,
                "database schema version {found} is newer than this build supports (max {supported})"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            DbError::Sqlite(err) => Some(err),
            DbError::SchemaAhead { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(err: rusqlite::Error) -> Self {
        DbError::Sqlite(err)
    }
}
