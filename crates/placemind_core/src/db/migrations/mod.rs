//! Schema migration registry and runner.
//!
//! # Responsibility
//! - Hold every schema migration this build ships, in increasing order.
//! - Bring an opened connection up to the latest version in one
//!   transaction.
//!
//! # Invariants
//! - `PRAGMA user_version` always matches the last applied migration.
//! - Registry versions are strictly increasing.

use rusqlite::Connection;

use crate::db::{DbError, DbResult};

struct Migration {
    version: u32,
    ddl: &'static str,
}

const MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    ddl: include_str!("0001_init.sql"),
}];

/// Latest schema version shipped with this build.
pub fn latest_version() -> u32 {
    MIGRATIONS.last().map_or(0, |migration| migration.version)
}

/// Brings `conn` up to [`latest_version`], applying pending migrations
/// inside a single transaction.
///
/// # Errors
/// - [`DbError::SchemaAhead`] when the database was stamped by a newer
///   build than this one.
pub fn apply_migrations(conn: &mut Connection) -> DbResult<()> {
    let stamped = stamped_version(conn)?;
    let latest = latest_version();
    if stamped > latest {
        return Err(DbError::SchemaAhead {
            found: stamped,
            supported: latest,
        });
    }
    if stamped == latest {
        return Ok(());
    }

    let tx = conn.transaction()?;
    for migration in MIGRATIONS.iter().filter(|m| m.version > stamped) {
        tx.execute_batch(migration.ddl)?;
        tx.pragma_update(None, "user_version", migration.version)?;
    }
    tx.commit()?;
    Ok(())
}

fn stamped_version(conn: &Connection) -> DbResult<u32> {
    Ok(conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?)
}
