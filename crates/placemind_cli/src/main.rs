//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `placemind_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use placemind_core::db::open_db_in_memory;
use placemind_core::{default_log_level, init_logging, SqliteReminderStore};

fn main() {
    let log_dir = std::env::temp_dir().join("placemind-logs");
    if let Err(err) = init_logging(default_log_level(), &log_dir) {
        eprintln!("logging init failed, continuing without file logs: {err}");
    }

    println!("placemind_core version={}", placemind_core::core_version());

    if let Err(err) = storage_smoke_check() {
        eprintln!("storage smoke check failed: {err}");
        std::process::exit(1);
    }
}

/// Opens a throwaway in-memory database and runs one query through the
/// store, proving migrations and schema checks hold together.
fn storage_smoke_check() -> Result<(), Box<dyn std::error::Error>> {
    let conn = open_db_in_memory()?;
    let store = SqliteReminderStore::try_new(conn)?;
    let reminders = store.get_reminders()?;
    println!("placemind_core reminders={}", reminders.len());
    Ok(())
}
