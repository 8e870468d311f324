use std::collections::HashSet;

use placemind_core::db::migrations::latest_version;
use placemind_core::db::open_db_in_memory;
use placemind_core::{Reminder, SqliteReminderStore, StoreError};
use rusqlite::Connection;

#[test]
fn save_and_get_by_id_roundtrip() {
    let store = store_on_fresh_db();
    let reminder = sydney_reminder();

    store.save_reminder(&reminder).unwrap();

    let loaded = store.get_reminder_by_id(reminder.id).unwrap().unwrap();
    assert_eq!(loaded, reminder);
}

#[test]
fn get_by_id_returns_none_for_absent_row() {
    let store = store_on_fresh_db();
    let unsaved = sydney_reminder();

    assert!(store.get_reminder_by_id(unsaved.id).unwrap().is_none());
}

#[test]
fn saving_same_id_twice_replaces_the_row() {
    let store = store_on_fresh_db();
    let mut reminder = sydney_reminder();

    store.save_reminder(&reminder).unwrap();
    reminder.title = Some("Sydney updated".to_string());
    reminder.description = None;
    store.save_reminder(&reminder).unwrap();

    let all = store.get_reminders().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].title.as_deref(), Some("Sydney updated"));
    assert_eq!(all[0].description, None);
}

#[test]
fn list_returns_every_saved_reminder_with_distinct_ids() {
    let store = store_on_fresh_db();
    let a = labeled_reminder("a");
    let b = labeled_reminder("b");
    let c = labeled_reminder("c");
    store.save_reminder(&a).unwrap();
    store.save_reminder(&b).unwrap();
    store.save_reminder(&c).unwrap();

    let all = store.get_reminders().unwrap();
    assert_eq!(all.len(), 3);

    let ids: HashSet<_> = all.iter().map(|reminder| reminder.id).collect();
    assert_eq!(ids, HashSet::from([a.id, b.id, c.id]));
}

#[test]
fn list_on_fresh_database_is_empty() {
    let store = store_on_fresh_db();
    assert!(store.get_reminders().unwrap().is_empty());
}

#[test]
fn delete_all_leaves_an_empty_table() {
    let store = store_on_fresh_db();
    for label in ["a", "b", "c", "d"] {
        store.save_reminder(&labeled_reminder(label)).unwrap();
    }
    assert_eq!(store.get_reminders().unwrap().len(), 4);

    store.delete_all_reminders().unwrap();

    assert!(store.get_reminders().unwrap().is_empty());
    store.delete_all_reminders().unwrap();
    assert!(store.get_reminders().unwrap().is_empty());
}

#[test]
fn store_persists_reminders_with_every_field_absent() {
    let store = store_on_fresh_db();
    let empty = Reminder::new(None, None, None, None, None);

    store.save_reminder(&empty).unwrap();

    let loaded = store.get_reminder_by_id(empty.id).unwrap().unwrap();
    assert_eq!(loaded, empty);
}

#[test]
fn store_rejects_uninitialized_connection() {
    let conn = Connection::open_in_memory().unwrap();

    let result = SqliteReminderStore::try_new(conn);
    match result {
        Err(StoreError::UninitializedConnection {
            expected_version,
            actual_version: 0,
        }) => assert!(expected_version > 0),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected uninitialized connection error"),
    }
}

#[test]
fn store_rejects_connection_without_reminders_table() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    let result = SqliteReminderStore::try_new(conn);
    assert!(matches!(
        result,
        Err(StoreError::MissingRequiredTable("reminders"))
    ));
}

#[test]
fn store_rejects_connection_missing_required_column() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE reminders (
            id TEXT PRIMARY KEY NOT NULL,
            title TEXT
        );",
    )
    .unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    let result = SqliteReminderStore::try_new(conn);
    assert!(matches!(
        result,
        Err(StoreError::MissingRequiredColumn {
            table: "reminders",
            column: "description"
        })
    ));
}

#[test]
fn read_paths_reject_rows_with_invalid_id_text() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO reminders (id, title) VALUES ('not-a-uuid', 'broken');",
        [],
    )
    .unwrap();
    let store = SqliteReminderStore::try_new(conn).unwrap();

    let err = store.get_reminders().unwrap_err();
    assert!(matches!(err, StoreError::InvalidData(_)));
}

fn store_on_fresh_db() -> SqliteReminderStore {
    let conn = open_db_in_memory().unwrap();
    SqliteReminderStore::try_new(conn).unwrap()
}

fn sydney_reminder() -> Reminder {
    Reminder::new(
        Some("Sydney".to_string()),
        Some("Sydney town hall".to_string()),
        Some("Hall".to_string()),
        Some(-33.87365),
        Some(151.20689),
    )
}

fn labeled_reminder(label: &str) -> Reminder {
    Reminder::new(
        Some(label.to_string()),
        Some(format!("description {label}")),
        Some(format!("location {label}")),
        Some(-33.87365),
        Some(151.20689),
    )
}
