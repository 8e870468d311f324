//! Local reminder repository.
//!
//! # Responsibility
//! - Expose the SQLite store through the async [`ReminderDataSource`]
//!   contract.
//! - Run every store call on a blocking worker so callers never stall an
//!   async executor on SQLite I/O.
//!
//! # Invariants
//! - A missing id surfaces as [`SourceError::NotFound`]; the store's
//!   `Ok(None)` never leaks past this layer.
//! - An aborted worker task surfaces as [`SourceError::Backend`], not a
//!   panic in the caller.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::task;

use crate::db::{open_db, open_db_in_memory};
use crate::model::reminder::{Reminder, ReminderId};
use crate::repo::source::{ReminderDataSource, SourceError, SourceResult};
use crate::repo::sqlite_store::{SqliteReminderStore, StoreError, StoreResult};

/// SQLite-backed implementation of [`ReminderDataSource`].
pub struct LocalReminderRepository {
    store: Arc<SqliteReminderStore>,
}

impl LocalReminderRepository {
    /// Wraps an already constructed store.
    pub fn new(store: Arc<SqliteReminderStore>) -> Self {
        Self { store }
    }

    /// Opens (and migrates) the database at `path` and builds a repository
    /// over it.
    pub fn open(path: impl AsRef<Path>) -> SourceResult<Self> {
        let conn = open_db(path).map_err(StoreError::from)?;
        let store = SqliteReminderStore::try_new(conn)?;
        Ok(Self::new(Arc::new(store)))
    }

    /// Opens a private in-memory database and builds a repository over it.
    pub fn open_in_memory() -> SourceResult<Self> {
        let conn = open_db_in_memory().map_err(StoreError::from)?;
        let store = SqliteReminderStore::try_new(conn)?;
        Ok(Self::new(Arc::new(store)))
    }

    async fn run_blocking<T, F>(&self, op: F) -> SourceResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&SqliteReminderStore) -> StoreResult<T> + Send + 'static,
    {
        let store = Arc::clone(&self.store);
        task::spawn_blocking(move || op(&store))
            .await
            .map_err(|err| SourceError::Backend(format!("storage task aborted: {err}")))?
            .map_err(SourceError::from)
    }
}

#[async_trait]
impl ReminderDataSource for LocalReminderRepository {
    async fn save_reminder(&self, reminder: &Reminder) -> SourceResult<()> {
        let reminder = reminder.clone();
        self.run_blocking(move |store| store.save_reminder(&reminder))
            .await
    }

    async fn get_reminders(&self) -> SourceResult<Vec<Reminder>> {
        self.run_blocking(|store| store.get_reminders()).await
    }

    async fn get_reminder(&self, id: ReminderId) -> SourceResult<Reminder> {
        self.run_blocking(move |store| store.get_reminder_by_id(id))
            .await?
            .ok_or(SourceError::NotFound)
    }

    async fn delete_all_reminders(&self) -> SourceResult<()> {
        self.run_blocking(|store| store.delete_all_reminders())
            .await
    }
}
