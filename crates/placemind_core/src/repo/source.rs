//! Data-source contract for reminder persistence.
//!
//! # Responsibility
//! - Define the capability set every reminder backend implements.
//! - Define the typed result channel callers branch on.
//!
//! # Invariants
//! - Absence of a requested id is reported as [`SourceError::NotFound`],
//!   never as a panic or an empty success.
//! - Every operation returns `SourceResult`; a faulted backend surfaces the
//!   failure on all four operations alike.

use std::error::Error;
use std::fmt::{Display, Formatter};

use async_trait::async_trait;

use crate::model::reminder::{Reminder, ReminderId};
use crate::repo::sqlite_store::StoreError;

/// Result alias for data-source operations.
pub type SourceResult<T> = Result<T, SourceError>;

/// Failures a reminder data source can report.
#[derive(Debug)]
pub enum SourceError {
    /// No reminder exists under the requested id.
    NotFound,
    /// The underlying store rejected or failed the operation.
    Store(StoreError),
    /// Backend-level failure outside the store itself, such as an aborted
    /// worker task or an injected fault.
    Backend(String),
}

impl Display for SourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceError::NotFound => write!(f, "Reminder not found!"),
            SourceError::Store(err) => write!(f, "{err}"),
            SourceError::Backend(message) => write!(f, "{message}"),
        }
    }
}

impl Error for SourceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SourceError::Store(err) => Some(err),
            SourceError::NotFound | SourceError::Backend(_) => None,
        }
    }
}

impl From<StoreError> for SourceError {
    fn from(err: StoreError) -> Self {
        SourceError::Store(err)
    }
}

/// Asynchronous persistence contract for reminders.
///
/// Implementations are shared across tasks behind `Arc<dyn ReminderDataSource>`.
#[async_trait]
pub trait ReminderDataSource: Send + Sync {
    /// Inserts the reminder, replacing any previous row under the same id.
    async fn save_reminder(&self, reminder: &Reminder) -> SourceResult<()>;

    /// Returns every stored reminder. Order is unspecified.
    async fn get_reminders(&self) -> SourceResult<Vec<Reminder>>;

    /// Returns the reminder stored under `id`, or [`SourceError::NotFound`].
    async fn get_reminder(&self, id: ReminderId) -> SourceResult<Reminder>;

    /// Removes every stored reminder.
    async fn delete_all_reminders(&self) -> SourceResult<()>;
}

// Lets one shared source feed the service and the geofence dispatcher at
// the same time.
#[async_trait]
impl<T> ReminderDataSource for std::sync::Arc<T>
where
    T: ReminderDataSource + ?Sized,
{
    async fn save_reminder(&self, reminder: &Reminder) -> SourceResult<()> {
        (**self).save_reminder(reminder).await
    }

    async fn get_reminders(&self) -> SourceResult<Vec<Reminder>> {
        (**self).get_reminders().await
    }

    async fn get_reminder(&self, id: ReminderId) -> SourceResult<Reminder> {
        (**self).get_reminder(id).await
    }

    async fn delete_all_reminders(&self) -> SourceResult<()> {
        (**self).delete_all_reminders().await
    }
}
