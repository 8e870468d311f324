//! Reminder use-case service.
//!
//! # Responsibility
//! - Provide the validate-then-save entry point for the save flow.
//! - Delegate persistence to the configured data source.
//!
//! # Invariants
//! - Nothing is persisted when validation fails.
//! - The geofence region is derived only after a successful save, and only
//!   when the reminder carries a full coordinate pair.

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::geofence::region::GeofenceRegion;
use crate::model::reminder::{Reminder, ReminderId, ReminderValidationError};
use crate::repo::source::{ReminderDataSource, SourceError, SourceResult};

/// Failures the reminder service can report.
#[derive(Debug)]
pub enum ReminderServiceError {
    /// User input did not pass validation; nothing was persisted.
    Validation(ReminderValidationError),
    /// The data source failed the operation.
    Source(SourceError),
}

impl Display for ReminderServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ReminderServiceError::Validation(err) => write!(f, "{err}"),
            ReminderServiceError::Source(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ReminderServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ReminderServiceError::Validation(err) => Some(err),
            ReminderServiceError::Source(err) => Some(err),
        }
    }
}

impl From<ReminderValidationError> for ReminderServiceError {
    fn from(err: ReminderValidationError) -> Self {
        ReminderServiceError::Validation(err)
    }
}

impl From<SourceError> for ReminderServiceError {
    fn from(err: SourceError) -> Self {
        ReminderServiceError::Source(err)
    }
}

/// Use-case service wrapper for the reminder flows.
pub struct ReminderService<S: ReminderDataSource> {
    source: S,
}

impl<S: ReminderDataSource> ReminderService<S> {
    /// Creates a service using the provided data source.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Checks user-entered reminder data without persisting anything.
    pub fn validate(&self, reminder: &Reminder) -> Result<(), ReminderValidationError> {
        reminder.validate()
    }

    /// Validates, persists, and derives the geofence region to arm.
    ///
    /// # Contract
    /// - Title is checked before the location label; the first failure is
    ///   returned and nothing is persisted.
    /// - On success, returns `Some(region)` when the reminder carries both
    ///   coordinates and `None` otherwise.
    pub async fn save_validated(
        &self,
        reminder: &Reminder,
    ) -> Result<Option<GeofenceRegion>, ReminderServiceError> {
        reminder.validate()?;
        self.source.save_reminder(reminder).await?;
        Ok(GeofenceRegion::for_reminder(reminder))
    }

    /// Lists every stored reminder.
    pub async fn list_reminders(&self) -> SourceResult<Vec<Reminder>> {
        self.source.get_reminders().await
    }

    /// Returns one reminder by id, or [`SourceError::NotFound`].
    pub async fn get_reminder(&self, id: ReminderId) -> SourceResult<Reminder> {
        self.source.get_reminder(id).await
    }

    /// Removes every stored reminder.
    pub async fn clear_all(&self) -> SourceResult<()> {
        self.source.delete_all_reminders().await
    }
}
