//! In-memory reminder source.
//!
//! # Responsibility
//! - Provide a [`ReminderDataSource`] with no persistence, used as a test
//!   double and as a lightweight embedded backend.
//! - Support fault injection so callers can exercise their error paths.
//!
//! # Invariants
//! - Honors the same contract as the SQLite repository: save is an upsert
//!   keyed by id, a missing id is `NotFound`.
//! - While a fault is armed, every operation fails with `Backend` carrying
//!   the armed message; state is left untouched.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::model::reminder::{Reminder, ReminderId};
use crate::repo::source::{ReminderDataSource, SourceError, SourceResult};

/// Map-backed implementation of [`ReminderDataSource`].
#[derive(Default)]
pub struct MemoryReminderSource {
    state: Mutex<MemoryState>,
}

#[derive(Default)]
struct MemoryState {
    reminders: BTreeMap<ReminderId, Reminder>,
    fault: Option<String>,
}

impl MemoryReminderSource {
    /// Creates an empty source with no fault armed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a source pre-populated with the given reminders.
    pub fn with_reminders(reminders: impl IntoIterator<Item = Reminder>) -> Self {
        let reminders = reminders
            .into_iter()
            .map(|reminder| (reminder.id, reminder))
            .collect();
        Self {
            state: Mutex::new(MemoryState {
                reminders,
                fault: None,
            }),
        }
    }

    /// Arms a fault: every subsequent operation fails with this message
    /// until [`clear_fault`](Self::clear_fault) is called.
    pub fn set_fault(&self, message: impl Into<String>) {
        if let Ok(mut state) = self.state.lock() {
            state.fault = Some(message.into());
        }
    }

    /// Disarms a previously armed fault.
    pub fn clear_fault(&self) {
        if let Ok(mut state) = self.state.lock() {
            state.fault = None;
        }
    }

    /// Number of reminders currently held.
    pub fn len(&self) -> usize {
        self.state.lock().map_or(0, |state| state.reminders.len())
    }

    /// True when no reminders are held.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn guard(&self) -> SourceResult<MutexGuard<'_, MemoryState>> {
        let state = self
            .state
            .lock()
            .map_err(|_| SourceError::Backend("memory source lock poisoned".to_string()))?;
        if let Some(message) = state.fault.clone() {
            return Err(SourceError::Backend(message));
        }
        Ok(state)
    }
}

#[async_trait]
impl ReminderDataSource for MemoryReminderSource {
    async fn save_reminder(&self, reminder: &Reminder) -> SourceResult<()> {
        let mut state = self.guard()?;
        state.reminders.insert(reminder.id, reminder.clone());
        Ok(())
    }

    async fn get_reminders(&self) -> SourceResult<Vec<Reminder>> {
        let state = self.guard()?;
        Ok(state.reminders.values().cloned().collect())
    }

    async fn get_reminder(&self, id: ReminderId) -> SourceResult<Reminder> {
        let state = self.guard()?;
        state.reminders.get(&id).cloned().ok_or(SourceError::NotFound)
    }

    async fn delete_all_reminders(&self) -> SourceResult<()> {
        let mut state = self.guard()?;
        state.reminders.clear();
        Ok(())
    }
}
