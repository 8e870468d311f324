//! Domain core for PlaceMind location reminders. Owns the reminder
//! model and its SQLite persistence, plus the geofence pipeline that
//! turns platform transition events into notification alerts.

pub mod db;
pub mod geofence;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use geofence::dispatcher::{GeofenceDispatcher, ReminderAlert, ReminderNotifier};
pub use geofence::event::{GeofenceEvent, GeofenceTransition};
pub use geofence::region::{GeofenceRegion, GEOFENCE_RADIUS_METERS};
pub use logging::{default_log_level, init_logging};
pub use model::reminder::{Reminder, ReminderId, ReminderValidationError};
pub use repo::local_repository::LocalReminderRepository;
pub use repo::memory_source::MemoryReminderSource;
pub use repo::source::{ReminderDataSource, SourceError, SourceResult};
pub use repo::sqlite_store::{SqliteReminderStore, StoreError, StoreResult};
pub use service::reminder_service::{ReminderService, ReminderServiceError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
