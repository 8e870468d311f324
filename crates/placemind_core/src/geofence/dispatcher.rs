//! Geofence transition handling.
//!
//! # Responsibility
//! - Turn platform transition reports into reminder alerts: look up each
//!   triggered id in the data source and hand every found reminder to the
//!   notifier.
//!
//! # Invariants
//! - Reports carrying a platform error code are dropped after a warning.
//! - Only enter transitions produce alerts.
//! - Per-id lookups run as independent tasks; a failed or missing id never
//!   suppresses alerts for the other ids in the same report.

use std::sync::Arc;

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use tokio::task::JoinSet;

use crate::geofence::event::{GeofenceEvent, GeofenceTransition};
use crate::model::reminder::{Reminder, ReminderId};
use crate::repo::source::ReminderDataSource;

/// Notification payload for one triggered reminder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReminderAlert {
    pub id: ReminderId,
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl From<&Reminder> for ReminderAlert {
    fn from(reminder: &Reminder) -> Self {
        Self {
            id: reminder.id,
            title: reminder.title.clone(),
            description: reminder.description.clone(),
            location: reminder.location.clone(),
            latitude: reminder.latitude,
            longitude: reminder.longitude,
        }
    }
}

/// Outbound alert sink.
///
/// The platform notification adapter implements this; tests use recording
/// stand-ins.
pub trait ReminderNotifier: Send + Sync {
    fn notify(&self, alert: ReminderAlert);
}

/// Drives reminder lookups for geofence transition reports.
pub struct GeofenceDispatcher {
    source: Arc<dyn ReminderDataSource>,
    notifier: Arc<dyn ReminderNotifier>,
}

impl GeofenceDispatcher {
    pub fn new(source: Arc<dyn ReminderDataSource>, notifier: Arc<dyn ReminderNotifier>) -> Self {
        Self { source, notifier }
    }

    /// Handles one transition report and returns the number of alerts
    /// emitted.
    pub async fn handle_event(&self, event: &GeofenceEvent) -> usize {
        if let Some(code) = event.error_code {
            warn!("event=geofence_report module=geofence status=error error_code={code}");
            return 0;
        }
        if event.transition != Some(GeofenceTransition::Enter) {
            let transition = event.transition.map_or("none", GeofenceTransition::as_str);
            debug!("event=geofence_report module=geofence status=ignored transition={transition}");
            return 0;
        }

        let mut lookups = JoinSet::new();
        for id in event.triggered_ids.iter().copied() {
            let source = Arc::clone(&self.source);
            lookups.spawn(async move { (id, source.get_reminder(id).await) });
        }

        let mut emitted = 0;
        while let Some(joined) = lookups.join_next().await {
            match joined {
                Ok((_, Ok(reminder))) => {
                    self.notifier.notify(ReminderAlert::from(&reminder));
                    emitted += 1;
                }
                Ok((id, Err(err))) => {
                    warn!("event=geofence_lookup module=geofence status=error id={id} error={err}");
                }
                Err(err) => {
                    warn!("event=geofence_lookup module=geofence status=aborted error={err}");
                }
            }
        }
        debug!(
            "event=geofence_report module=geofence status=ok triggered={} alerts={emitted}",
            event.triggered_ids.len()
        );
        emitted
    }
}
