//! Platform geofence event model.
//!
//! # Responsibility
//! - Mirror the transition report delivered by the platform geofencing
//!   client: which boundary transition fired and for which request ids, or
//!   which platform error code replaced them.
//!
//! # Invariants
//! - An event carrying an error code carries no usable transition or ids;
//!   consumers check [`GeofenceEvent::has_error`] before anything else.

use serde::{Deserialize, Serialize};

use crate::model::reminder::ReminderId;

/// Boundary transition kind reported by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GeofenceTransition {
    Enter,
    Exit,
    Dwell,
}

impl GeofenceTransition {
    /// Lowercase label used in log lines.
    pub fn as_str(self) -> &'static str {
        match self {
            GeofenceTransition::Enter => "enter",
            GeofenceTransition::Exit => "exit",
            GeofenceTransition::Dwell => "dwell",
        }
    }
}

/// One transition report from the platform geofencing client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeofenceEvent {
    /// Transition that fired; absent on error reports.
    pub transition: Option<GeofenceTransition>,
    /// Reminder ids of the geofences that triggered.
    pub triggered_ids: Vec<ReminderId>,
    /// Platform error code, when the report is an error instead of a
    /// transition.
    pub error_code: Option<i32>,
}

impl GeofenceEvent {
    /// Builds an enter report for the given reminder ids.
    pub fn enter(triggered_ids: Vec<ReminderId>) -> Self {
        Self::transition_report(GeofenceTransition::Enter, triggered_ids)
    }

    /// Builds an exit report for the given reminder ids.
    pub fn exit(triggered_ids: Vec<ReminderId>) -> Self {
        Self::transition_report(GeofenceTransition::Exit, triggered_ids)
    }

    /// Builds a dwell report for the given reminder ids.
    pub fn dwell(triggered_ids: Vec<ReminderId>) -> Self {
        Self::transition_report(GeofenceTransition::Dwell, triggered_ids)
    }

    /// Builds an error report carrying the platform error code.
    pub fn platform_error(error_code: i32) -> Self {
        Self {
            transition: None,
            triggered_ids: Vec::new(),
            error_code: Some(error_code),
        }
    }

    /// True when the platform reported an error instead of a transition.
    pub fn has_error(&self) -> bool {
        self.error_code.is_some()
    }

    fn transition_report(transition: GeofenceTransition, triggered_ids: Vec<ReminderId>) -> Self {
        Self {
            transition: Some(transition),
            triggered_ids,
            error_code: None,
        }
    }
}
