//! Reminder domain model.
//!
//! # Responsibility
//! - Define the canonical reminder record persisted by the local store.
//! - Provide the input validation used by the save flow.
//!
//! # Invariants
//! - `id` is assigned once at construction and never reassigned.
//! - Every text field is optional; the store enforces no constraints on
//!   them (validation belongs to the save flow, not persistence).
//! - `latitude`/`longitude` are independent optionals; a geofence region
//!   can only be derived when both are present.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for one reminder.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
/// Rendered as text at the storage and platform boundaries (the geofence
/// request id is this value's string form).
pub type ReminderId = Uuid;

/// Validation outcome for user-entered reminder data.
///
/// The save flow checks title first, then the location label, so callers
/// surface one actionable message at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReminderValidationError {
    /// Reminder id is the nil UUID (only reachable via `with_id`).
    NilId,
    /// Title is absent or blank.
    MissingTitle,
    /// Location label is absent or blank.
    MissingLocation,
}

impl Display for ReminderValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "reminder id must not be the nil uuid"),
            Self::MissingTitle => write!(f, "Please enter title"),
            Self::MissingLocation => write!(f, "Please select location"),
        }
    }
}

impl Error for ReminderValidationError {}

/// One location-bound reminder.
///
/// All content fields stay optional on purpose: drafts arrive from the UI
/// with any subset filled in, and the store persists whatever it is given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reminder {
    /// Stable global ID, also used as the platform geofence request id.
    pub id: ReminderId,
    /// Short user-facing reminder title.
    pub title: Option<String>,
    /// Longer free-form body shown in the notification.
    pub description: Option<String>,
    /// Human-readable label of the picked place.
    pub location: Option<String>,
    /// Geographic latitude in degrees.
    pub latitude: Option<f64>,
    /// Geographic longitude in degrees.
    pub longitude: Option<f64>,
}

impl Reminder {
    /// Creates a reminder with a freshly generated id.
    ///
    /// # Invariants
    /// - The id is random (UUID v4) and unique for practical purposes;
    ///   the store performs no uniqueness check beyond primary-key
    ///   replacement.
    pub fn new(
        title: Option<String>,
        description: Option<String>,
        location: Option<String>,
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            description,
            location,
            latitude,
            longitude,
        }
    }

    /// Creates a reminder with a caller-provided stable id.
    ///
    /// Used by import paths and tests where identity already exists.
    ///
    /// # Errors
    /// - `ReminderValidationError::NilId` when `id` is the nil UUID.
    pub fn with_id(
        id: ReminderId,
        title: Option<String>,
        description: Option<String>,
        location: Option<String>,
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> Result<Self, ReminderValidationError> {
        if id.is_nil() {
            return Err(ReminderValidationError::NilId);
        }
        Ok(Self {
            id,
            title,
            description,
            location,
            latitude,
            longitude,
        })
    }

    /// Checks the fields a user must fill in before the reminder can be
    /// scheduled: title first, then the location label.
    ///
    /// Coordinates are deliberately not checked here; persistence accepts
    /// coordinate-less reminders and only the geofence-region derivation
    /// cares about them.
    pub fn validate(&self) -> Result<(), ReminderValidationError> {
        if is_blank(self.title.as_deref()) {
            return Err(ReminderValidationError::MissingTitle);
        }
        if is_blank(self.location.as_deref()) {
            return Err(ReminderValidationError::MissingLocation);
        }
        Ok(())
    }

    /// Returns `(latitude, longitude)` when both coordinates are present.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => None,
        }
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |text| text.trim().is_empty())
}
