//! Geofence region derivation.
//!
//! # Responsibility
//! - Turn a saved reminder into the circular region handed to the platform
//!   geofencing client.
//!
//! # Invariants
//! - The request id is the reminder id in string form; the trigger path
//!   parses it back to find the reminder.
//! - Derivation requires both coordinates; a reminder without a full pair
//!   registers nothing.
//!
//! Consumers register regions for enter transitions only and without an
//! expiration.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::reminder::{Reminder, ReminderId};

/// Radius of every reminder geofence, in meters.
pub const GEOFENCE_RADIUS_METERS: f32 = 100.0;

/// Circular region registered with the platform geofencing client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeofenceRegion {
    /// Platform request id; the owning reminder id in string form.
    pub request_id: String,
    /// Center latitude in degrees.
    pub latitude: f64,
    /// Center longitude in degrees.
    pub longitude: f64,
    /// Radius in meters.
    pub radius_meters: f32,
}

impl GeofenceRegion {
    /// Derives the region to register for `reminder`, or `None` when the
    /// reminder lacks a full coordinate pair.
    pub fn for_reminder(reminder: &Reminder) -> Option<Self> {
        let (latitude, longitude) = reminder.coordinates()?;
        Some(Self {
            request_id: reminder.id.to_string(),
            latitude,
            longitude,
            radius_meters: GEOFENCE_RADIUS_METERS,
        })
    }

    /// Parses the request id back into the reminder id it was derived from.
    pub fn reminder_id(&self) -> Option<ReminderId> {
        Uuid::parse_str(&self.request_id).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::{GeofenceRegion, GEOFENCE_RADIUS_METERS};
    use crate::model::reminder::Reminder;

    #[test]
    fn derives_region_only_for_full_coordinate_pair() {
        let complete = Reminder::new(
            Some("Sydney".to_string()),
            None,
            Some("Hall".to_string()),
            Some(-33.87365),
            Some(151.20689),
        );
        let region = GeofenceRegion::for_reminder(&complete).expect("region for full pair");
        assert_eq!(region.request_id, complete.id.to_string());
        assert_eq!(region.radius_meters, GEOFENCE_RADIUS_METERS);
        assert_eq!(region.reminder_id(), Some(complete.id));

        let missing_longitude = Reminder::new(
            Some("Sydney".to_string()),
            None,
            Some("Hall".to_string()),
            Some(-33.87365),
            None,
        );
        assert!(GeofenceRegion::for_reminder(&missing_longitude).is_none());
    }
}
