//! Geofence trigger pipeline.
//!
//! `event` models the platform transition report, `region` derives what gets
//! registered for a saved reminder, and `dispatcher` turns enter reports
//! into notifications.

pub mod dispatcher;
pub mod event;
pub mod region;
