//! Domain model for location-bound reminders.
//!
//! # Responsibility
//! - Define the canonical data structures used by core business logic.
//! - Keep one record shape shared by the store, the repository and the
//!   geofence dispatch path.
//!
//! # Invariants
//! - Every reminder is identified by a stable `ReminderId`.
//! - The model layer never talks to storage.

pub mod reminder;
