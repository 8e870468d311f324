//! Persistence layer for reminders.
//!
//! `source` defines the async contract, `sqlite_store` executes CRUD against
//! SQLite, `local_repository` bridges the two over blocking workers, and
//! `memory_source` is the map-backed stand-in.

pub mod local_repository;
pub mod memory_source;
pub mod source;
pub mod sqlite_store;
