//! Use-case services over the persistence layer.

pub mod reminder_service;
