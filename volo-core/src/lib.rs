//! Core types for the volo event scheduler.
//!
//! This crate provides everything below the terminal UI:
//! - `Event` and `EventDraft` for volunteer event records
//! - `EventStore`, the file-backed event list (load, add, delete, list)
//! - `config` for locating the schedule file

pub mod config;
pub mod error;
pub mod event;
pub mod store;

pub use error::{VoloError, VoloResult};
pub use event::{Event, EventDraft};
pub use store::EventStore;
