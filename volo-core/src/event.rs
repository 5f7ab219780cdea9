//! Volunteer event records.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A volunteer event as stored in the schedule file.
///
/// `date` ("YYYY-MM-DD") and `time` ("HH:MM") are kept as plain strings.
/// The store orders events by comparing these strings lexically and never
/// validates them against a calendar, so "2024-13-40" is storable. The
/// field names here are the schedule-file format and must not change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub name: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub volunteers_needed: i64,
    pub description: String,
}

impl Event {
    /// Sort key for schedule order: (date, time), compared as strings.
    pub fn schedule_key(&self) -> (&str, &str) {
        (&self.date, &self.time)
    }
}

/// Raw form input for a new event, before validation.
///
/// Every field is a string because that is what the UI hands over;
/// trimming and number parsing happen in [`EventStore::add`].
///
/// [`EventStore::add`]: crate::store::EventStore::add
#[derive(Debug, Clone, Default)]
pub struct EventDraft {
    pub name: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub volunteers_needed: String,
    pub description: String,
}

/// Generate an id for a new event.
///
/// Ids are opaque handles; older schedule files carry timestamp-style ids
/// and those keep working, but freshly created events get a UUID so two
/// events added in the same second can't collide.
pub(crate) fn new_event_id() -> String {
    Uuid::new_v4().to_string()
}
