//! File-backed event storage.
//!
//! `EventStore` owns the in-memory event list and the schedule file it was
//! opened with. Every mutation rewrites the whole file; sorting happens
//! only at list time and is never persisted.

use std::path::{Path, PathBuf};

use crate::error::{VoloError, VoloResult};
use crate::event::{new_event_id, Event, EventDraft};

pub struct EventStore {
    path: PathBuf,
    events: Vec<Event>,
}

impl EventStore {
    /// Open the store at `path`, loading any existing schedule file.
    ///
    /// A missing file starts an empty store. A file that exists but does
    /// not parse as a schedule (bad JSON, records with missing fields)
    /// also starts an empty store: the original tool recovered from
    /// corruption by dropping the data, and files written by it must keep
    /// loading the same way.
    pub fn open(path: impl Into<PathBuf>) -> VoloResult<Self> {
        let path = path.into();
        let events = load_events(&path)?;
        Ok(EventStore { path, events })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Validate `draft` and append it to the schedule.
    ///
    /// Name, date, time, location and volunteer count must be non-empty
    /// after trimming, and the volunteer count must parse as an integer.
    /// A validation failure mutates nothing. On success the event (with
    /// its freshly generated id) is appended, the file is rewritten, and
    /// the created event is returned.
    pub fn add(&mut self, draft: &EventDraft) -> VoloResult<Event> {
        let name = required(&draft.name, "name")?;
        let date = required(&draft.date, "date")?;
        let time = required(&draft.time, "time")?;
        let location = required(&draft.location, "location")?;
        let volunteers = required(&draft.volunteers_needed, "volunteers needed")?;

        let volunteers_needed: i64 = volunteers
            .parse()
            .map_err(|_| VoloError::VolunteerCount(volunteers.to_string()))?;

        let event = Event {
            id: new_event_id(),
            name: name.to_string(),
            date: date.to_string(),
            time: time.to_string(),
            location: location.to_string(),
            volunteers_needed,
            description: draft.description.trim().to_string(),
        };

        self.events.push(event.clone());
        self.save()?;
        Ok(event)
    }

    /// Delete every event whose name matches `name` exactly.
    ///
    /// Returns how many events were removed; zero matches is a no-op, not
    /// an error. Confirming intent is the caller's job. Note that
    /// duplicate names all go at once — callers that need to take out a
    /// single event should use [`delete_by_id`](Self::delete_by_id).
    pub fn delete(&mut self, name: &str) -> VoloResult<usize> {
        let before = self.events.len();
        self.events.retain(|event| event.name != name);
        let removed = before - self.events.len();
        self.save()?;
        Ok(removed)
    }

    /// Delete the single event with the given id.
    ///
    /// Returns whether an event was removed.
    pub fn delete_by_id(&mut self, id: &str) -> VoloResult<bool> {
        let before = self.events.len();
        self.events.retain(|event| event.id != id);
        let removed = self.events.len() < before;
        self.save()?;
        Ok(removed)
    }

    /// All events in schedule order: ascending by (date, time), compared
    /// as plain strings. "2024-2-1" sorts after "2024-10-1"; schedule
    /// files have always used zero-padded dates, where string order and
    /// calendar order agree.
    pub fn list(&self) -> Vec<&Event> {
        let mut events: Vec<&Event> = self.events.iter().collect();
        events.sort_by(|a, b| a.schedule_key().cmp(&b.schedule_key()));
        events
    }

    /// Rewrite the schedule file with the current list, in insertion
    /// order, as pretty-printed JSON.
    ///
    /// Writes to a temp file and renames over the target so a crash
    /// mid-write cannot leave a half-written schedule behind.
    pub fn save(&self) -> VoloResult<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                std::fs::create_dir_all(dir)?;
            }
        }

        let json = serde_json::to_string_pretty(&self.events)
            .map_err(|e| VoloError::Serialization(e.to_string()))?;

        let temp = self.path.with_extension("json.tmp");
        std::fs::write(&temp, json)?;
        std::fs::rename(&temp, &self.path)?;
        Ok(())
    }
}

/// Trim a draft field, rejecting values that are empty afterwards.
fn required<'a>(value: &'a str, field: &'static str) -> VoloResult<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(VoloError::MissingField(field));
    }
    Ok(trimmed)
}

fn load_events(path: &Path) -> VoloResult<Vec<Event>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = std::fs::read_to_string(path)?;

    // Fail open: a schedule that doesn't parse becomes an empty one.
    Ok(serde_json::from_str(&content).unwrap_or_default())
}

// =============================================================================
// Tests
// =============================================================================
