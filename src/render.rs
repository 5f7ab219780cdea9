//! Terminal rendering for volo-core types.
//!
//! Extension trait that adds colored one-line rendering to events using
//! owo_colors.

use owo_colors::OwoColorize;
use volo_core::Event;

/// Extension trait for colored terminal rendering.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Event {
    fn render(&self) -> String {
        let details = format!(
            "@ {} ({} {} needed)",
            self.location,
            self.volunteers_needed,
            pluralize("volunteer", volunteer_count(self.volunteers_needed)),
        );

        format!("{:>5} {} {}", self.time, self.name, details.dimmed())
    }
}

/// Simple pluralization helper
pub fn pluralize(word: &str, count: usize) -> &str {
    if count == 1 {
        word
    } else {
        match word {
            "event" => "events",
            "volunteer" => "volunteers",
            _ => word,
        }
    }
}

/// Counts below one read as plural ("0 volunteers needed").
fn volunteer_count(needed: i64) -> usize {
    usize::try_from(needed).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pluralize_singular_and_plural() {
        assert_eq!(pluralize("event", 1), "event");
        assert_eq!(pluralize("event", 0), "events");
        assert_eq!(pluralize("event", 3), "events");
        assert_eq!(pluralize("volunteer", 1), "volunteer");
        assert_eq!(pluralize("volunteer", 10), "volunteers");
    }
}
