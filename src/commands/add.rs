use anyhow::Result;
use dialoguer::Input;
use owo_colors::OwoColorize;
use volo_core::{EventDraft, EventStore};

pub fn run(
    store: &mut EventStore,
    name: Option<String>,
    date: Option<String>,
    time: Option<String>,
    location: Option<String>,
    volunteers: Option<String>,
    description: Option<String>,
) -> Result<()> {
    let interactive = name.is_none()
        || date.is_none()
        || time.is_none()
        || location.is_none()
        || volunteers.is_none();

    // --- Name ---
    let name = match name {
        Some(n) => n,
        None => Input::<String>::new()
            .with_prompt("  Event name")
            .interact_text()?,
    };

    // --- Date ---
    let date = match date {
        Some(d) => d,
        None => Input::<String>::new()
            .with_prompt("  Date (YYYY-MM-DD)")
            .interact_text()?,
    };

    // --- Time ---
    let time = match time {
        Some(t) => t,
        None => Input::<String>::new()
            .with_prompt("  Time (HH:MM)")
            .interact_text()?,
    };

    // --- Location ---
    let location = match location {
        Some(l) => l,
        None => Input::<String>::new()
            .with_prompt("  Location")
            .interact_text()?,
    };

    // --- Volunteers ---
    let volunteers = match volunteers {
        Some(v) => v,
        None => prompt_volunteer_count()?,
    };

    // --- Description ---
    let description = match description {
        Some(d) => d,
        None if interactive => Input::<String>::new()
            .with_prompt("  Description (skip)")
            .default(String::new())
            .show_default(false)
            .interact_text()?,
        None => String::new(),
    };

    let draft = EventDraft {
        name,
        date,
        time,
        location,
        volunteers_needed: volunteers,
        description,
    };

    let event = store.add(&draft)?;

    if interactive {
        println!();
    }
    println!(
        "{}",
        format!("  Added: {} on {} at {}", event.name, event.date, event.time).green()
    );

    Ok(())
}

/// Prompt for the volunteer count, retrying until it parses as a number.
fn prompt_volunteer_count() -> Result<String> {
    loop {
        let input: String = Input::new()
            .with_prompt("  Volunteers needed")
            .interact_text()?;

        if input.trim().parse::<i64>().is_ok() {
            return Ok(input);
        }
        eprintln!(
            "  {}",
            format!("Volunteers needed must be a number (got '{}')", input.trim()).red()
        );
    }
}
