use anyhow::Result;
use dialoguer::Confirm;
use owo_colors::OwoColorize;
use volo_core::EventStore;

use crate::render::pluralize;

pub fn run(
    store: &mut EventStore,
    name: Option<String>,
    id: Option<String>,
    yes: bool,
) -> Result<()> {
    match (name, id) {
        (_, Some(id)) => delete_by_id(store, &id, yes),
        (Some(name), None) => delete_by_name(store, &name, yes),
        (None, None) => {
            anyhow::bail!("Give an event name, or --id <ID> to delete a single event.")
        }
    }
}

fn delete_by_name(store: &mut EventStore, name: &str, yes: bool) -> Result<()> {
    let matching = store.list().iter().filter(|e| e.name == name).count();

    if matching == 0 {
        println!("{}", format!("No events named '{}'", name).dimmed());
        return Ok(());
    }

    // Duplicate names all go at once; make that explicit before asking.
    let prompt = if matching == 1 {
        format!("Delete '{}'?", name)
    } else {
        format!("Delete all {} events named '{}'?", matching, name)
    };

    if !confirmed(&prompt, yes)? {
        return Ok(());
    }

    let removed = store.delete(name)?;
    println!(
        "{}",
        format!("  Deleted {} {}", removed, pluralize("event", removed)).green()
    );

    Ok(())
}

fn delete_by_id(store: &mut EventStore, id: &str, yes: bool) -> Result<()> {
    let Some(event) = store.list().into_iter().find(|e| e.id == id) else {
        println!("{}", format!("No event with id '{}'", id).dimmed());
        return Ok(());
    };

    let prompt = format!("Delete '{}' on {}?", event.name, event.date);
    if !confirmed(&prompt, yes)? {
        return Ok(());
    }

    store.delete_by_id(id)?;
    println!("{}", "  Deleted 1 event".green());

    Ok(())
}

fn confirmed(prompt: &str, yes: bool) -> Result<bool> {
    if yes {
        return Ok(true);
    }

    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()?)
}
