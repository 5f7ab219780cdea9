mod commands;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use volo_core::config::VoloConfig;
use volo_core::EventStore;

#[derive(Parser)]
#[command(name = "volo")]
#[command(about = "Record and list volunteer events in a local schedule file")]
struct Cli {
    /// Use this schedule file instead of the configured one
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new event to the schedule
    Add {
        /// Event name
        name: Option<String>,

        /// Event date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,

        /// Event time (HH:MM)
        #[arg(short, long)]
        time: Option<String>,

        /// Where the event takes place
        #[arg(short, long)]
        location: Option<String>,

        /// How many volunteers are needed
        #[arg(short, long)]
        volunteers: Option<String>,

        /// Free-form description
        #[arg(long)]
        description: Option<String>,
    },
    /// List events in schedule order
    List {
        /// Only show events dated today or later
        #[arg(short, long)]
        upcoming: bool,
    },
    /// Delete events from the schedule
    Delete {
        /// Delete every event with this exact name
        name: Option<String>,

        /// Delete the single event with this id instead
        #[arg(long, conflicts_with = "name")]
        id: Option<String>,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut store = open_store(cli.file)?;

    match cli.command {
        Commands::Add {
            name,
            date,
            time,
            location,
            volunteers,
            description,
        } => commands::add::run(&mut store, name, date, time, location, volunteers, description),
        Commands::List { upcoming } => commands::list::run(&store, upcoming),
        Commands::Delete { name, id, yes } => commands::delete::run(&mut store, name, id, yes),
    }
}

fn open_store(file: Option<PathBuf>) -> Result<EventStore> {
    let path = match file {
        Some(path) => path,
        None => VoloConfig::load()?.schedule_path()?,
    };

    Ok(EventStore::open(path)?)
}
