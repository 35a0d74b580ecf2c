use std::collections::HashSet;
use std::fmt;
use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use shared::prelude::*;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "rooms",
    about = "Inspect room list snapshots the lobby browser displays"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print every room the way the room list renders it
    List {
        file: PathBuf,
        /// Print the decoded rooms as pretty JSON instead
        #[arg(long)]
        json: bool,
    },
    /// Report rooms the lobby should not be advertising
    Check { file: PathBuf },
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Problem {
    EmptyName { index: usize },
    DuplicateName { name: String },
    Overfull { name: String, current: u32, max: u32 },
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Problem::EmptyName { index } => write!(f, "room #{index} has an empty name"),
            Problem::DuplicateName { name } => write!(f, "room '{name}' is listed more than once"),
            Problem::Overfull { name, current, max } => {
                write!(f, "room '{name}' has {current} players but only {max} slots")
            }
        }
    }
}

fn check_rooms(rooms: &[RoomInfo]) -> Vec<Problem> {
    let mut problems = Vec::new();
    let mut seen = HashSet::new();
    for (index, room) in rooms.iter().enumerate() {
        if room.name.is_empty() {
            problems.push(Problem::EmptyName { index });
        } else if !seen.insert(room.name.as_str()) {
            problems.push(Problem::DuplicateName {
                name: room.name.clone(),
            });
        }
        if room.current_slots > room.max_slots {
            problems.push(Problem::Overfull {
                name: room.name.clone(),
                current: room.current_slots,
                max: room.max_slots,
            });
        }
    }
    problems
}

fn render_row(room: &RoomInfo, name_width: usize) -> String {
    format!("{:<name_width$}  {}", room.name, room.slot_text())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::List { file, json } => {
            let rooms = load_room_list(&file)?;
            info!("📋 Listing {} rooms", rooms.len());
            if json {
                println!("{}", serde_json::to_string_pretty(&rooms)?);
            } else {
                let name_width = rooms.iter().map(|room| room.name.len()).max().unwrap_or(0);
                for room in &rooms {
                    println!("{}", render_row(room, name_width));
                }
            }
        }
        Commands::Check { file } => {
            let rooms = load_room_list(&file)?;
            let problems = check_rooms(&rooms);
            for problem in &problems {
                warn!("❌ {}", problem);
            }
            if !problems.is_empty() {
                bail!("{} problem(s) in {}", problems.len(), file.display());
            }
            info!("✅ {} rooms look fine", rooms.len());
        }
    }

    Ok(())
}
