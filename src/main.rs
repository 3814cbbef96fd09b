use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;

use formation_builder::board::Board;
use formation_builder::formation::FormationTemplate;
use formation_builder::pitch::Pitch;
use formation_builder::roster::Roster;

#[derive(Parser)]
#[command(name = "formation-builder")]
#[command(about = "Arrange players into formation slots and render the pitch", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available formations
    Formations,

    /// Print slot coordinates for a formation
    Layout {
        /// Formation key (e.g. GK-3-2-1)
        #[arg(short, long, default_value = "GK-3-2-1")]
        formation: FormationTemplate,

        /// Use the narrow-screen margins
        #[arg(long)]
        compact: bool,
    },

    /// Render a formation to SVG
    Render {
        /// Formation key (e.g. GK-3-2-1)
        #[arg(short, long, default_value = "GK-3-2-1")]
        formation: FormationTemplate,

        /// Place a player: SLOT=NAME (repeatable)
        #[arg(short, long = "assign", value_name = "SLOT=NAME")]
        assignments: Vec<String>,

        /// Extra roster names on top of the default squad
        #[arg(short, long = "player", value_name = "NAME")]
        players: Vec<String>,

        /// Start from an empty roster instead of the default squad
        #[arg(long)]
        no_defaults: bool,

        /// Use the narrow-screen margins
        #[arg(long)]
        compact: bool,

        /// Pitch width in pixels
        #[arg(long, default_value_t = 400.0)]
        width: f64,

        /// Pitch height in pixels
        #[arg(long, default_value_t = 600.0)]
        height: f64,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Formations => {
            for t in FormationTemplate::ALL {
                println!("{}\t{:?}\t{} slots", t.key(), t.rows(), t.total_slots());
            }
        }
        Commands::Layout { formation, compact } => {
            let layout = Pitch::default().layout(formation, compact);
            for slot in &layout.slots {
                println!("{}\trow {}\t{:.2}\t{:.2}", slot.index, slot.row, slot.x, slot.y);
            }
        }
        Commands::Render {
            formation,
            assignments,
            players,
            no_defaults,
            compact,
            width,
            height,
            output,
        } => {
            let mut roster = if no_defaults {
                Roster::new()
            } else {
                Roster::with_defaults()
            };
            for name in &players {
                if let Err(e) = roster.add(name) {
                    log::warn!("{}", e);
                }
            }

            let board = build_board(formation, roster, &assignments)?;
            let svg = Pitch::default().render(&board, compact, width, height);

            match output {
                Some(path) => fs::write(&path, &svg)
                    .with_context(|| format!("Failed to write {}", path.display()))?,
                None => print!("{}", svg),
            }

            eprintln!("Bench: {}", board.bench().join(", "));
        }
    }

    Ok(())
}

/// Place every `SLOT=NAME` on a fresh board, failing on the first bad one.
fn build_board(
    formation: FormationTemplate,
    roster: Roster,
    assignments: &[String],
) -> Result<Board> {
    let mut board = Board::with_roster(formation, roster);
    for spec in assignments {
        let (slot, name) = parse_assignment(spec)?;
        if !board.roster().contains(name) {
            bail!("{} is not on the roster", name);
        }
        if slot >= formation.total_slots() {
            bail!("slot {} out of range for {}", slot, formation);
        }
        board.assign(slot, name);
    }
    Ok(board)
}

fn parse_assignment(spec: &str) -> Result<(usize, &str)> {
    let (slot, name) = spec
        .split_once('=')
        .with_context(|| format!("Expected SLOT=NAME, got {:?}", spec))?;
    let slot = slot
        .trim()
        .parse()
        .with_context(|| format!("Invalid slot index in {:?}", spec))?;
    Ok((slot, name.trim()))
}
