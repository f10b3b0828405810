//! Lineup CLI
//!
//! Builds and edits volleyball lineups stored per roster in a directory.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use lineup_cli::{load_players, render_bench, render_formation, render_stats, resolve_config};
use lineup_core::{FileStore, Lineup, LineupStore, PlayerId, PositionSlot, RosterId};

#[derive(Parser)]
#[command(name = "lineup")]
#[command(about = "Build and edit volleyball lineups per roster", long_about = None)]
struct Cli {
    /// Config JSON file (defaults to $LINEUP_CONFIG_PATH)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding stored lineups (overrides the config file)
    #[arg(long, global = true)]
    store_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the stored lineup
    Show {
        #[arg(long)]
        roster: RosterId,

        /// Roster players JSON; adds the bench listing
        #[arg(long)]
        players: Option<PathBuf>,
    },

    /// Put a rostered player in a slot
    Assign {
        #[arg(long)]
        roster: RosterId,

        #[arg(long)]
        players: PathBuf,

        /// Slot name, e.g. setter, middleBlocker2, libero
        #[arg(long)]
        slot: PositionSlot,

        /// Player id
        #[arg(long)]
        player: PlayerId,

        /// Clear any other slot the player holds
        #[arg(long, default_value = "false")]
        exclusive: bool,
    },

    /// Empty a slot
    Clear {
        #[arg(long)]
        roster: RosterId,

        #[arg(long)]
        slot: PositionSlot,
    },

    /// Exchange the occupants of two slots
    Swap {
        #[arg(long)]
        roster: RosterId,

        #[arg(long)]
        slot_a: PositionSlot,

        #[arg(long)]
        slot_b: PositionSlot,
    },

    /// Fill the lineup from the roster by position and store it
    Autofill {
        #[arg(long)]
        roster: RosterId,

        #[arg(long)]
        players: PathBuf,

        /// Print the result without storing it
        #[arg(long, default_value = "false")]
        dry_run: bool,
    },

    /// Store an empty lineup
    Reset {
        #[arg(long)]
        roster: RosterId,
    },

    /// Delete the stored lineup entirely
    Forget {
        #[arg(long)]
        roster: RosterId,
    },

    /// Summarize a roster's players
    Stats {
        #[arg(long)]
        players: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = resolve_config(cli.config.as_deref(), cli.store_dir)
        .context("Failed to resolve lineup configuration")?;
    let mut store = LineupStore::with_config(FileStore::new(&config.storage_dir), &config)?;

    match cli.command {
        Commands::Show { roster, players } => {
            let formation = store.load(roster);
            println!("Roster {} lineup", roster);
            print!("{}", render_formation(&formation));
            if let Some(path) = players {
                let players = load_players(&path)?;
                print!("{}", render_bench(&formation, &players));
            }
        }

        Commands::Assign { roster, players, slot, player, exclusive } => {
            let players = load_players(&players)?;
            let mut lineup = Lineup::open(&mut store, roster, players);
            let formation = if exclusive {
                lineup.move_player(player, slot)?
            } else {
                lineup.add_player(player, slot)?
            };
            println!("✅ Player {} assigned to {}", player, slot);
            print!("{}", render_formation(formation));
        }

        Commands::Clear { roster, slot } => {
            let current = store.load(roster);
            let formation = store.clear(roster, &current, slot);
            println!("✅ Cleared {}", slot);
            print!("{}", render_formation(&formation));
        }

        Commands::Swap { roster, slot_a, slot_b } => {
            let current = store.load(roster);
            let formation = store.swap(roster, &current, slot_a, slot_b);
            println!("✅ Swapped {} and {}", slot_a, slot_b);
            print!("{}", render_formation(&formation));
        }

        Commands::Autofill { roster, players, dry_run } => {
            let players = load_players(&players)?;
            let formation = if dry_run {
                store.auto_fill(&players)
            } else {
                store.initialize(roster, &players)
            };
            println!("{} Auto-filled roster {}", if dry_run { "🔍" } else { "✅" }, roster);
            print!("{}", render_formation(&formation));
            print!("{}", render_bench(&formation, &players));
        }

        Commands::Reset { roster } => {
            store.reset(roster);
            println!("✅ Lineup for roster {} reset", roster);
        }

        Commands::Forget { roster } => {
            store.forget(roster);
            println!("✅ Stored lineup for roster {} removed", roster);
        }

        Commands::Stats { players } => {
            let players = load_players(&players)?;
            print!("{}", render_stats(&players));
        }
    }

    Ok(())
}
