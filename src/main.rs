//! Carat-Rust command line.
//!
//! ## Usage
//!
//! - `carat-rust` - Play a seeded AI-vs-AI demo game
//! - `carat-rust demo --players 3 --seed 7` - Same, with options
//! - `carat-rust chips --json` - Dump the chip layout of a fresh board

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use carat_rust::constants::{DEFAULT_BOARD_SIZE, DEFAULT_PLAYERS, DEFAULT_SEED};
use carat_rust::game::{Game, GameConfig};
use carat_rust::{Chip, create_board};

/// Carat-Rust: tile placement and chip scoring engine
#[derive(Parser)]
#[command(name = "carat-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log at debug level (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a full game between random AI players
    Demo(Setup),
    /// Print the chip values and required adjacency of a fresh board
    Chips {
        #[command(flatten)]
        setup: Setup,
        /// Emit chip snapshots as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Clone, Copy)]
struct Setup {
    /// Board size in cells
    #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
    size: usize,
    /// Number of players (2-4)
    #[arg(long, default_value_t = DEFAULT_PLAYERS)]
    players: usize,
    /// Random seed
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,
}

impl From<Setup> for GameConfig {
    fn from(s: Setup) -> Self {
        GameConfig {
            board_size: s.size,
            player_count: s.players,
            seed: s.seed,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Some(Commands::Chips { setup, json }) => show_chips(setup, json),
        Some(Commands::Demo(setup)) => run_demo(setup),
        None => run_demo(Setup {
            size: DEFAULT_BOARD_SIZE,
            players: DEFAULT_PLAYERS,
            seed: DEFAULT_SEED,
        }),
    }
}

fn run_demo(setup: Setup) -> Result<()> {
    let mut game = Game::new(setup.into()).context("failed to set up game")?;
    println!("Carat-Rust: seed {}\n", setup.seed);

    let turns = game.play_out().context("game aborted")?;
    for turn in &turns {
        let (row, col) = turn.outcome.cell;
        print!("{} placed value {} at ({row},{col})", turn.player, turn.outcome.tile.value());
        for res in &turn.outcome.resolved {
            match res.owner {
                Some(c) => print!(" | chip {:?} -> {c} (+{})", res.position, res.points),
                None => print!(" | chip {:?} -> nobody", res.position),
            }
        }
        println!();
    }

    println!("\n{}", game.board());
    println!("Leaderboard:");
    for (rank, p) in game.leaderboard().iter().enumerate() {
        println!("{}. {} ({}) {} points, {} chips", rank + 1, p.name, p.color, p.score, p.collected.len());
    }
    match game.winner() {
        Some(p) => println!("Winner: {}", p.name),
        None => println!("Tie for first place"),
    }
    Ok(())
}

fn show_chips(setup: Setup, json: bool) -> Result<()> {
    let config = GameConfig::from(setup);
    config.validate()?;
    let mut rng = fastrand::Rng::with_seed(config.seed);
    let board = create_board(config.board_size, &mut rng)?;

    if json {
        let snapshots: Vec<_> = board.chips().iter().map(Chip::snapshot).collect();
        println!("{}", serde_json::to_string_pretty(&snapshots)?);
        return Ok(());
    }

    let side = board.size() + 1;
    for row in 0..side {
        for col in 0..side {
            if let Some(chip) = board.chip(row, col) {
                print!("{}/{} ", chip.value(), chip.required_adjacency());
            }
        }
        println!();
    }
    Ok(())
}
