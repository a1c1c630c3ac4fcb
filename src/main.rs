//! Connect Four for the terminal.
//!
//! ## Usage
//!
//! - `connect-four` - Play on a 7x6 board
//! - `connect-four --player1 Ann --player2 Bob` - Name the players
//! - `connect-four --width 9 --height 7` - Play on a larger board
//!
//! Set `RUST_LOG=debug` to trace moves on stderr.

use std::io;

use anyhow::{Context, Result};
use clap::Parser;

use connect_four::config::GameConfig;
use connect_four::console::Console;
use connect_four::constants::{DEFAULT_HEIGHT, DEFAULT_PLAYER1, DEFAULT_PLAYER2, DEFAULT_WIDTH};
use connect_four::game::GameEngine;

/// Two-player Connect Four on the console
#[derive(Parser)]
#[command(name = "connect-four")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Name of the first (red) player
    #[arg(long, default_value = DEFAULT_PLAYER1)]
    player1: String,

    /// Name of the second (blue) player
    #[arg(long, default_value = DEFAULT_PLAYER2)]
    player2: String,

    /// Number of columns
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: usize,

    /// Number of cells per column
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: usize,

    /// Seed for choosing the starting player
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = GameConfig {
        width: cli.width,
        height: cli.height,
        player1: cli.player1,
        player2: cli.player2,
    };

    let rng = match cli.seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    };
    let mut engine = GameEngine::with_rng(config, rng).context("invalid game settings")?;

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());
    console.run(&mut engine)
}
