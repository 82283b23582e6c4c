//! Noughts - terminal tic-tac-toe
//!
//! Two players take turns typing moves as `X Y`.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use noughts::{Cli, Console};
use noughts_engine::Game;
use std::io;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_filter)),
        )
        .with_writer(io::stderr)
        .init();

    run(&cli)
}

/// Plays one game on stdin/stdout.
#[instrument(skip_all, fields(policy = ?cli.policy()))]
fn run(cli: &Cli) -> Result<()> {
    info!("Starting noughts");

    let mut game = Game::with_policy(cli.policy());
    let mut console = Console::new(io::stdin().lock(), io::stdout().lock());

    match console.run(&mut game)? {
        Some(over) => info!(%over, "Exiting"),
        None => info!("Exiting without a result"),
    }

    Ok(())
}
