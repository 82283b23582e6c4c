//! Command-line interface for noughts.

use clap::Parser;
use noughts_engine::TurnPolicy;

/// Noughts - two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Reject moves submitted for the player whose turn it is not
    #[arg(long)]
    pub strict: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, env = "NOUGHTS_LOG", default_value = "warn")]
    pub log_filter: String,
}

impl Cli {
    /// Turn policy selected by the flags.
    pub fn policy(&self) -> TurnPolicy {
        if self.strict {
            TurnPolicy::Strict
        } else {
            TurnPolicy::Lenient
        }
    }
}
