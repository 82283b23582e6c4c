//! Noughts - two-player tic-tac-toe in the terminal
//!
//! The console side of the game: reads moves as text, renders the board,
//! and drives a [`noughts_engine::Game`] until it finishes.
//!
//! # Architecture
//!
//! - **Cli**: command-line flags and the turn policy they select
//! - **Input**: `"X Y"` parsing into coordinates
//! - **Render**: text board and turn messages
//! - **Console**: the read/render loop over any reader and writer

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod console;
mod input;
mod render;

pub use cli::Cli;
pub use console::Console;
pub use input::{InputError, parse_coordinates};
pub use render::{describe_outcome, describe_turn, render_board, square_symbol};
