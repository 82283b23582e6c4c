//! Noughts engine - pure tic-tac-toe rules
//!
//! A small turn-based rules engine: an immutable 3x3 [`Board`], a [`Game`]
//! that sequences turns and owns the only mutable state, and the win/draw
//! rules that decide when play stops.
//!
//! # Architecture
//!
//! - **Board**: value-type grid; every move produces a new board
//! - **Game**: turn sequencing, terminal-state freezing, move history
//! - **Rules**: line scanning for wins, full-board detection for draws
//! - **Invariants**: checkable properties asserted after every move in debug builds
//!
//! # Example
//!
//! ```
//! use noughts_engine::{Game, GameOver, Mark, Move, Turn};
//!
//! let mut game = Game::new();
//! let moves = [
//!     Move::new(Mark::PlayerOne, 0, 0),
//!     Move::new(Mark::PlayerTwo, 0, 1),
//!     Move::new(Mark::PlayerOne, 1, 1),
//!     Move::new(Mark::PlayerTwo, 0, 2),
//! ];
//! for mv in moves {
//!     game.make_move(mv)?;
//! }
//! let turn = game.make_move(Move::new(Mark::PlayerOne, 2, 2))?;
//! assert_eq!(turn, Turn::GameOver(GameOver::won(Mark::PlayerOne)));
//! # Ok::<(), noughts_engine::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod game;
pub mod invariants;
mod phases;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use board::{Board, Grid, SIZE};
pub use game::{Game, GameState, TurnPolicy};
pub use phases::{GameOver, Turn};
pub use types::{Coordinates, Mark, Square};
