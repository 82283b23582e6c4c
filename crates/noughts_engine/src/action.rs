//! Moves and the errors they can produce.
//!
//! A move is transient input to a state transition: the player's intent,
//! validated by the board and the game before anything changes.

use super::{GameOver, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move in tic-tac-toe: a mark claiming the cell at (x, y).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The mark being placed.
    pub mark: Mark,
    /// Target column.
    pub x: i32,
    /// Target row.
    pub y: i32,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(mark: Mark, x: i32, y: i32) -> Self {
        Self { mark, x, y }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> ({}, {})", self.mark, self.x, self.y)
    }
}

/// Error that can occur when validating or applying a move.
///
/// Every variant is recoverable and leaves the game state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// A coordinate is outside 0-2.
    #[display("Coordinates ({x}, {y}) are off the board; X and Y must be between 0 and 2")]
    OutOfRange {
        /// Submitted column.
        x: i32,
        /// Submitted row.
        y: i32,
    },

    /// The target cell already holds a mark.
    #[display("Must choose an open space! Space already taken by {_0}")]
    CellOccupied(Mark),

    /// A move was attempted after the game ended.
    #[display("Game is already over ({_0})")]
    GameAlreadyOver(GameOver),

    /// The submitted mark is not the one due to move (strict policy only).
    #[display("It's {expected}'s turn, not {submitted}'s")]
    MismatchedPlayer {
        /// Mark recorded as next to move.
        expected: Mark,
        /// Mark carried by the move.
        submitted: Mark,
    },
}

impl std::error::Error for MoveError {}
