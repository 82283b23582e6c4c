//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Player mark placed on the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Mark {
    /// First player (always opens the game).
    #[display("Player 1")]
    PlayerOne,
    /// Second player.
    #[display("Player 2")]
    PlayerTwo,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn other(self) -> Self {
        match self {
            Mark::PlayerOne => Mark::PlayerTwo,
            Mark::PlayerTwo => Mark::PlayerOne,
        }
    }
}

/// A single cell of the board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// No mark yet.
    #[default]
    Empty,
    /// Claimed by a player.
    Occupied(Mark),
}

impl Square {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Square::Empty => None,
            Square::Occupied(mark) => Some(mark),
        }
    }

    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        matches!(self, Square::Empty)
    }
}

/// A cell address as supplied by a caller.
///
/// Coordinates are signed so that out-of-range input (including negatives)
/// reaches the engine and is rejected there.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[display("({x}, {y})")]
pub struct Coordinates {
    /// Column, 0-2 when valid.
    pub x: i32,
    /// Row, 0-2 when valid.
    pub y: i32,
}

impl Coordinates {
    /// Creates a coordinate pair.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}
