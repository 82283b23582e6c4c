//! Turn tracking: whose move is next, or how the game ended.

use super::Mark;
use serde::{Deserialize, Serialize};

/// A finished game.
///
/// `winner` is `None` when the board filled without a winning line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameOver {
    /// The winning mark, or `None` for a draw.
    pub winner: Option<Mark>,
}

impl GameOver {
    /// A game won by `mark`.
    pub fn won(mark: Mark) -> Self {
        Self { winner: Some(mark) }
    }

    /// A drawn game.
    pub fn draw() -> Self {
        Self { winner: None }
    }
}

impl std::fmt::Display for GameOver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.winner {
            Some(mark) => write!(f, "Winner: {}", mark),
            None => write!(f, "Draw"),
        }
    }
}

/// What happens next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Turn {
    /// Game continues and `next` must move.
    PlayerTurn {
        /// Mark due to move.
        next: Mark,
    },
    /// Game has ended; no further moves are accepted.
    GameOver(GameOver),
}

impl Turn {
    /// Returns the mark due to move, if the game is still running.
    pub fn next_mark(&self) -> Option<Mark> {
        match self {
            Turn::PlayerTurn { next } => Some(*next),
            Turn::GameOver(_) => None,
        }
    }
}
