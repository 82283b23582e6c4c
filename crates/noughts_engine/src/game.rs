//! Turn sequencing for tic-tac-toe.
//!
//! [`Game`] owns the only mutable state in the engine. Each successful
//! [`Game::make_move`] replaces that state in one assignment; every
//! rejected move leaves it exactly as it was.

use super::invariants::{GameInvariants, InvariantSet};
use super::{Board, GameOver, Grid, Mark, Move, MoveError, Turn};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// How strictly the game checks the mark carried by a move.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPolicy {
    /// Accept any mark; the next turn goes to the other mark than the one submitted.
    #[default]
    Lenient,
    /// Reject moves whose mark is not the one due to move.
    Strict,
}

/// Current turn and board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GameState {
    /// Whose move it is, or how the game ended.
    pub(crate) turn: Turn,
    /// Current board.
    pub(crate) board: Board,
}

impl GameState {
    /// Empty board with PlayerOne to move.
    pub fn new() -> Self {
        Self {
            turn: Turn::PlayerTurn {
                next: Mark::PlayerOne,
            },
            board: Board::new(),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Tic-tac-toe game engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub(crate) state: GameState,
    pub(crate) history: Vec<Move>,
    policy: TurnPolicy,
}

impl Game {
    /// Creates a new game with the lenient turn policy.
    #[instrument]
    pub fn new() -> Self {
        Self::with_policy(TurnPolicy::default())
    }

    /// Creates a new game with the given turn policy.
    #[instrument]
    pub fn with_policy(policy: TurnPolicy) -> Self {
        Self {
            state: GameState::new(),
            history: Vec::new(),
            policy,
        }
    }

    /// Rebuilds a lenient game by playing `moves` in order.
    ///
    /// # Errors
    ///
    /// Returns the first error any move produces.
    #[instrument(skip(moves), fields(count = moves.len()))]
    pub fn replay(moves: &[Move]) -> Result<Self, MoveError> {
        let mut game = Self::new();
        for mv in moves {
            game.make_move(*mv)?;
        }
        Ok(game)
    }

    /// Plays a move and returns the resulting turn.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameAlreadyOver`] once the game has ended
    /// - [`MoveError::MismatchedPlayer`] under [`TurnPolicy::Strict`] when
    ///   the move's mark is not the one due to move
    /// - [`MoveError::OutOfRange`] / [`MoveError::CellOccupied`] from the board
    ///
    /// On error the game is unchanged.
    #[instrument(skip(self), fields(mark = %mv.mark, x = mv.x, y = mv.y))]
    pub fn make_move(&mut self, mv: Move) -> Result<Turn, MoveError> {
        let expected = match self.state.turn {
            Turn::GameOver(over) => {
                warn!(%over, "Move attempted after game over");
                return Err(MoveError::GameAlreadyOver(over));
            }
            Turn::PlayerTurn { next } => next,
        };

        if self.policy == TurnPolicy::Strict && mv.mark != expected {
            debug!(%expected, "Move submitted for the wrong player");
            return Err(MoveError::MismatchedPlayer {
                expected,
                submitted: mv.mark,
            });
        }

        let board = self.state.board.apply_move(mv)?;
        let turn = match board.detect_outcome() {
            Some(over) => {
                info!(%over, "Game finished");
                Turn::GameOver(over)
            }
            None => Turn::PlayerTurn {
                next: mv.mark.other(),
            },
        };

        self.state = GameState { turn, board };
        self.history.push(mv);

        debug_assert!(
            GameInvariants::check_all(self).is_ok(),
            "Engine invariant violated after {}",
            mv
        );

        Ok(turn)
    }

    /// Returns the current grid.
    pub fn current_board(&self) -> &Grid {
        self.state.board.state()
    }

    /// Returns the current board value.
    pub fn board(&self) -> &Board {
        &self.state.board
    }

    /// Returns whose move it is, or how the game ended.
    pub fn next_turn(&self) -> Turn {
        self.state.turn
    }

    /// Returns the combined turn and board.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the moves accepted so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the turn policy.
    pub fn policy(&self) -> TurnPolicy {
        self.policy
    }

    /// Returns the outcome once the game has ended.
    pub fn outcome(&self) -> Option<GameOver> {
        match self.state.turn {
            Turn::GameOver(over) => Some(over),
            Turn::PlayerTurn { .. } => None,
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
