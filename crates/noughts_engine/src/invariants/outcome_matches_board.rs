//! Outcome consistency: the recorded turn agrees with the board.

use super::Invariant;
use crate::rules::{check_winner, is_full};
use crate::{Game, Turn};

/// Invariant: the turn is terminal exactly when the board says so.
///
/// - `GameOver` with a winner: that mark holds a complete line
/// - `GameOver` without a winner: the board is full and nobody has a line
/// - `PlayerTurn`: nobody has a line and an empty cell remains
pub struct OutcomeMatchesBoard;

impl Invariant<Game> for OutcomeMatchesBoard {
    fn holds(game: &Game) -> bool {
        let board = game.board();
        let winner = check_winner(board);

        match game.next_turn() {
            Turn::GameOver(over) => match over.winner {
                Some(mark) => winner == Some(mark),
                None => winner.is_none() && is_full(board),
            },
            Turn::PlayerTurn { .. } => winner.is_none() && !is_full(board),
        }
    }

    fn description() -> &'static str {
        "Turn reflects the board (winner has a line, draw is a full board)"
    }
}
