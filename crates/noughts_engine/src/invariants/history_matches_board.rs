//! Monotonic board: the board is exactly its move history.

use super::Invariant;
use crate::{Board, Game};

/// Invariant: replaying the history onto an empty board reproduces the board.
///
/// Each recorded move must land on an empty, in-range cell, so a cell once
/// filled is never cleared or overwritten.
pub struct HistoryMatchesBoard;

impl Invariant<Game> for HistoryMatchesBoard {
    fn holds(game: &Game) -> bool {
        game.history()
            .iter()
            .try_fold(Board::new(), |board, mv| board.apply_move(*mv))
            .is_ok_and(|rebuilt| rebuilt == *game.board())
    }

    fn description() -> &'static str {
        "Board equals its move history (cells are never overwritten)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mark, Move, Square};

    #[test]
    fn test_empty_game_holds() {
        assert!(HistoryMatchesBoard::holds(&Game::new()));
    }

    #[test]
    fn test_moves_hold() {
        let game = Game::replay(&[
            Move::new(Mark::PlayerOne, 0, 0),
            Move::new(Mark::PlayerTwo, 2, 2),
        ])
        .unwrap();
        assert!(HistoryMatchesBoard::holds(&game));
    }

    #[test]
    fn test_overwritten_history_violates() {
        let mut game = Game::new();
        game.make_move(Move::new(Mark::PlayerOne, 1, 1)).unwrap();
        game.history.push(Move::new(Mark::PlayerTwo, 1, 1));

        assert!(!HistoryMatchesBoard::holds(&game));
        assert_eq!(game.current_board()[1][1], Square::Occupied(Mark::PlayerOne));
    }
}
