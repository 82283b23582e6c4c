//! Draw detection logic for tic-tac-toe.

use crate::Board;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner is a draw.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.state().iter().flatten().all(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::super::win::check_winner;
    use super::*;
    use crate::{Mark, Move};

    fn fill(order: &[(i32, i32)]) -> Board {
        let mut mark = Mark::PlayerOne;
        let mut board = Board::new();
        for &(x, y) in order {
            board = board.apply_move(Move::new(mark, x, y)).unwrap();
            mark = mark.other();
        }
        board
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board = fill(&[(1, 1), (0, 0)]);
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        // 1 2 1
        // 1 2 2
        // 2 1 1
        let board = fill(&[
            (0, 0),
            (1, 0),
            (2, 0),
            (1, 1),
            (0, 1),
            (2, 1),
            (1, 2),
            (0, 2),
            (2, 2),
        ]);
        assert!(is_full(&board));
        assert_eq!(check_winner(&board), None);
    }
}
