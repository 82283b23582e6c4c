//! Win detection logic for tic-tac-toe.

use crate::{Board, Mark};
use tracing::instrument;

/// Three cells as `(x, y)` grid indices.
pub type Line = [(usize, usize); 3];

/// Every line that wins, in scan order: rows, columns, then diagonals.
pub const LINES: [Line; 8] = [
    // Rows
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Columns
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Checks if there is a winner on the board.
///
/// Returns the mark holding the first complete line found, `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Mark> {
    let cells = board.state();

    LINES.iter().find_map(|&[a, b, c]| {
        let mark = cells[a.0][a.1].mark()?;
        (cells[b.0][b.1].mark() == Some(mark) && cells[c.0][c.1].mark() == Some(mark))
            .then_some(mark)
    })
}
