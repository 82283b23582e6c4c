//! Immutable 3x3 board.

use super::phases::GameOver;
use super::rules;
use super::{Coordinates, Move, MoveError, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Width and height of the board.
pub const SIZE: usize = 3;

/// Cell contents indexed `[x][y]`.
pub type Grid = [[Square; SIZE]; SIZE];

/// Snapshot of the 3x3 grid.
///
/// `Board` is a plain value: [`Board::apply_move`] returns a new board and
/// never touches the receiver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: Grid,
}

impl Board {
    /// Creates an empty board.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the grid contents.
    pub fn state(&self) -> &Grid {
        &self.cells
    }

    /// Gets the square at (x, y), or `None` if off the board.
    pub fn get(&self, x: i32, y: i32) -> Option<Square> {
        let (x, y) = index(x, y)?;
        Some(self.cells[x][y])
    }

    /// Validates `mv` and returns the board with the target cell claimed.
    ///
    /// # Errors
    ///
    /// - [`MoveError::OutOfRange`] if either coordinate is outside 0-2
    /// - [`MoveError::CellOccupied`] if the cell already holds a mark
    #[instrument(skip(self), fields(mark = %mv.mark, x = mv.x, y = mv.y))]
    pub fn apply_move(&self, mv: Move) -> Result<Board, MoveError> {
        let Some((x, y)) = index(mv.x, mv.y) else {
            debug!("Move is off the board");
            return Err(MoveError::OutOfRange { x: mv.x, y: mv.y });
        };

        if let Square::Occupied(occupant) = self.cells[x][y] {
            debug!(%occupant, "Cell already taken");
            return Err(MoveError::CellOccupied(occupant));
        }

        let mut next = *self;
        next.cells[x][y] = Square::Occupied(mv.mark);
        Ok(next)
    }

    /// Checks for a terminal position.
    ///
    /// Returns a win for the first complete line (rows, then columns, then
    /// diagonals), a draw if the board is full, or `None` while play continues.
    #[instrument(skip(self))]
    pub fn detect_outcome(&self) -> Option<GameOver> {
        if let Some(winner) = rules::check_winner(self) {
            return Some(GameOver::won(winner));
        }

        if rules::is_full(self) {
            return Some(GameOver::draw());
        }

        None
    }

    /// Returns the empty cells, scanning each row left to right.
    pub fn empty_cells(&self) -> Vec<Coordinates> {
        coordinates()
            .filter(|c| self.get(c.x, c.y).is_some_and(Square::is_empty))
            .collect()
    }

    /// Counts cells holding a mark.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().flatten().filter(|s| !s.is_empty()).count()
    }
}

/// Converts caller coordinates into grid indices.
fn index(x: i32, y: i32) -> Option<(usize, usize)> {
    let x = usize::try_from(x).ok().filter(|&x| x < SIZE)?;
    let y = usize::try_from(y).ok().filter(|&y| y < SIZE)?;
    Some((x, y))
}

/// All nine addresses, row by row.
fn coordinates() -> impl Iterator<Item = Coordinates> {
    (0..SIZE as i32).flat_map(|y| (0..SIZE as i32).map(move |x| Coordinates::new(x, y)))
}
