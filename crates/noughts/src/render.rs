//! Text rendering of boards and turns.

use noughts_engine::{Board, GameOver, Mark, Square, Turn};

/// Symbol printed for a cell: `0` empty, `1` PlayerOne, `2` PlayerTwo.
pub fn square_symbol(square: Square) -> &'static str {
    match square {
        Square::Empty => "0",
        Square::Occupied(Mark::PlayerOne) => "1",
        Square::Occupied(Mark::PlayerTwo) => "2",
    }
}

/// Renders the board as three lines, one per row, cells joined by `" | "`.
pub fn render_board(board: &Board) -> String {
    let grid = board.state();
    let mut result = String::new();
    for y in 0..grid.len() {
        let row: Vec<&str> = grid.iter().map(|column| square_symbol(column[y])).collect();
        result.push_str(&row.join(" | "));
        result.push('\n');
    }
    result
}

/// Message announcing a finished game.
pub fn describe_outcome(over: &GameOver) -> String {
    match over.winner {
        Some(mark) => format!("Winner is: {}", mark),
        None => "It's a draw!".to_string(),
    }
}

/// Message describing what happens next.
pub fn describe_turn(turn: &Turn) -> String {
    match turn {
        Turn::PlayerTurn { next } => format!("Next turn: {}", next),
        Turn::GameOver(over) => describe_outcome(over),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use noughts_engine::Move;

    #[test]
    fn test_empty_board() {
        assert_eq!(render_board(&Board::new()), "0 | 0 | 0\n0 | 0 | 0\n0 | 0 | 0\n");
    }

    #[test]
    fn test_rows_are_y() {
        let board = Board::new()
            .apply_move(Move::new(Mark::PlayerOne, 2, 0))
            .and_then(|b| b.apply_move(Move::new(Mark::PlayerTwo, 0, 1)))
            .unwrap();
        assert_eq!(render_board(&board), "0 | 0 | 1\n2 | 0 | 0\n0 | 0 | 0\n");
    }

    #[test]
    fn test_turn_messages() {
        assert_eq!(
            describe_turn(&Turn::PlayerTurn {
                next: Mark::PlayerTwo
            }),
            "Next turn: Player 2"
        );
        assert_eq!(
            describe_turn(&Turn::GameOver(GameOver::won(Mark::PlayerOne))),
            "Winner is: Player 1"
        );
        assert_eq!(describe_outcome(&GameOver::draw()), "It's a draw!");
    }
}
