//! Tests for turn sequencing and terminal detection.

use noughts_engine::{Game, GameOver, Mark, Move, MoveError, Square, Turn};
use strum::IntoEnumIterator;

fn play(game: &mut Game, moves: &[(Mark, i32, i32)]) -> Turn {
    let mut turn = game.next_turn();
    for &(mark, x, y) in moves {
        turn = game.make_move(Move::new(mark, x, y)).expect("Valid move");
    }
    turn
}

/// Fills the board with no three in a row for either mark.
const DRAW: [(Mark, i32, i32); 9] = [
    (Mark::PlayerOne, 0, 0),
    (Mark::PlayerTwo, 1, 0),
    (Mark::PlayerOne, 2, 0),
    (Mark::PlayerTwo, 1, 1),
    (Mark::PlayerOne, 0, 1),
    (Mark::PlayerTwo, 2, 1),
    (Mark::PlayerOne, 1, 2),
    (Mark::PlayerTwo, 0, 2),
    (Mark::PlayerOne, 2, 2),
];

#[test]
fn test_first_move_passes_turn() {
    let mut game = Game::new();
    let turn = game
        .make_move(Move::new(Mark::PlayerOne, 0, 0))
        .expect("Valid move");

    let expected = Turn::PlayerTurn {
        next: Mark::PlayerTwo,
    };
    assert_eq!(turn, expected);
    assert_eq!(game.next_turn(), expected);
}

#[test]
fn test_occupied_cell_rejected_for_any_mark() {
    let mut game = Game::new();
    play(
        &mut game,
        &[(Mark::PlayerOne, 0, 0), (Mark::PlayerOne, 1, 1)],
    );
    let before = game.clone();

    for mark in Mark::iter() {
        let result = game.make_move(Move::new(mark, 0, 0));
        assert_eq!(result, Err(MoveError::CellOccupied(Mark::PlayerOne)));
        assert_eq!(game, before);
    }
}

#[test]
fn test_main_diagonal_win() {
    let mut game = Game::new();
    let turn = play(
        &mut game,
        &[
            (Mark::PlayerOne, 0, 0),
            (Mark::PlayerTwo, 0, 1),
            (Mark::PlayerOne, 1, 1),
            (Mark::PlayerTwo, 0, 2),
            (Mark::PlayerOne, 2, 2),
        ],
    );

    assert_eq!(turn, Turn::GameOver(GameOver::won(Mark::PlayerOne)));
    assert_eq!(game.outcome(), Some(GameOver::won(Mark::PlayerOne)));
}

#[test]
fn test_full_board_without_line_is_draw() {
    let mut game = Game::new();
    let mut last = game.next_turn();
    for (i, &(mark, x, y)) in DRAW.iter().enumerate() {
        last = game.make_move(Move::new(mark, x, y)).expect("Valid move");
        if i < DRAW.len() - 1 {
            assert_eq!(last, Turn::PlayerTurn { next: mark.other() });
        }
    }

    assert_eq!(last, Turn::GameOver(GameOver::draw()));
    assert!(
        game.current_board()
            .iter()
            .flatten()
            .all(|s| *s != Square::Empty)
    );
}

#[test]
fn test_out_of_range_leaves_state_untouched() {
    let mut game = Game::new();
    play(&mut game, &[(Mark::PlayerOne, 1, 1)]);
    let before = game.clone();

    let result = game.make_move(Move::new(Mark::PlayerTwo, 3, 0));
    assert_eq!(result, Err(MoveError::OutOfRange { x: 3, y: 0 }));
    assert_eq!(game.current_board(), before.current_board());
    assert_eq!(game.next_turn(), before.next_turn());
}

#[test]
fn test_finished_game_is_frozen() {
    let mut game = Game::new();
    play(&mut game, &DRAW);
    let before = game.clone();

    for mark in Mark::iter() {
        for (x, y) in [(0, 0), (1, 1), (7, -2)] {
            let result = game.make_move(Move::new(mark, x, y));
            assert_eq!(result, Err(MoveError::GameAlreadyOver(GameOver::draw())));
            assert_eq!(game, before);
        }
    }
}

#[test]
fn test_turn_alternates_until_game_ends() {
    let mut game = Game::new();
    let mut mark = Mark::PlayerOne;
    for &(_, x, y) in &DRAW[..8] {
        let turn = game.make_move(Move::new(mark, x, y)).expect("Valid move");
        mark = mark.other();
        assert_eq!(turn, Turn::PlayerTurn { next: mark });
    }
}

#[test]
fn test_win_on_last_cell_beats_draw() {
    // 1 2 1
    // 2 1 2
    // 2 1 1  <- PlayerOne's ninth move completes the main diagonal
    let mut game = Game::new();
    let turn = play(
        &mut game,
        &[
            (Mark::PlayerOne, 0, 0),
            (Mark::PlayerTwo, 1, 0),
            (Mark::PlayerOne, 2, 0),
            (Mark::PlayerTwo, 0, 1),
            (Mark::PlayerOne, 1, 1),
            (Mark::PlayerTwo, 2, 1),
            (Mark::PlayerOne, 1, 2),
            (Mark::PlayerTwo, 0, 2),
            (Mark::PlayerOne, 2, 2),
        ],
    );
    assert_eq!(turn, Turn::GameOver(GameOver::won(Mark::PlayerOne)));
}

#[test]
fn test_replay_matches_live_play() {
    let moves: Vec<Move> = DRAW
        .iter()
        .map(|&(mark, x, y)| Move::new(mark, x, y))
        .collect();

    let replayed = Game::replay(&moves).expect("Valid replay");
    let mut live = Game::new();
    play(&mut live, &DRAW);

    assert_eq!(replayed.state(), live.state());
    assert_eq!(replayed.history(), moves.as_slice());
}
