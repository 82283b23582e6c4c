//! Consistency checks over a [`Game`](crate::Game).
//!
//! `make_move` runs [`GameInvariants`] under `debug_assert!` after each
//! accepted move. A failure means the engine itself is broken, never that
//! a caller sent bad input.

pub mod history_matches_board;
pub mod outcome_matches_board;

pub use history_matches_board::HistoryMatchesBoard;
pub use outcome_matches_board::OutcomeMatchesBoard;

/// A named property of `S`.
pub trait Invariant<S> {
    /// True when `state` satisfies the property.
    fn holds(state: &S) -> bool;

    /// One line naming the property, used in violation reports.
    fn description() -> &'static str;
}

/// A property that failed, identified by its description.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violated: {description}")]
pub struct InvariantViolation {
    /// [`Invariant::description`] of the failed check.
    pub description: &'static str,
}

/// Several invariants checked as one.
pub trait InvariantSet<S> {
    /// Runs every check; the error lists each one that failed, in order.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, A, B> InvariantSet<S> for (A, B)
where
    A: Invariant<S>,
    B: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (A::holds(state), A::description()),
            (B::holds(state), B::description()),
        ]
        .into_iter()
        .filter(|(held, _)| !held)
        .map(|(_, description)| InvariantViolation { description })
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// All engine invariants as a composable set.
pub type GameInvariants = (HistoryMatchesBoard, OutcomeMatchesBoard);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Game, Mark, Move};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        assert!(GameInvariants::check_all(&Game::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let game = Game::replay(&[
            Move::new(Mark::PlayerOne, 0, 0),
            Move::new(Mark::PlayerTwo, 1, 1),
            Move::new(Mark::PlayerOne, 2, 0),
        ])
        .unwrap();
        assert!(GameInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_collects_every_violation() {
        let mut game = Game::new();
        game.make_move(Move::new(Mark::PlayerOne, 1, 1)).unwrap();

        // Fill a whole row without recording it: history and outcome both disagree.
        game.state.board = [(0, 0), (1, 0), (2, 0)]
            .iter()
            .fold(game.state.board, |board, &(x, y)| {
                board.apply_move(Move::new(Mark::PlayerTwo, x, y)).unwrap()
            });

        let violations = GameInvariants::check_all(&game).unwrap_err();
        assert_eq!(
            violations,
            vec![
                InvariantViolation {
                    description: HistoryMatchesBoard::description()
                },
                InvariantViolation {
                    description: OutcomeMatchesBoard::description()
                },
            ]
        );
    }
}
