//! Parsing of typed moves.

use derive_more::{Display, Error};
use noughts_engine::Coordinates;
use tracing::instrument;

/// Why a line of input could not be read as a move.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum InputError {
    /// Nothing but whitespace.
    #[display("No input received.")]
    Empty,

    /// Not exactly two tokens.
    #[display("Received invalid format ({_0} values). Input move as X Y (e.g. 0 1)")]
    WrongArity(#[error(not(source))] usize),

    /// A token is not an integer.
    #[display("Invalid number provided: {_0:?}")]
    InvalidNumber(#[error(not(source))] String),
}

/// Parses `"X Y"` (two whitespace-separated integers) into coordinates.
///
/// Range checking is left to the engine.
#[instrument]
pub fn parse_coordinates(line: &str) -> Result<Coordinates, InputError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    let [x, y] = tokens.as_slice() else {
        return Err(if tokens.is_empty() {
            InputError::Empty
        } else {
            InputError::WrongArity(tokens.len())
        });
    };

    Ok(Coordinates::new(parse_number(x)?, parse_number(y)?))
}

fn parse_number(token: &str) -> Result<i32, InputError> {
    token
        .parse()
        .map_err(|_| InputError::InvalidNumber(token.to_string()))
}
