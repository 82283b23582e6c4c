//! Interactive play loop.

use crate::input::parse_coordinates;
use crate::render::{describe_turn, render_board};
use anyhow::{Context, Result};
use noughts_engine::{Game, GameOver, Move};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};

const SEPARATOR: &str = "--------------------";

/// Drives a [`Game`] from line-based input, writing the transcript to `output`.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console over the given reader and writer.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Plays until the game ends or input runs out.
    ///
    /// The mark submitted for each move is always the one `game` reports as
    /// next. Returns the outcome, or `None` if input closed first.
    ///
    /// # Errors
    ///
    /// Fails only on I/O errors; bad input and rejected moves are reported
    /// to the player and re-prompted.
    #[instrument(skip_all)]
    pub fn run(&mut self, game: &mut Game) -> Result<Option<GameOver>> {
        writeln!(self.output, "Let's play tic-tac-toe").context("Failed to write greeting")?;

        loop {
            self.show_board(game)?;

            let turn = game.next_turn();
            let Some(next) = turn.next_mark() else {
                writeln!(self.output, "Game over!")?;
                writeln!(self.output, "{}", describe_turn(&turn))?;
                self.output.flush()?;
                let outcome = game.outcome();
                info!(?outcome, moves = game.history().len(), "Game complete");
                return Ok(outcome);
            };

            writeln!(self.output, "{}", describe_turn(&turn))?;
            writeln!(self.output, "Input move as X Y (e.g. 0 1)")?;
            self.output.flush().context("Failed to flush prompt")?;

            let mut line = String::new();
            if self
                .input
                .read_line(&mut line)
                .context("Failed to read move")?
                == 0
            {
                info!("Input closed before the game finished");
                return Ok(None);
            }

            let coordinates = match parse_coordinates(&line) {
                Ok(coordinates) => coordinates,
                Err(e) => {
                    debug!(error = %e, "Unparseable input");
                    writeln!(self.output, "{}", e)?;
                    continue;
                }
            };

            if let Err(e) = game.make_move(Move::new(next, coordinates.x, coordinates.y)) {
                writeln!(self.output, "Invalid move: {}", e)?;
            }
        }
    }

    fn show_board(&mut self, game: &Game) -> Result<()> {
        writeln!(self.output, "{}", SEPARATOR)?;
        writeln!(self.output, "Current game state: ")?;
        write!(self.output, "{}", render_board(game.board()))?;
        Ok(())
    }

    /// Consumes the console, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }
}
