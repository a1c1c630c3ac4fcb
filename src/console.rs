//! Line-oriented console front end.
//!
//! Reads moves and replay answers from any [`BufRead`] and writes the board,
//! prompts and announcements to any [`Write`]. The binary wires it to
//! stdin/stdout; tests drive it with in-memory buffers.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use log::debug;

use crate::board::Board;
use crate::game::{GameEngine, GameState};

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the writer, e.g. to inspect a captured transcript.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Read one trimmed line after a `-> ` prompt. `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        write!(self.output, "-> ")?;
        self.output.flush().context("failed to flush output")?;

        let mut line = String::new();
        let n = self
            .input
            .read_line(&mut line)
            .context("failed to read input")?;
        if n == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Ask until the player names a column that exists and is not full.
    ///
    /// Returns `None` if input runs out first.
    pub fn read_column(&mut self, board: &Board) -> Result<Option<usize>> {
        let open: Vec<String> = board.open_columns().iter().map(usize::to_string).collect();
        let open = open.join(" ");
        loop {
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match line.parse::<usize>() {
                Ok(column) if column < board.width() && !board.is_column_full(column) => {
                    return Ok(Some(column));
                }
                _ => {
                    debug!("Rejected column input {line:?}");
                    writeln!(
                        self.output,
                        "Invalid input. Please input one of these positions: {open}"
                    )?;
                }
            }
        }
    }

    /// Ask whether to play again until the answer is `y` or `n`.
    ///
    /// End of input counts as `n`.
    pub fn read_replay(&mut self) -> Result<bool> {
        writeln!(self.output, "\nWould you like to play again? (y/n)")?;
        loop {
            let Some(line) = self.read_line()? else {
                return Ok(false);
            };
            match line.to_lowercase().as_str() {
                "y" => return Ok(true),
                "n" => return Ok(false),
                _ => {}
            }
        }
    }

    fn announce(&mut self, engine: &GameEngine) -> Result<()> {
        write!(self.output, "{}", engine.board())?;
        match engine.winner() {
            Some(winner) => writeln!(self.output, "\n{} has won the game!", winner.name())?,
            None => writeln!(self.output, "\nThe game ended in a draw")?,
        }
        Ok(())
    }

    /// Drive `engine` until the players decline a replay or input runs out.
    pub fn run(&mut self, engine: &mut GameEngine) -> Result<()> {
        loop {
            match engine.state() {
                GameState::InProgress => {
                    write!(self.output, "{}", engine.board())?;
                    let player = engine.current_player();
                    writeln!(
                        self.output,
                        "\n{}'s({}) turn. Please input a position:\n",
                        player.name(),
                        player.disk()
                    )?;
                    let Some(column) = self.read_column(engine.board())? else {
                        debug!("Input closed mid-game");
                        return Ok(());
                    };
                    engine.play(column)?;
                }
                GameState::Won(_) | GameState::Draw => {
                    self.announce(engine)?;
                    let again = self.read_replay()?;
                    engine.replay(again)?;
                }
                GameState::Terminated => return Ok(()),
            }
        }
    }
}
