//! Line-oriented console: prompts, roll announcements, the final report.
//!
//! `Console` wraps any `BufRead` + `Write` pair. The binary hands it locked
//! stdin and stdout; tests hand it a `Cursor` and a `Vec<u8>`.
//!
//! ```
//! use std::io::Cursor;
//! use dice21::Console;
//!
//! let mut console = Console::new(Cursor::new("maybe\nY\n"), Vec::new());
//! assert!(console.ask_continue("Ann").unwrap());
//!
//! let transcript = String::from_utf8(console.into_output()).unwrap();
//! assert!(transcript.contains("You must answer 'y' or 'n'!"));
//! ```

use std::io::{BufRead, Write};

use crate::core::{GameState, RollOutcome};
use crate::error::GameError;
use crate::rules::GameResult;

pub const FIRST_NAME_PROMPT: &str = "Enter first player's name: ";
pub const SECOND_NAME_PROMPT: &str = "Enter second player's name: ";
pub const INVALID_ANSWER: &str = "You must answer 'y' or 'n'!";

/// Console over an input reader and an output writer.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `prompt` and read one line, without its line terminator.
    ///
    /// Bytes that are not valid UTF-8 come back as U+FFFD rather than an
    /// error, so a garbled answer is just another wrong answer.
    pub fn read_line(&mut self, prompt: &str) -> Result<String, GameError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(GameError::InputClosed {
                prompt: prompt.to_string(),
            });
        }

        if buf.ends_with(b"\n") {
            buf.pop();
            if buf.ends_with(b"\r") {
                buf.pop();
            }
        }
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Ask for a player's name. Anything, including an empty line, is a name.
    pub fn ask_name(&mut self, prompt: &str) -> Result<String, GameError> {
        self.read_line(prompt)
    }

    /// Ask `name` whether to keep rolling until they answer "y" or "n".
    ///
    /// Case does not matter; anything else prints a retry message and asks
    /// again.
    pub fn ask_continue(&mut self, name: &str) -> Result<bool, GameError> {
        let prompt = format!("{name}, do you want to keep rolling? [y/n]: ");
        loop {
            let answer = self.read_line(&prompt)?.to_lowercase();
            match answer.as_str() {
                "y" => return Ok(true),
                "n" => return Ok(false),
                _ => {
                    log::debug!("rejected answer {answer:?} from {name}");
                    writeln!(self.output, "{INVALID_ANSWER}")?;
                }
            }
        }
    }

    /// Show the result of a roll. On a bust `outcome.score` is the losing
    /// total, not the zeroed score.
    pub fn announce_roll(&mut self, name: &str, outcome: &RollOutcome) -> Result<(), GameError> {
        writeln!(self.output)?;
        writeln!(
            self.output,
            "{name} rolls {} and has total score {}.",
            outcome.die, outcome.score
        )?;
        Ok(())
    }

    /// Print every player's final score, then the winner or a tie.
    pub fn report(&mut self, state: &GameState, result: GameResult) -> Result<(), GameError> {
        writeln!(self.output)?;
        for (_, player) in state.players.iter() {
            writeln!(
                self.output,
                "{}'s final score is {}!",
                player.name(),
                player.score()
            )?;
        }

        writeln!(self.output)?;
        match result {
            GameResult::Winner(id) => {
                writeln!(self.output, "The winner is {}!", state.player(id).name())?
            }
            GameResult::Tie => writeln!(self.output, "There is a tie!")?,
        }
        self.output.flush()?;
        Ok(())
    }

    /// Consume the console and hand back the writer.
    pub fn into_output(self) -> W {
        self.output
    }
}
