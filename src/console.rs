use crate::Error;
use std::collections::VecDeque;
use std::fmt::Display;
use std::io::{BufRead, Write};

/// Line-buffered player input and game output.
///
/// Input is consumed one whitespace-delimited token at a time, so a line with several words
/// answers several prompts in a row.
pub struct Console<R, W> {
    input: R,
    output: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            pending: VecDeque::new(),
        }
    }

    /// Returns the next token of input, skipping blank lines.
    ///
    /// Fails with [`Error::InputClosed`] at end-of-file.
    pub fn next_token(&mut self) -> Result<String, Error> {
        let mut line = String::new();
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Err(Error::InputClosed);
            }
            self.pending
                .extend(line.split_whitespace().map(String::from));
        }
    }

    /// Prints `text` without a newline and waits for the next token.
    pub fn prompt(&mut self, text: &str) -> Result<String, Error> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        self.next_token()
    }

    /// Asks a yes/no question. Anything starting with `y` or `Y` is a yes.
    pub fn confirm(&mut self, text: &str) -> Result<bool, Error> {
        let answer = self.prompt(text)?;
        Ok(answer.to_lowercase().starts_with('y'))
    }

    pub fn say(&mut self, text: impl Display) -> Result<(), Error> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}
