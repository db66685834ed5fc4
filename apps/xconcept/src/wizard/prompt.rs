//! Line-oriented prompting over any reader/writer pair.

use std::io::{BufRead, Write};
use xconcept_core::XconceptError;

/// Answer that empties a text field instead of keeping it.
pub const CLEAR_COMMAND: &str = "-";

/// Why a step stopped before choosing where to go next.
#[derive(Debug)]
pub enum Halt {
    /// Input closed (Ctrl-D or end of a scripted stream).
    EndOfInput,
    /// Reading or writing the terminal failed.
    Failed(XconceptError),
}

impl From<std::io::Error> for Halt {
    fn from(e: std::io::Error) -> Self {
        Halt::Failed(XconceptError::IoError(e.to_string()))
    }
}

/// Terminal prompter.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the underlying reader and writer.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Print one line.
    pub fn say(&mut self, text: &str) -> Result<(), Halt> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Print `prompt` and read one line, without its line terminator.
    pub fn line(&mut self, prompt: &str) -> Result<String, Halt> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Err(Halt::EndOfInput);
        }
        Ok(buf.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Ask for a text field.
    ///
    /// Shows the current value in brackets. An empty answer keeps it
    /// (`None`), [`CLEAR_COMMAND`] empties it (`Some("")`), anything else
    /// replaces it, trimmed.
    pub fn text(&mut self, label: &str, current: &str) -> Result<Option<String>, Halt> {
        let prompt = if current.is_empty() {
            format!("{}: ", label)
        } else {
            format!("{} [{}]: ", label, current)
        };
        let answer = self.line(&prompt)?;
        Ok(parse_text(&answer))
    }

    /// Ask for a 1-based choice among `count` options.
    ///
    /// Empty input or an out-of-range answer yields `None`.
    pub fn choice(&mut self, prompt: &str, count: usize) -> Result<Option<usize>, Halt> {
        let answer = self.line(prompt)?;
        Ok(parse_choice(&answer, count))
    }
}

/// Interpret a text answer: keep, clear or replace.
pub fn parse_text(answer: &str) -> Option<String> {
    match answer.trim() {
        "" => None,
        CLEAR_COMMAND => Some(String::new()),
        value => Some(value.to_string()),
    }
}

/// Parse a 1-based menu choice into a 0-based index.
pub fn parse_choice(answer: &str, count: usize) -> Option<usize> {
    answer
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|n| (1..=count).contains(n))
        .map(|n| n - 1)
}
