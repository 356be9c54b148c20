//! Yes/no confirmation used by interactive mode.

use crate::error::RmcharsError;
use std::io::{self, BufRead, IsTerminal, Write};

/// Source of yes/no answers.
pub trait Confirm {
    fn confirm(&mut self, question: &str) -> Result<bool, RmcharsError>;
}

/// Prompts on the terminal.
///
/// dialoguer needs a TTY, so when stdin is piped (`yes | rmchars -i .`) the
/// question is written to stderr and one line is read from stdin instead.
/// `y` and `yes` (any case) confirm; anything else, including end of input,
/// declines.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalConfirm;

impl Confirm for TerminalConfirm {
    fn confirm(&mut self, question: &str) -> Result<bool, RmcharsError> {
        let stdin = io::stdin();
        if !stdin.is_terminal() {
            let mut stderr = io::stderr();
            write!(stderr, "{} [y/n] ", question)?;
            stderr.flush()?;
            return read_answer(&mut stdin.lock());
        }
        dialoguer::Confirm::new()
            .with_prompt(question)
            .interact()
            .map_err(|e| RmcharsError::Prompt(e.to_string()))
    }
}

/// Read one answer line from a non-interactive source.
pub fn read_answer<R: BufRead>(input: &mut R) -> Result<bool, RmcharsError> {
    let mut line = String::new();
    input
        .read_line(&mut line)
        .map_err(|e| RmcharsError::Prompt(e.to_string()))?;
    let answer = line.trim().to_ascii_lowercase();
    Ok(answer == "y" || answer == "yes")
}

/// Closures answer questions directly; handy for scripted input.
impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, question: &str) -> Result<bool, RmcharsError> {
        Ok(self(question))
    }
}
