//! Interactive setup: pick a mode and its parameter

use std::io::{BufRead, Write};

use crate::error::{HashForgeError, Result};
use crate::types::{SearchMode, MAX_MIDDLE_LENGTH, MAX_NAME_LENGTH};
use crate::validation_error;

/// Source of answers for the setup questions
pub trait Prompter {
    /// Print an informational line
    fn say(&mut self, line: &str) -> Result<()>;

    /// Ask a question; `None` when input is exhausted
    fn ask(&mut self, question: &str) -> Result<Option<String>>;
}

/// Plain line-oriented prompts over any reader and writer.
///
/// Used when stdin is piped; the question is printed without a newline.
pub struct LinePrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    fn ask(&mut self, question: &str) -> Result<Option<String>> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

/// `inquire` text prompts for an interactive terminal
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn say(&mut self, line: &str) -> Result<()> {
        println!("{}", line);
        Ok(())
    }

    fn ask(&mut self, question: &str) -> Result<Option<String>> {
        let answer = inquire::Text::new(question.trim_end()).prompt()?;
        Ok(Some(answer))
    }
}

/// First whitespace-delimited token of an answer
fn first_token(answer: &str) -> Option<&str> {
    answer.split_whitespace().next()
}

/// Interpret the mode selector answer; only `1` and `2` are accepted
pub fn parse_choice(answer: &str) -> Result<u8> {
    match first_token(answer).map(str::parse::<i64>) {
        Some(Ok(1)) => Ok(1),
        Some(Ok(2)) => Ok(2),
        _ => Err(HashForgeError::invalid_choice(answer.trim())),
    }
}

/// Interpret the requested uniform length, clamped to `1..=16`.
///
/// Negative and oversized numbers are out of range rather than invalid, so
/// `-1` ends up as the maximum length.
pub fn parse_length(answer: &str) -> Result<SearchMode> {
    let token = first_token(answer).ok_or_else(|| validation_error!("no length given"))?;
    let digits = token.strip_prefix(['+', '-']).unwrap_or(token);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(validation_error!(
            "length must be a whole number, got {:?}",
            token
        ));
    }
    let length = match token.parse::<u64>() {
        Ok(length) => length,
        Err(_) if token.starts_with('-') && digits.bytes().all(|b| b == b'0') => 0,
        Err(_) => u64::MAX,
    };
    if length > MAX_NAME_LENGTH as u64 || length == 0 {
        tracing::warn!(requested = length, "length out of range, clamping");
    }
    Ok(SearchMode::uniform(length))
}

/// Ask the setup questions and build the search mode
pub fn collect_mode<P: Prompter>(prompter: &mut P) -> Result<SearchMode> {
    prompter.say("Choose formatting option:")?;
    prompter.say("1. Custom format (000_name_000)")?;
    prompter.say("2. Complete random format")?;

    let answer = prompter
        .ask("Enter your choice (1 or 2): ")?
        .ok_or_else(|| HashForgeError::invalid_choice(""))?;

    let mode = match parse_choice(&answer)? {
        1 => {
            let question = format!(
                "Enter the name you are looking for (max {} characters): ",
                MAX_MIDDLE_LENGTH
            );
            loop {
                let answer = prompter
                    .ask(&question)?
                    .ok_or_else(|| HashForgeError::config("no name given"))?;
                if let Some(token) = first_token(&answer) {
                    if token.len() > MAX_MIDDLE_LENGTH {
                        tracing::warn!(name = token, "name too long, truncating");
                    }
                    break SearchMode::templated(token);
                }
            }
        }
        _ => {
            let question = format!(
                "Enter the desired length for random names (max {}): ",
                MAX_NAME_LENGTH
            );
            let answer = prompter
                .ask(&question)?
                .ok_or_else(|| HashForgeError::config("no length given"))?;
            parse_length(&answer)?
        }
    };

    tracing::info!(mode = %mode, "search mode selected");
    Ok(mode)
}
