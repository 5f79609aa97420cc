//! Line-oriented console I/O.
//!
//! The session talks to the player only through [`Console`], so tests can
//! drive a full game with [`ScriptedConsole`] instead of a terminal.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Prompt printed before every read.
pub const PROMPT: &str = "> ";

pub trait Console {
    /// Show one line of text to the player.
    fn print(&mut self, text: &str) -> io::Result<()>;

    /// Prompt and read one line without its terminator. `None` once input is
    /// closed.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// Split a command line into its first word and the rest, rejoined by
/// single spaces. Blank input yields `(None, None)`.
pub fn tokenize(line: &str) -> (Option<String>, Option<String>) {
    let mut words = line.split_whitespace();
    let Some(first) = words.next() else {
        return (None, None);
    };
    let rest: Vec<&str> = words.collect();
    let second = if rest.is_empty() {
        None
    } else {
        Some(rest.join(" "))
    };
    (Some(first.to_string()), second)
}

/// Standard input and output.
pub struct TerminalConsole {
    input: io::StdinLock<'static>,
    output: io::Stdout,
    echo_input: bool,
}

impl TerminalConsole {
    /// When stdin is not a terminal (piped script), each consumed line is
    /// echoed after its prompt so the transcript stays readable.
    pub fn new() -> Self {
        TerminalConsole {
            input: io::stdin().lock(),
            output: io::stdout(),
            echo_input: !atty::is(atty::Stream::Stdin),
        }
    }
}

impl Default for TerminalConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for TerminalConsole {
    fn print(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        let line = line.trim_end_matches(['\r', '\n']).to_string();
        if self.echo_input {
            writeln!(self.output, "{}", line)?;
        }
        Ok(Some(line))
    }
}

/// Feeds queued input lines and records everything printed.
#[derive(Debug, Default, Clone)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    transcript: Vec<String>,
}

impl ScriptedConsole {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedConsole {
            input: lines.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
        }
    }

    /// Queue more input after construction.
    pub fn push_input(&mut self, line: impl Into<String>) {
        self.input.push_back(line.into());
    }

    /// Every printed line, in order. Prompts are not recorded.
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    pub fn last_output(&self) -> Option<&str> {
        self.transcript.last().map(String::as_str)
    }

    /// Whether any printed line contains `needle`.
    pub fn saw(&self, needle: &str) -> bool {
        self.transcript.iter().any(|line| line.contains(needle))
    }

    pub fn pending_input(&self) -> usize {
        self.input.len()
    }
}

impl Console for ScriptedConsole {
    fn print(&mut self, text: &str) -> io::Result<()> {
        self.transcript.push(text.to_string());
        Ok(())
    }

    fn read_line(&mut self, _prompt: &str) -> io::Result<Option<String>> {
        Ok(self.input.pop_front())
    }
}
