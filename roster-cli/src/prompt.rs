//! Line-oriented prompting over any `BufRead` / `Write` pair.

use std::fmt;
use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use colored::Colorize;

pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `label: ` and read one line, keeping it as typed apart from the
    /// line terminator.
    ///
    /// Returns `None` at end of input.
    pub fn ask(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{label}: ")?;
        self.output.flush()?;
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read from stdin")?;
        if read == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    pub fn say(&mut self, msg: impl fmt::Display) -> Result<()> {
        writeln!(self.output, "{msg}")?;
        Ok(())
    }

    pub fn success(&mut self, msg: impl fmt::Display) -> Result<()> {
        writeln!(self.output, "{} {msg}", "✓".green().bold())?;
        Ok(())
    }

    pub fn failure(&mut self, msg: impl fmt::Display) -> Result<()> {
        writeln!(self.output, "{} {}", "✗".red().bold(), msg.to_string().red())?;
        Ok(())
    }

    /// Outcome that is neither success nor failure (e.g. an idempotent no-op).
    pub fn notice(&mut self, msg: impl fmt::Display) -> Result<()> {
        writeln!(self.output, "{} {msg}", "•".yellow().bold())?;
        Ok(())
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}
