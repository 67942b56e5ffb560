//! Line-oriented console I/O
//!
//! Wraps an input reader and an output writer so a session can run against
//! stdin/stdout or against in-memory buffers.

use std::fmt;
use std::io::{BufRead, Write};

use crate::error::LedgerResult;

/// Console used by a session
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Create a console over a reader and a writer
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Show a prompt and read one line
    ///
    /// Returns `None` once the input is exhausted. The line is returned
    /// without its trailing newline; any other whitespace is left for the
    /// caller to handle.
    pub fn prompt(&mut self, prompt: &str) -> LedgerResult<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }

        let line = line.strip_suffix('\n').unwrap_or(&line);
        let line = line.strip_suffix('\r').unwrap_or(line);
        Ok(Some(line.to_string()))
    }

    /// Write text as-is
    pub fn say(&mut self, text: &str) -> LedgerResult<()> {
        self.output.write_all(text.as_bytes())?;
        Ok(())
    }

    /// Report a recoverable error
    pub fn error(&mut self, err: impl fmt::Display) -> LedgerResult<()> {
        writeln!(self.output, "Error: {}", err)?;
        Ok(())
    }

    /// Consume the console and return the writer
    pub fn into_output(self) -> W {
        self.output
    }
}
