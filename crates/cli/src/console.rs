//! Line-oriented terminal I/O over any reader/writer pair.

use std::io::{self, BufRead, Write};

/// Reads trimmed lines and writes lines, prompts, and notices.
///
/// Generic so the command loop runs the same against stdin/stdout and
/// in-memory buffers.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Next input line without surrounding whitespace, or `None` once input
    /// is exhausted.
    ///
    /// Bytes that are not valid UTF-8 become U+FFFD instead of failing the read.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).trim().to_string()))
    }

    /// Print `label` without a newline, then read the answer.
    pub fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        self.read_line()
    }

    pub fn write_line(&mut self, line: impl core::fmt::Display) -> io::Result<()> {
        writeln!(self.output, "{line}")
    }

    pub fn blank_line(&mut self) -> io::Result<()> {
        writeln!(self.output)
    }

    /// Raw writer, for collaborators that print their own notices.
    pub fn writer(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}
