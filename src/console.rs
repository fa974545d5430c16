use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};

/// Source of player input, one prompted line at a time
pub trait LineReader {
    /// Shows `prompt` and blocks until a line is entered. Returns `None` once the
    /// input is exhausted.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// Where the board and messages are drawn
pub trait Screen {
    fn clear(&mut self) -> io::Result<()>;
    fn write_lines(&mut self, lines: &[&str]) -> io::Result<()>;
}

/// A terminal: line input from `R`, screen output to `W`. Defaults to stdin/stdout.
pub struct Terminal<R = StdinLock<'static>, W = Stdout> {
    input: R,
    output: W,
}

impl Terminal {
    pub fn new() -> Self {
        Self::with_io(io::stdin().lock(), io::stdout())
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn with_io(input: R, output: W) -> Self {
        Self { input, output }
    }

    #[cfg(test)]
    pub(crate) fn output(&self) -> &W {
        &self.output
    }
}

impl<R: BufRead, W: Write> LineReader for Terminal<R, W> {
    /// Bytes that are not valid UTF-8 are replaced rather than rejected, so a
    /// garbled line is just another unrecognised command.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }

        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }
}

impl<R: BufRead, W: Write> Screen for Terminal<R, W> {
    fn clear(&mut self) -> io::Result<()> {
        execute!(self.output, Clear(ClearType::All), MoveTo(0, 0))
    }

    fn write_lines(&mut self, lines: &[&str]) -> io::Result<()> {
        for line in lines {
            writeln!(self.output, "{}", line)?;
        }
        self.output.flush()
    }
}
