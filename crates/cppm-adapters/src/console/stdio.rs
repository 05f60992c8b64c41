//! Line-oriented console over any reader/writer pair.

use std::io::{self, BufRead, Write};

use cppm_core::{
    application::{
        ApplicationError,
        ports::{Console, Notice},
    },
    error::{CppmError, CppmResult},
};

/// Prompts on `writer`, reads answers from `reader`.
///
/// Production code wraps `stdin().lock()` and `stdout()`; tests can use byte
/// slices and `Vec<u8>`.
#[derive(Debug)]
pub struct StdioConsole<R, W> {
    reader: R,
    writer: W,
}

impl StdioConsole<io::StdinLock<'static>, io::Stdout> {
    /// Console bound to the process' standard streams.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> StdioConsole<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Give back the writer (tests inspect what was printed).
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> Console for StdioConsole<R, W> {
    fn read_line(&mut self, prompt: &str) -> CppmResult<Option<String>> {
        self.writer
            .write_all(prompt.as_bytes())
            .and_then(|()| self.writer.flush())
            .map_err(console_error)?;

        // Invalid UTF-8 is replaced, never an error.
        let mut raw = Vec::new();
        let read = self
            .reader
            .read_until(b'\n', &mut raw)
            .map_err(console_error)?;
        if read == 0 {
            return Ok(None);
        }

        let line = String::from_utf8_lossy(&raw);
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    fn report(&mut self, notice: Notice) -> CppmResult<()> {
        let written = match &notice {
            Notice::Info(msg) => writeln!(self.writer, "{msg}"),
            Notice::Error(msg) => writeln!(self.writer, "Error: {msg}"),
        };
        written
            .and_then(|()| self.writer.flush())
            .map_err(console_error)
    }
}

fn console_error(e: io::Error) -> CppmError {
    ApplicationError::ConsoleError {
        reason: e.to_string(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_lines_without_terminators() {
        let mut console = StdioConsole::new("class A\r\n\nlast".as_bytes(), Vec::new());

        assert_eq!(console.read_line("> ").unwrap().as_deref(), Some("class A"));
        assert_eq!(console.read_line("> ").unwrap().as_deref(), Some(""));
        assert_eq!(console.read_line("> ").unwrap().as_deref(), Some("last"));
        assert_eq!(console.read_line("> ").unwrap(), None);

        let printed = String::from_utf8(console.into_writer()).unwrap();
        assert_eq!(printed, "> > > > ");
    }

    #[test]
    fn invalid_utf8_is_replaced_and_next_line_still_read() {
        let input: &[u8] = b"function f\xff\nquit\n";
        let mut console = StdioConsole::new(input, Vec::new());

        assert_eq!(
            console.read_line("> ").unwrap().as_deref(),
            Some("function f\u{fffd}")
        );
        assert_eq!(console.read_line("> ").unwrap().as_deref(), Some("quit"));
    }

    #[test]
    fn keeps_inner_and_leading_whitespace() {
        let mut console = StdioConsole::new("  x  unsigned int \n".as_bytes(), Vec::new());
        assert_eq!(
            console.read_line("").unwrap().as_deref(),
            Some("  x  unsigned int ")
        );
    }

    #[test]
    fn notices_are_written_on_their_own_line() {
        let mut console = StdioConsole::new(io::empty(), Vec::new());
        console.report(Notice::info("Created a.cpp")).unwrap();
        console.report(Notice::error("bad input")).unwrap();

        let printed = String::from_utf8(console.into_writer()).unwrap();
        assert_eq!(printed, "Created a.cpp\nError: bad input\n");
    }
}
