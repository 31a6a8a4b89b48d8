//! Line sources feeding the session.
//!
//! The session pulls one candidate card number at a time through
//! [`LineSource`]. [`ReaderSource`] wraps any buffered reader (stdin in
//! the CLI); [`ScriptedLines`] replays a fixed list, for tests and batch use.

use std::collections::VecDeque;
use std::io::{self, BufRead};

/// A blocking source of input lines.
pub trait LineSource {
    /// Returns the next line without its line terminator, or `None` at
    /// end of input.
    fn next_line(&mut self) -> io::Result<Option<String>>;
}

/// Reads lines from a buffered reader.
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD, so such a line
/// reaches the session and is rejected as malformed instead of failing the
/// read.
#[derive(Debug)]
pub struct ReaderSource<R> {
    reader: R,
}

impl<R: BufRead> ReaderSource<R> {
    /// Wraps a buffered reader.
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for ReaderSource<R> {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }

        while matches!(buf.last(), Some(b'\n' | b'\r')) {
            buf.pop();
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }
}

/// Replays a fixed sequence of lines, then reports end of input.
#[derive(Debug, Clone, Default)]
pub struct ScriptedLines {
    lines: VecDeque<String>,
}

impl ScriptedLines {
    /// Creates a source that yields `lines` in order.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the number of lines not yet consumed.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl LineSource for ScriptedLines {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}
