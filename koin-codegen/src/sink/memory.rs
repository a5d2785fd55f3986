//! In-memory sinks used for string rendering and tests.

use std::io;

use super::{CodeSink, SinkFactory};
use crate::error::Result;

/// Sink collecting generated text into a `String`.
#[derive(Debug, Default)]
pub struct StringSink {
    buffer: String,
    is_closed: bool,
}

impl StringSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Text appended so far.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Whether the sink has been closed.
    #[must_use]
    pub const fn is_closed(&self) -> bool {
        self.is_closed
    }

    /// Consumes the sink, returning its text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.buffer
    }
}

impl CodeSink for StringSink {
    fn append_text(&mut self, text: &str) -> io::Result<()> {
        if self.is_closed {
            return Err(io::Error::other("sink already closed"));
        }
        self.buffer.push_str(text);
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn close(&mut self) -> io::Result<()> {
        self.is_closed = true;
        Ok(())
    }
}

/// Factory keeping every completed unit in memory, in completion order.
#[derive(Debug, Default)]
pub struct MemorySinkFactory {
    units: Vec<(String, String)>,
}

impl MemorySinkFactory {
    /// Creates an empty factory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Completed units as `(file name, text)` pairs.
    #[must_use]
    pub fn units(&self) -> &[(String, String)] {
        &self.units
    }

    /// Text of the completed unit stored as `file_name`.
    #[must_use]
    pub fn unit(&self, file_name: &str) -> Option<&str> {
        self.units
            .iter()
            .find(|(name, _)| name == file_name)
            .map(|(_, text)| text.as_str())
    }
}

impl SinkFactory for MemorySinkFactory {
    type Sink = StringSink;

    fn open_sink(&mut self, _file_name: &str) -> Result<Self::Sink> {
        Ok(StringSink::new())
    }

    fn complete(&mut self, file_name: &str, sink: Self::Sink) {
        self.units.push((file_name.to_owned(), sink.into_string()));
    }
}
