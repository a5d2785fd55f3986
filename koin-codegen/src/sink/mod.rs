//! Text sinks receiving generated source.
//!
//! Generators never touch a sink directly; they go through a [`UnitWriter`],
//! which tags failures with the unit name and releases the sink on every
//! exit path. A unit that finishes is flushed and closed; a unit abandoned
//! by an error is released through [`CodeSink::abandon`] so that partial
//! output is never committed.

mod file;
mod memory;

pub use file::{DirSinkFactory, FileSink};
pub use memory::{MemorySinkFactory, StringSink};

use std::io;

use crate::error::{CodegenError, Result};

/// Destination for the text of one generated unit.
pub trait CodeSink {
    /// Appends `text` to the unit.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error; the sink must not be reused after.
    fn append_text(&mut self, text: &str) -> io::Result<()>;

    /// Pushes buffered text to the destination.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error.
    fn flush(&mut self) -> io::Result<()>;

    /// Completes the unit and releases the destination.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error.
    fn close(&mut self) -> io::Result<()>;

    /// Releases the destination without completing the unit.
    ///
    /// The default treats abandoning like closing; sinks that publish their
    /// output on close override it.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error.
    fn abandon(&mut self) -> io::Result<()> {
        self.close()
    }
}

impl<S: CodeSink + ?Sized> CodeSink for &mut S {
    fn append_text(&mut self, text: &str) -> io::Result<()> {
        (**self).append_text(text)
    }

    fn flush(&mut self) -> io::Result<()> {
        (**self).flush()
    }

    fn close(&mut self) -> io::Result<()> {
        (**self).close()
    }

    fn abandon(&mut self) -> io::Result<()> {
        (**self).abandon()
    }
}

/// Opens one sink per generated unit.
pub trait SinkFactory {
    /// Sink type handed to the generators.
    type Sink: CodeSink;

    /// Opens the sink for the unit stored as `file_name`.
    ///
    /// # Errors
    ///
    /// Returns [`CodegenError::Io`] when the destination cannot be created.
    fn open_sink(&mut self, file_name: &str) -> Result<Self::Sink>;

    /// Receives a sink after its unit was written and closed.
    fn complete(&mut self, _file_name: &str, _sink: Self::Sink) {}
}

/// Scoped handle over a sink for the duration of one unit.
pub struct UnitWriter<'a, S: CodeSink + ?Sized> {
    unit: &'a str,
    sink: &'a mut S,
    is_released: bool,
}

impl<'a, S: CodeSink + ?Sized> UnitWriter<'a, S> {
    /// Starts writing `unit` into `sink`.
    #[must_use]
    pub const fn open(unit: &'a str, sink: &'a mut S) -> Self {
        Self {
            unit,
            sink,
            is_released: false,
        }
    }

    /// Name of the unit being written.
    #[must_use]
    pub const fn unit(&self) -> &str {
        self.unit
    }

    /// Appends `text` to the unit.
    ///
    /// # Errors
    ///
    /// Returns [`CodegenError::Sink`] naming the unit.
    pub fn append(&mut self, text: &str) -> Result<()> {
        self.sink
            .append_text(text)
            .map_err(|source| self.sink_error(source))
    }

    /// Flushes and closes the sink.
    ///
    /// # Errors
    ///
    /// Returns [`CodegenError::Sink`] naming the unit; the sink is then
    /// abandoned when the writer drops.
    pub fn finish(mut self) -> Result<()> {
        self.sink.flush().map_err(|source| self.sink_error(source))?;
        self.sink.close().map_err(|source| self.sink_error(source))?;
        self.is_released = true;
        Ok(())
    }

    fn sink_error(&self, source: io::Error) -> CodegenError {
        CodegenError::Sink {
            unit: self.unit.to_owned(),
            source,
        }
    }
}

impl<S: CodeSink + ?Sized> Drop for UnitWriter<'_, S> {
    fn drop(&mut self) {
        if self.is_released {
            return;
        }
        if let Err(err) = self.sink.abandon() {
            tracing::debug!(unit = self.unit, error = %err, "failed to release abandoned sink");
        }
    }
}
