//! File sinks writing generated units under an output directory.

use std::io::{self, BufWriter, Write};

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::fs_utf8::{Dir, File, OpenOptions};

use super::{CodeSink, SinkFactory};
use crate::error::{CodegenError, Result};
use crate::fs_helpers::ensure_dir;

/// Sink writing one unit to `<name>` via a `.<name>.partial` staging file.
///
/// The staging file is renamed into place on [`CodeSink::close`]; abandoning
/// or dropping an unfinished sink removes it.
#[derive(Debug)]
pub struct FileSink {
    dir: Dir,
    file_name: String,
    partial_name: String,
    file: Option<BufWriter<File>>,
    is_committed: bool,
}

impl FileSink {
    /// Creates the staging file for `file_name` inside `dir`.
    ///
    /// # Errors
    ///
    /// Returns the I/O error raised while creating the staging file.
    pub fn create(dir: Dir, file_name: &str) -> io::Result<Self> {
        let partial_name = format!(".{file_name}.partial");
        let file = dir.open_with(
            &partial_name,
            OpenOptions::new().write(true).create(true).truncate(true),
        )?;
        Ok(Self {
            dir,
            file_name: file_name.to_owned(),
            partial_name,
            file: Some(BufWriter::new(file)),
            is_committed: false,
        })
    }

    fn writer(&mut self) -> io::Result<&mut BufWriter<File>> {
        self.file
            .as_mut()
            .ok_or_else(|| io::Error::other("sink already released"))
    }

    fn remove_partial(&self) -> io::Result<()> {
        match self.dir.remove_file(&self.partial_name) {
            Err(err) if err.kind() != io::ErrorKind::NotFound => Err(err),
            _ => Ok(()),
        }
    }
}

impl CodeSink for FileSink {
    fn append_text(&mut self, text: &str) -> io::Result<()> {
        self.writer()?.write_all(text.as_bytes())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer()?.flush()
    }

    fn close(&mut self) -> io::Result<()> {
        let Some(writer) = self.file.take() else {
            return Err(io::Error::other("sink already released"));
        };
        let file = writer.into_inner().map_err(io::IntoInnerError::into_error)?;
        file.sync_all()?;
        drop(file);
        self.dir
            .rename(&self.partial_name, &self.dir, &self.file_name)?;
        self.is_committed = true;
        Ok(())
    }

    fn abandon(&mut self) -> io::Result<()> {
        drop(self.file.take());
        if self.is_committed {
            return Ok(());
        }
        self.remove_partial()
    }
}

impl Drop for FileSink {
    fn drop(&mut self) {
        if self.is_committed {
            return;
        }
        if let Err(err) = self.abandon() {
            tracing::debug!(
                file = %self.file_name,
                error = %err,
                "failed to remove partial output"
            );
        }
    }
}

/// Factory creating a [`FileSink`] per unit inside one output directory.
#[derive(Debug)]
pub struct DirSinkFactory {
    root: Utf8PathBuf,
    dir: Dir,
}

impl DirSinkFactory {
    /// Opens `out_dir`, creating it when missing.
    ///
    /// # Errors
    ///
    /// Returns [`CodegenError::Io`] when the directory cannot be created or
    /// opened.
    pub fn create(out_dir: &Utf8Path) -> Result<Self> {
        let dir = ensure_dir(out_dir)?;
        Ok(Self {
            root: out_dir.to_path_buf(),
            dir,
        })
    }

    /// Output directory path.
    #[must_use]
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }
}

impl SinkFactory for DirSinkFactory {
    type Sink = FileSink;

    fn open_sink(&mut self, file_name: &str) -> Result<Self::Sink> {
        let path = self.root.join(file_name);
        let dir = self.dir.try_clone().map_err(|io_err| CodegenError::Io {
            path: self.root.clone(),
            source: io_err,
        })?;
        FileSink::create(dir, file_name).map_err(|io_err| CodegenError::Io {
            path,
            source: io_err,
        })
    }
}
