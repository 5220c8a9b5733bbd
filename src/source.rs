//! Input sources.
//!
//! A file or the process's standard input, behind one type. The file handle
//! lives inside the `InputSource` value, so it is closed when the value drops
//! on every exit path.

use crate::error::{Result, TopError};
use log::debug;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read, StdinLock};
use std::path::Path;

/// Where records are read from.
#[derive(Debug)]
pub enum InputSource {
    /// A file opened from a path given on the command line.
    File(BufReader<File>),

    /// Standard input, read until end-of-stream.
    Stdin(StdinLock<'static>),
}

impl InputSource {
    /// Opens `path` if one is given, otherwise locks standard input.
    ///
    /// A path that cannot be opened is an [`TopError::InvalidArgument`]:
    /// nothing has been read yet, and the run should not start.
    pub fn open(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::file(path),
            None => Ok(Self::stdin()),
        }
    }

    /// Opens a file source.
    pub fn file(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| {
            TopError::InvalidArgument(format!("cannot open {}: {}", path.display(), e))
        })?;
        debug!("Reading records from {}", path.display());
        Ok(InputSource::File(BufReader::new(file)))
    }

    /// Standard input source.
    pub fn stdin() -> Self {
        debug!("Reading records from standard input");
        InputSource::Stdin(io::stdin().lock())
    }
}

impl Read for InputSource {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            InputSource::File(reader) => reader.read(buf),
            InputSource::Stdin(reader) => reader.read(buf),
        }
    }
}

impl BufRead for InputSource {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        match self {
            InputSource::File(reader) => reader.fill_buf(),
            InputSource::Stdin(reader) => reader.fill_buf(),
        }
    }

    fn consume(&mut self, amt: usize) {
        match self {
            InputSource::File(reader) => reader.consume(amt),
            InputSource::Stdin(reader) => reader.consume(amt),
        }
    }
}
