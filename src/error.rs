//! Error types for top-records.

use thiserror::Error;

/// Result type alias for selector and runner operations
pub type Result<T> = std::result::Result<T, TopError>;

/// Errors that can occur while selecting the largest records.
#[derive(Error, Debug)]
pub enum TopError {
    /// Failed to read the input or write the output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Bad record count or unreadable input path
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A line that is not `<id> <value>`
    #[error("Malformed record at line {line}: {message}")]
    MalformedRecord { line: usize, message: String },
}

impl TopError {
    /// Process exit code for this error.
    ///
    /// Argument problems share clap's usage exit code; failures during the
    /// pass over the input exit with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            TopError::InvalidArgument(_) => 2,
            TopError::Io(_) | TopError::MalformedRecord { .. } => 1,
        }
    }
}
