//! Error types for the logger system
//!
//! Emitting a line never returns an error to the caller. These errors surface
//! from sink internals and from parsing, and the sinks report them on stderr.

use std::path::{Path, PathBuf};

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error with context
    #[error("IO error while {operation}: {source}")]
    IoOperation {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// File sink error with path
    #[error("File sink error for '{}': {source}", path.display())]
    FileSink {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Log directory could not be created
    #[error("Failed to create log directory '{}': {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File lock error
    #[error("Failed to acquire file lock on '{}': {source}", path.display())]
    FileLock {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Unknown severity name
    #[error("Invalid log level: '{name}'")]
    InvalidLevel { name: String },
}

impl LoggerError {
    /// Create an IO operation error with context
    pub fn io_operation(operation: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            source,
        }
    }

    pub fn file_sink(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        LoggerError::FileSink {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn create_dir(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        LoggerError::CreateDir {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn file_lock(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        LoggerError::FileLock {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn invalid_level(name: impl Into<String>) -> Self {
        LoggerError::InvalidLevel { name: name.into() }
    }
}
