//! Sink implementations
//!
//! The factory functions return shareable handles ready to pass to
//! [`Logger::new`](crate::Logger::new).

pub mod composite;
pub mod console;
pub mod file;
pub mod memory;

pub use composite::CompositeSink;
pub use console::ConsoleSink;
pub use file::FileSink;
pub use memory::MemorySink;

pub use crate::core::Sink;

use std::path::PathBuf;
use std::sync::Arc;

/// Colorized standard output
pub fn console() -> Arc<dyn Sink> {
    Arc::new(ConsoleSink::new())
}

/// Plain lines appended to `path`; missing directories are created on write
pub fn file(path: impl Into<PathBuf>) -> Arc<dyn Sink> {
    Arc::new(FileSink::new(path))
}

/// Console first, then `path`
pub fn console_and_file(path: impl Into<PathBuf>) -> Arc<dyn Sink> {
    Arc::new(CompositeSink::console_and_file(path))
}
