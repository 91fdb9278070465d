//! File sink implementation
//!
//! Each line is written in its own open/lock/write/close cycle, so no handle
//! outlives a call and any number of sinks may target the same file.

use crate::core::sink::report_to;
use crate::core::{LoggerError, Result, Severity, Sink};
use chrono::Local;
use fs2::FileExt;
use parking_lot::Mutex;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Target {
    /// Always the same file
    Fixed(PathBuf),
    /// `<dir>/<YYYY-MM-DD>.log`, resolved per write with the local date
    Daily(PathBuf),
}

/// Appends plain, uncolored lines to a file.
///
/// Failures never reach the logging call: they are printed to stderr and the
/// line is lost.
#[derive(Debug)]
pub struct FileSink {
    target: Target,
    write_lock: Mutex<()>,
}

impl FileSink {
    /// Append to `path`, creating missing parent directories on write
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use wlog::sinks::FileSink;
    /// use wlog::{Severity, Sink};
    ///
    /// let sink = FileSink::new("logs/app.log");
    /// sink.emit(Severity::Info, "[INFO ] started\n");
    /// ```
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_target(Target::Fixed(path.into()))
    }

    /// Append to a file per local calendar day inside `dir`
    pub fn daily(dir: impl Into<PathBuf>) -> Self {
        Self::with_target(Target::Daily(dir.into()))
    }

    fn with_target(target: Target) -> Self {
        Self {
            target,
            write_lock: Mutex::new(()),
        }
    }

    /// The file the next line would be written to
    pub fn path(&self) -> PathBuf {
        match &self.target {
            Target::Fixed(path) => path.clone(),
            Target::Daily(dir) => dir.join(format!("{}.log", Local::now().format("%Y-%m-%d"))),
        }
    }

    /// Append `line` verbatim
    pub fn write_line(&self, line: &str) -> Result<()> {
        let path = self.path();
        let _guard = self.write_lock.lock();

        ensure_parent(&path)?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| LoggerError::file_sink(&path, e))?;

        // Advisory lock against other processes; released when the handle closes
        FileExt::lock_exclusive(&file).map_err(|e| LoggerError::file_lock(&path, e))?;
        file.write_all(line.as_bytes())
            .map_err(|e| LoggerError::io_operation(format!("writing '{}'", path.display()), e))?;
        Ok(())
    }

    /// Append `line`, reporting a failure to `diagnostics` instead of returning it
    pub(crate) fn write_or_report<W: Write + ?Sized>(&self, line: &str, diagnostics: &mut W) {
        if let Err(e) = self.write_line(line) {
            report_to(diagnostics, format_args!("[LOGGER ERROR] {}", e));
        }
    }
}

fn ensure_parent(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.is_dir() => {
            fs::create_dir_all(parent).map_err(|e| LoggerError::create_dir(parent, e))
        }
        _ => Ok(()),
    }
}

impl Sink for FileSink {
    fn emit(&self, _severity: Severity, line: &str) {
        self.write_or_report(line, &mut std::io::stderr());
    }

    fn name(&self) -> &str {
        "file"
    }
}
