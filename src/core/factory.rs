//! Default level and format for newly built loggers
//!
//! A [`LoggerFactory`] holds the two defaults a logger copies at construction.
//! Changing a default never touches loggers that already exist. The
//! process-wide instance behind [`LoggerFactory::global`] backs
//! [`Logger::new`](super::Logger::new); tests and embedded subsystems can build
//! their own factories instead of mutating shared state.

use super::{
    format::LogFormat,
    logger::{Logger, LoggerBuilder},
    severity::Severity,
    sink::Sink,
};
use parking_lot::{const_rwlock, RwLock};
use std::sync::Arc;

/// Level new loggers start with unless configured otherwise
pub const DEFAULT_LEVEL: Severity = Severity::Info;

/// Format new loggers start with unless configured otherwise
pub const DEFAULT_FORMAT: LogFormat = LogFormat::LevelName;

static GLOBAL: LoggerFactory = LoggerFactory::with_defaults(DEFAULT_LEVEL, DEFAULT_FORMAT);

#[derive(Debug)]
pub struct LoggerFactory {
    default_level: RwLock<Severity>,
    default_format: RwLock<LogFormat>,
}

impl LoggerFactory {
    pub const fn new() -> Self {
        Self::with_defaults(DEFAULT_LEVEL, DEFAULT_FORMAT)
    }

    pub const fn with_defaults(level: Severity, format: LogFormat) -> Self {
        Self {
            default_level: const_rwlock(level),
            default_format: const_rwlock(format),
        }
    }

    /// The process-wide factory used by [`Logger::new`]
    pub fn global() -> &'static LoggerFactory {
        &GLOBAL
    }

    pub fn default_level(&self) -> Severity {
        *self.default_level.read()
    }

    pub fn default_format(&self) -> LogFormat {
        *self.default_format.read()
    }

    /// Affects only loggers built after this call
    pub fn set_default_level(&self, level: Severity) {
        *self.default_level.write() = level;
    }

    /// Affects only loggers built after this call
    pub fn set_default_format(&self, format: LogFormat) {
        *self.default_format.write() = format;
    }

    /// Build a logger from the current defaults; `None` means console output
    #[must_use]
    pub fn logger(&self, name: impl Into<String>, sink: Option<Arc<dyn Sink>>) -> Logger {
        self.builder(name).maybe_sink(sink).build()
    }

    #[must_use]
    pub fn builder(&self, name: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder::new(name, self.default_level(), self.default_format())
    }
}

impl Default for LoggerFactory {
    fn default() -> Self {
        Self::new()
    }
}

/// Set the default level of the process-wide factory
pub fn set_default_level(level: Severity) {
    GLOBAL.set_default_level(level);
}

/// Set the default format of the process-wide factory
pub fn set_default_format(format: LogFormat) {
    GLOBAL.set_default_format(format);
}
