//! printf-style logging macros.
//!
//! Each macro expands to the matching `*f` method with `format_args!`, so the
//! message is only formatted if the logger lets the line through. Like the
//! methods, they do not append a newline; put one in the format string.
//!
//! # Examples
//!
//! ```
//! use wlog::prelude::*;
//! use wlog::{errorf, infof};
//!
//! let logger = Logger::new("SERVER", None);
//!
//! let port = 8080;
//! infof!(logger, "listening on port {}\n", port);
//! errorf!(logger, "{} failed\n", "task");
//! ```

/// Log a formatted message at an explicit severity.
///
/// # Examples
///
/// ```
/// # use wlog::prelude::*;
/// # let logger = Logger::new("app", None);
/// use wlog::logf;
/// logf!(logger, Severity::Warn, "retry {} of {}\n", 1, 3);
/// ```
#[macro_export]
macro_rules! logf {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.logf($level, format_args!($($arg)+))
    };
}

/// Log a formatted debug-level message.
#[macro_export]
macro_rules! debugf {
    ($logger:expr, $($arg:tt)+) => {
        $crate::logf!($logger, $crate::Severity::Debug, $($arg)+)
    };
}

/// Log a formatted info-level message.
#[macro_export]
macro_rules! infof {
    ($logger:expr, $($arg:tt)+) => {
        $crate::logf!($logger, $crate::Severity::Info, $($arg)+)
    };
}

/// Log a formatted warning-level message.
#[macro_export]
macro_rules! warnf {
    ($logger:expr, $($arg:tt)+) => {
        $crate::logf!($logger, $crate::Severity::Warn, $($arg)+)
    };
}

/// Log a formatted error-level message.
///
/// # Examples
///
/// ```
/// # use wlog::prelude::*;
/// # let logger = Logger::new("app", None);
/// use wlog::errorf;
/// errorf!(logger, "code: {}\n", 500);
/// ```
#[macro_export]
macro_rules! errorf {
    ($logger:expr, $($arg:tt)+) => {
        $crate::logf!($logger, $crate::Severity::Error, $($arg)+)
    };
}
