//! # wlog
//!
//! A small leveled logging facade. A named [`Logger`] filters messages by
//! [`Severity`], lays them out with a [`LogFormat`] template and hands the
//! rendered line to a [`Sink`].
//!
//! ## Features
//!
//! - **Closed format set**: twelve `LEVEL`/`NAME`/`TIME` layouts, no format-string injection
//! - **Pluggable sinks**: colored console, appending file, daily file, composite fan-out, closures
//! - **Never fails the caller**: sink errors and panics are contained and reported on stderr
//! - **Thread safe**: loggers and sinks are `Send + Sync` and can be shared
//!
//! ```
//! use wlog::prelude::*;
//!
//! let logger = Logger::new("SERVER", None);
//! logger.set_format(LogFormat::LevelNameTime);
//! logger.info("started");
//! logger.infof(format_args!("listening on {}\n", 8080));
//! ```

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        set_default_format, set_default_level, Clock, LogFormat, Logger, LoggerBuilder,
        LoggerError, LoggerFactory, LoggerMetrics, Result, Severity, Sink,
    };
    pub use crate::sinks::{CompositeSink, ConsoleSink, FileSink, MemorySink};
}

pub use crate::core::{
    set_default_format, set_default_level, Clock, LogFormat, Logger, LoggerBuilder, LoggerError,
    LoggerFactory, LoggerMetrics, Result, Severity, Sink, Token,
};
pub use sinks::{CompositeSink, ConsoleSink, FileSink, MemorySink};
