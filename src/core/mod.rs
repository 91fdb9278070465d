//! Core logger types and traits

pub mod error;
pub mod factory;
pub mod format;
pub mod logger;
pub mod metrics;
pub mod severity;
pub mod sink;

pub use error::{LoggerError, Result};
pub use factory::{set_default_format, set_default_level, LoggerFactory};
pub use format::{LogFormat, Token};
pub use logger::{Clock, Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use severity::Severity;
pub use sink::Sink;
