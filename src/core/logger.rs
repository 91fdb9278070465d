//! Main logger implementation
//!
//! Every emit call runs the same pipeline: filter on the logger's current
//! level, render through its current [`LogFormat`], then dispatch the line
//! together with the *requested* severity to the sink.
//!
//! Level and format are independent cells. A call reads them in separate
//! lock acquisitions, so a concurrent `set_level`/`set_format` may be observed
//! by one read and not the other. That relaxed view is acceptable for logging;
//! the cells themselves are never torn.

use super::{
    factory::LoggerFactory,
    format::LogFormat,
    metrics::LoggerMetrics,
    severity::Severity,
    sink::{emit_isolated, Sink},
};
use crate::sinks::ConsoleSink;
use chrono::{DateTime, Local};
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

/// Wall-clock source used for the `TIME` token
pub type Clock = Arc<dyn Fn() -> DateTime<Local> + Send + Sync>;

pub struct Logger {
    name: String,
    level: RwLock<Severity>,
    format: RwLock<LogFormat>,
    sink: Arc<dyn Sink>,
    clock: Clock,
    metrics: LoggerMetrics,
}

impl Logger {
    /// Create a logger with the process-wide default level and format.
    ///
    /// A `None` sink resolves to a [`ConsoleSink`].
    ///
    /// # Example
    ///
    /// ```
    /// use wlog::Logger;
    ///
    /// let logger = Logger::new("SERVER", None);
    /// logger.info("listening");
    /// ```
    #[must_use]
    pub fn new(name: impl Into<String>, sink: Option<Arc<dyn Sink>>) -> Self {
        LoggerFactory::global().logger(name, sink)
    }

    /// Create a builder seeded with the process-wide defaults
    ///
    /// # Example
    /// ```
    /// use wlog::prelude::*;
    ///
    /// let logger = Logger::builder("WORKER")
    ///     .level(Severity::Debug)
    ///     .format(LogFormat::LevelNameTime)
    ///     .sink(ConsoleSink::with_colors(false))
    ///     .build();
    /// logger.debug("ready");
    /// ```
    #[must_use]
    pub fn builder(name: impl Into<String>) -> LoggerBuilder {
        LoggerFactory::global().builder(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> Severity {
        *self.level.read()
    }

    pub fn format(&self) -> LogFormat {
        *self.format.read()
    }

    pub fn set_level(&self, level: Severity) {
        *self.level.write() = level;
    }

    pub fn set_format(&self, format: LogFormat) {
        *self.format.write() = format;
    }

    /// The sink this logger dispatches to
    pub fn sink(&self) -> &Arc<dyn Sink> {
        &self.sink
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Whether a line at `level` would currently be dispatched
    #[inline]
    pub fn is_enabled(&self, level: Severity) -> bool {
        self.level().admits(level)
    }

    /// Render a line with the current format without dispatching it
    pub fn render(&self, level: Severity, message: impl fmt::Display) -> String {
        self.format().render_with(level, &self.name, message, || (self.clock)())
    }

    /// Log `message` at `level`, followed by a newline
    pub fn log(&self, level: Severity, message: impl fmt::Display) {
        self.emit(level, message, true);
    }

    /// Log pre-formatted arguments at `level`. No newline is appended.
    pub fn logf(&self, level: Severity, args: fmt::Arguments<'_>) {
        self.emit(level, args, false);
    }

    fn emit(&self, level: Severity, message: impl fmt::Display, newline: bool) {
        if !self.is_enabled(level) {
            self.metrics.record_filtered();
            return;
        }

        let mut line = self.render(level, message);
        if newline {
            line.push('\n');
        }

        if emit_isolated(self.sink.as_ref(), level, &line) {
            self.metrics.record_dispatched();
        } else {
            self.metrics.record_sink_panic();
        }
    }

    #[inline]
    pub fn debug(&self, message: impl fmt::Display) {
        self.log(Severity::Debug, message);
    }

    #[inline]
    pub fn info(&self, message: impl fmt::Display) {
        self.log(Severity::Info, message);
    }

    #[inline]
    pub fn warn(&self, message: impl fmt::Display) {
        self.log(Severity::Warn, message);
    }

    #[inline]
    pub fn error(&self, message: impl fmt::Display) {
        self.log(Severity::Error, message);
    }

    #[inline]
    pub fn debugf(&self, args: fmt::Arguments<'_>) {
        self.logf(Severity::Debug, args);
    }

    #[inline]
    pub fn infof(&self, args: fmt::Arguments<'_>) {
        self.logf(Severity::Info, args);
    }

    #[inline]
    pub fn warnf(&self, args: fmt::Arguments<'_>) {
        self.logf(Severity::Warn, args);
    }

    #[inline]
    pub fn errorf(&self, args: fmt::Arguments<'_>) {
        self.logf(Severity::Error, args);
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("level", &self.level())
            .field("format", &self.format())
            .field("sink", &self.sink.name())
            .finish()
    }
}

/// Builder for constructing a Logger with a fluent API
///
/// Unset fields fall back to the defaults of the factory that created the
/// builder, a console sink and the local wall clock.
pub struct LoggerBuilder {
    name: String,
    level: Severity,
    format: LogFormat,
    sink: Option<Arc<dyn Sink>>,
    clock: Option<Clock>,
}

impl LoggerBuilder {
    pub(crate) fn new(name: impl Into<String>, level: Severity, format: LogFormat) -> Self {
        Self {
            name: name.into(),
            level,
            format,
            sink: None,
            clock: None,
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: Severity) -> Self {
        self.level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn sink<S: Sink + 'static>(mut self, sink: S) -> Self {
        self.sink = Some(Arc::new(sink));
        self
    }

    /// Use a sink that other loggers may also hold
    #[must_use = "builder methods return a new value"]
    pub fn shared_sink(mut self, sink: Arc<dyn Sink>) -> Self {
        self.sink = Some(sink);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub(crate) fn maybe_sink(mut self, sink: Option<Arc<dyn Sink>>) -> Self {
        self.sink = sink;
        self
    }

    /// Replace the wall clock, mostly useful to pin the `TIME` token in tests
    #[must_use = "builder methods return a new value"]
    pub fn clock(mut self, clock: Clock) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn build(self) -> Logger {
        Logger {
            name: self.name,
            level: RwLock::new(self.level),
            format: RwLock::new(self.format),
            sink: self.sink.unwrap_or_else(|| Arc::new(ConsoleSink::new())),
            clock: self.clock.unwrap_or_else(|| Arc::new(Local::now)),
            metrics: LoggerMetrics::new(),
        }
    }
}
