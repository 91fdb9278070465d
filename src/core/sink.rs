//! Sink trait for rendered log lines

use super::severity::Severity;
use std::any::Any;
use std::fmt;
use std::io::Write;
use std::panic::{catch_unwind, AssertUnwindSafe};

/// Destination for fully rendered log lines.
///
/// `emit` is infallible: a sink recovers from its own failures and reports
/// them on a fallback path. Sinks take `&self` so one sink can be shared by
/// several loggers behind an `Arc`.
pub trait Sink: Send + Sync {
    /// Receive a rendered `line` that was logged at `severity`
    fn emit(&self, severity: Severity, line: &str);

    fn name(&self) -> &str {
        "custom"
    }
}

impl<F> Sink for F
where
    F: Fn(Severity, &str) + Send + Sync,
{
    fn emit(&self, severity: Severity, line: &str) {
        self(severity, line)
    }

    fn name(&self) -> &str {
        "fn"
    }
}

/// Write one diagnostic line to `out`, ignoring write failures of `out`
/// itself (closed stderr, broken pipe).
pub(crate) fn report_to<W: Write + ?Sized>(out: &mut W, args: fmt::Arguments<'_>) {
    let _ = writeln!(out, "{}", args);
}

/// Call `sink.emit`, containing any panic it raises.
///
/// Returns `false` if the sink panicked; the panic is reported on stderr.
pub(crate) fn emit_isolated(sink: &dyn Sink, severity: Severity, line: &str) -> bool {
    emit_isolated_to(sink, severity, line, &mut std::io::stderr())
}

fn emit_isolated_to<W: Write + ?Sized>(
    sink: &dyn Sink,
    severity: Severity,
    line: &str,
    diagnostics: &mut W,
) -> bool {
    match catch_unwind(AssertUnwindSafe(|| sink.emit(severity, line))) {
        Ok(()) => true,
        Err(panic_info) => {
            report_to(
                diagnostics,
                format_args!(
                    "[LOGGER CRITICAL] Sink '{}' panicked: {}. Logging continues.",
                    sink.name(),
                    panic_message(&*panic_info)
                ),
            );
            false
        }
    }
}

fn panic_message(panic_info: &(dyn Any + Send)) -> String {
    if let Some(s) = panic_info.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic_info.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::io;
    use std::sync::Arc;

    /// Writer whose every write fails like a closed pipe
    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn test_closure_sink() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_clone = Arc::clone(&seen);
        let sink = move |severity: Severity, line: &str| {
            seen_clone.lock().push((severity, line.to_string()));
        };

        sink.emit(Severity::Warn, "careful\n");
        assert_eq!(Sink::name(&sink), "fn");
        assert_eq!(*seen.lock(), vec![(Severity::Warn, "careful\n".to_string())]);
    }

    #[test]
    fn test_emit_isolated_contains_panic() {
        let panicking = |_: Severity, _: &str| panic!("sink exploded");
        assert!(!emit_isolated(&panicking, Severity::Error, "boom"));

        let quiet = |_: Severity, _: &str| {};
        assert!(emit_isolated(&quiet, Severity::Error, "fine"));
    }

    #[test]
    fn test_panic_report_text() {
        let panicking = |_: Severity, _: &str| panic!("sink exploded");
        let mut diagnostics = Vec::new();

        assert!(!emit_isolated_to(&panicking, Severity::Error, "boom", &mut diagnostics));
        assert_eq!(
            String::from_utf8(diagnostics).unwrap(),
            "[LOGGER CRITICAL] Sink 'fn' panicked: sink exploded. Logging continues.\n"
        );
    }

    #[test]
    fn test_report_survives_broken_diagnostics() {
        report_to(&mut BrokenPipe, format_args!("[LOGGER ERROR] {}", "lost"));

        let panicking = |_: Severity, _: &str| panic!("sink exploded");
        let result = std::panic::catch_unwind(|| {
            emit_isolated_to(&panicking, Severity::Error, "boom", &mut BrokenPipe)
        });
        assert_eq!(result.ok(), Some(false));
    }
}
