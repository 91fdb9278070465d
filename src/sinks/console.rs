//! Console sink implementation

use crate::core::{Result, Severity, Sink};
use std::io::Write;

/// ANSI sequence restoring the default terminal color
pub const RESET: &str = "\u{1b}[0m";

/// Writes lines to standard output wrapped in the severity's color.
///
/// The hosting process is expected to have a terminal that interprets ANSI
/// escape sequences. Write failures are ignored.
#[derive(Debug, Clone)]
pub struct ConsoleSink {
    use_colors: bool,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    pub fn uses_colors(&self) -> bool {
        self.use_colors
    }

    /// `<color><line><reset>`, or the bare line when colors are off
    pub fn paint(&self, severity: Severity, line: &str) -> String {
        match severity.color() {
            Some(color) if self.use_colors => {
                format!("\u{1b}[{}m{}{}", color.to_fg_str(), line, RESET)
            }
            _ => line.to_string(),
        }
    }

    fn write_line(&self, severity: Severity, line: &str) -> Result<()> {
        let painted = self.paint(severity, line);
        // One locked write keeps concurrent lines from interleaving
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(painted.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for ConsoleSink {
    fn emit(&self, severity: Severity, line: &str) {
        let _ = self.write_line(severity, line);
    }

    fn name(&self) -> &str {
        "console"
    }
}
