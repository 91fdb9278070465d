//! Fan-out sink

use super::{ConsoleSink, FileSink};
use crate::core::sink::emit_isolated;
use crate::core::{Severity, Sink};
use std::path::PathBuf;
use std::sync::Arc;

/// Forwards every line to each child in order.
///
/// Children are isolated from each other: a child that panics is reported and
/// the remaining children still receive the line.
#[derive(Clone, Default)]
pub struct CompositeSink {
    children: Vec<Arc<dyn Sink>>,
}

impl CompositeSink {
    pub fn new(children: Vec<Arc<dyn Sink>>) -> Self {
        Self { children }
    }

    /// Console output followed by a file append
    pub fn console_and_file(path: impl Into<PathBuf>) -> Self {
        let console: Arc<dyn Sink> = Arc::new(ConsoleSink::new());
        let file: Arc<dyn Sink> = Arc::new(FileSink::new(path));
        Self::new(vec![console, file])
    }

    #[must_use]
    pub fn with<S: Sink + 'static>(mut self, child: S) -> Self {
        self.children.push(Arc::new(child));
        self
    }

    #[must_use]
    pub fn with_shared(mut self, child: Arc<dyn Sink>) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(&self) -> &[Arc<dyn Sink>] {
        &self.children
    }
}

impl std::fmt::Debug for CompositeSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.children.iter().map(|child| child.name()))
            .finish()
    }
}

impl Sink for CompositeSink {
    fn emit(&self, severity: Severity, line: &str) {
        for child in &self.children {
            emit_isolated(child.as_ref(), severity, line);
        }
    }

    fn name(&self) -> &str {
        "composite"
    }
}
