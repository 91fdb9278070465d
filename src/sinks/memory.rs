//! In-memory sink that keeps every line it receives

use crate::core::{Severity, Sink};
use parking_lot::Mutex;

#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<(Severity, String)>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Received `(severity, line)` pairs in arrival order
    pub fn records(&self) -> Vec<(Severity, String)> {
        self.records.lock().clone()
    }

    pub fn lines(&self) -> Vec<String> {
        self.records
            .lock()
            .iter()
            .map(|(_, line)| line.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    pub fn clear(&self) {
        self.records.lock().clear();
    }
}

impl Sink for MemorySink {
    fn emit(&self, severity: Severity, line: &str) {
        self.records.lock().push((severity, line.to_string()));
    }

    fn name(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let sink = MemorySink::new();
        sink.emit(Severity::Info, "a");
        sink.emit(Severity::Error, "b");

        assert_eq!(sink.len(), 2);
        assert_eq!(
            sink.records(),
            vec![
                (Severity::Info, "a".to_string()),
                (Severity::Error, "b".to_string())
            ]
        );

        sink.clear();
        assert!(sink.is_empty());
    }
}
