//! Stress tests for concurrent logging
//!
//! These tests verify:
//! - Lines written through one shared file sink never interleave
//! - Loggers shared across threads dispatch every admitted line
//! - Setters racing with emit calls never lose or corrupt lines

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;
use tempfile::TempDir;
use wlog::prelude::*;
use wlog::{infof, sinks};

const THREADS: usize = 8;
const LINES_PER_THREAD: usize = 200;

#[test]
fn test_shared_file_sink_keeps_lines_whole() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("stress.log");
    let sink = sinks::file(&log_file);

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let sink = Arc::clone(&sink);
            thread::spawn(move || {
                let logger = LoggerFactory::with_defaults(Severity::Info, LogFormat::LevelName)
                    .logger(format!("T{}", t), Some(sink));
                for i in 0..LINES_PER_THREAD {
                    infof!(logger, "line {} {}\n", i, "x".repeat(64));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("logging thread panicked");
    }

    let content = std::fs::read_to_string(&log_file).expect("Failed to read log file");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), THREADS * LINES_PER_THREAD);

    let suffix = "x".repeat(64);
    for line in &lines {
        assert!(line.starts_with("[INFO ] [T"), "torn line: {}", line);
        assert!(line.ends_with(&suffix), "torn line: {}", line);
    }

    let unique: HashSet<&str> = lines.iter().copied().collect();
    assert_eq!(unique.len(), lines.len());
}

#[test]
fn test_shared_logger_across_threads() {
    let sink = Arc::new(MemorySink::new());
    let logger = Arc::new(
        LoggerFactory::new()
            .builder("shared")
            .level(Severity::Warn)
            .format(LogFormat::None)
            .shared_sink(sink.clone())
            .build(),
    );

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..LINES_PER_THREAD {
                    logger.warn(format!("{}-{}", t, i));
                    logger.debug("filtered");
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("logging thread panicked");
    }

    let total = (THREADS * LINES_PER_THREAD) as u64;
    assert_eq!(sink.len() as u64, total);
    assert_eq!(logger.metrics().dispatched(), total);
    assert_eq!(logger.metrics().filtered(), total);
}

#[test]
fn test_setters_race_with_emitters() {
    let sink = Arc::new(MemorySink::new());
    let logger = Arc::new(
        LoggerFactory::new()
            .builder("race")
            .level(Severity::Debug)
            .format(LogFormat::None)
            .shared_sink(sink.clone())
            .build(),
    );

    let writer = {
        let logger = Arc::clone(&logger);
        thread::spawn(move || {
            for i in 0..1000 {
                logger.error(i);
            }
        })
    };
    let toggler = {
        let logger = Arc::clone(&logger);
        thread::spawn(move || {
            for i in 0..1000 {
                let format = if i % 2 == 0 { LogFormat::Level } else { LogFormat::None };
                logger.set_format(format);
            }
        })
    };

    writer.join().expect("writer panicked");
    toggler.join().expect("toggler panicked");

    // Error is admitted at Debug, so every line arrives in one of the two layouts
    let lines = sink.lines();
    assert_eq!(lines.len(), 1000);
    for (i, line) in lines.iter().enumerate() {
        let bare = format!("{}\n", i);
        let leveled = format!("[ERROR] {}\n", i);
        assert!(*line == bare || *line == leveled, "unexpected line: {:?}", line);
    }
}
