//! Basic logger usage example
//!
//! Demonstrates console logging, level filtering and the line layouts.
//!
//! Run with: cargo run --example basic_usage

use wlog::prelude::*;
use wlog::{debugf, warnf};

fn main() {
    println!("=== wlog - Basic Usage Example ===\n");

    // Console sink, process-wide defaults (INFO, [LEVEL] [NAME])
    let logger = Logger::new("SERVER", None);

    println!("1. Logging at different levels:");
    logger.set_level(Severity::Debug);
    logger.debug("This is a debug message");
    logger.info("This is an info message");
    logger.warn("This is a warning message");
    logger.error("This is an error message");

    println!("\n2. Formatted variants leave the newline to the caller:");
    debugf!(logger, "cache warmed with {} entries\n", 128);
    warnf!(logger, "retry {} of {}\n", 2, 5);

    println!("\n3. Filtering at WARN - debug and info won't show:");
    logger.set_level(Severity::Warn);
    logger.debug("Debug message (hidden)");
    logger.info("Info message (hidden)");
    logger.warn("Warning message (visible)");

    println!("\n4. Every layout:");
    logger.set_level(Severity::Info);
    for format in LogFormat::ALL {
        logger.set_format(format);
        logger.info(format!("rendered with {}", format));
    }

    println!("\n=== Example completed successfully! ===");
}
