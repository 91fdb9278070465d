//! File logging example
//!
//! Demonstrates logging to console and file simultaneously, and two loggers
//! sharing one file.
//!
//! Run with: cargo run --example file_logging

use std::sync::Arc;
use wlog::prelude::*;
use wlog::sinks;

fn main() {
    println!("=== wlog - File Logging Example ===\n");

    set_default_format(LogFormat::LevelNameTime);

    println!("1. Logging to both console and file:");
    let app = Logger::new("APP", Some(sinks::console_and_file("logs/application.log")));
    app.info("Application started");
    app.debug("Loading configuration... (hidden at INFO)");
    app.warn("Using default settings for some options");
    app.error("Failed to load optional plugin");

    println!("\n2. Two loggers sharing one daily file:");
    let daily: Arc<dyn Sink> = Arc::new(FileSink::daily("logs"));
    let api = Logger::new("API", Some(Arc::clone(&daily)));
    let db = Logger::new("DB", Some(daily));
    for i in 1..=3 {
        api.info(format!("Processing request {}/3", i));
        db.infof(format_args!("Query {} finished in {}ms\n", i, i * 7));
    }

    println!("\n=== Example completed successfully! ===");
    println!("Check 'logs/' for the file output");
}
