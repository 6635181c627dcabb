//! File logging example
//!
//! Demonstrates the rotating file backend alongside the console through a
//! multi logger.
//!
//! Run with: cargo run --example file_logging

use contextual_logger::backends::file::backup_path;
use contextual_logger::prelude::*;
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== Contextual Logger - File Logging Example ===\n");

    let file = Arc::new(FileLogger::new(
        LoggerOptions::new().with_context("app"),
        FileOptions::new("logs/application.log")
            .with_max_size(2 * 1024)
            .with_max_files(3),
    )?);
    let console: SharedLogger = Arc::new(ConsoleLogger::new(LoggerOptions::new()));

    let logger = LoggerBuilder::new()
        .backend(BackendKind::Multi)
        .delegates(vec![console, file.clone() as SharedLogger])
        .build()?;

    println!("1. Logging to both console and file:");
    logger.info("Application started", &[]);
    logger.warn("Using default settings for some options", &[]);
    logger.error("Failed to load optional plugin", &[]);

    println!("\n2. Writing enough to rotate:");
    let worker = logger.child("worker");
    for i in 1..=100 {
        worker.info(
            "Processing item {item} of {total}",
            &[serde_json::json!({ "item": i, "total": 100 })],
        );
    }

    file.flush()?;
    println!(
        "\nRotations: {}, dropped: {}",
        file.metrics().rotations(),
        file.metrics().dropped_count()
    );
    for index in 1..=file.file_options().max_files {
        let archive = backup_path(file.path(), index);
        if archive.exists() {
            println!("  archive: {}", archive.display());
        }
    }

    file.close()?;

    println!("\n=== Example completed successfully! ===");
    println!("Check 'logs/application.log' for the full log output");

    Ok(())
}
