//! Basic logger usage example
//!
//! Demonstrates the console backend, level gating, templates and child
//! contexts.
//!
//! Run with: cargo run --example basic_usage

use contextual_logger::prelude::*;
use serde_json::json;
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== Contextual Logger - Basic Usage Example ===\n");

    let root: SharedLogger = Arc::new(ConsoleLogger::new(
        LoggerOptions::new()
            .with_context("api")
            .with_level(LogLevel::Debug),
    ));

    println!("1. Logging at different levels:");
    root.debug("This is a debug message", &[]);
    root.info("This is an info message", &[]);
    root.warn("This is a warning message", &[]);
    root.error("This is an error message", &[]);

    println!("\n2. Templates resolved from the first argument:");
    root.info(
        "User {user.name} logged in from {ip}",
        &[json!({ "user": { "name": "John" }, "ip": "1.2.3.4" })],
    );
    root.info("Unknown fields stay as {typed}", &[json!({})]);

    println!("\n3. Child loggers extend the context:");
    let auth = root.child("auth");
    let session = auth.child("session");
    auth.info("Token verified", &[]);
    session.warn("Session about to expire", &[json!({ "ttl": 30 })]);

    println!("\n4. Configuration from the environment:");
    let logger = LoggerBuilder::from_config(LoggerConfig::from_env())
        .context("env")
        .build()?;
    logger.info("LOG_LEVEL and LOG_SILENT are honoured here", &[]);
    contextual_logger::info!(logger, "Macros work too: {} + {} = {}", 2, 2, 4);

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
