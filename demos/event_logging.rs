//! Event logging example
//!
//! Demonstrates publishing log entries to a message bus and consuming them
//! from a subscriber.
//!
//! Run with: cargo run --example event_logging

use contextual_logger::backends::MemoryBus;
use contextual_logger::prelude::*;
use std::sync::Arc;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    println!("=== Contextual Logger - Event Logging Example ===\n");

    let bus = Arc::new(MemoryBus::new());
    let mut events = bus.subscribe();

    let consumer = tokio::spawn(async move {
        while let Ok(event) = events.recv().await {
            println!(
                "  [{}] {} from {}: {}",
                event.id, event.event_type, event.source, event.data.message
            );
        }
    });

    let logger = Arc::new(EventLogger::new(
        LoggerOptions::new().with_context("billing"),
        bus.clone(),
    )?);

    println!("1. Fire-and-forget publishing:");
    let invoices = logger.child("invoices");
    invoices.info("Invoice {id} created", &[serde_json::json!({ "id": "INV-7" })]);
    invoices.warn("\x1B[33mColors are stripped\x1B[0m before publishing", &[]);
    invoices.debug("Below the minimum level, never published", &[]);

    println!("\n2. Awaiting the bus:");
    logger
        .emit(LogLevel::Error, "Payment gateway unreachable", &[])
        .await?;

    tokio::time::sleep(Duration::from_millis(50)).await;
    println!(
        "\nPublished: {}, dropped: {}",
        logger.metrics().total_logged(),
        logger.metrics().dropped_count()
    );

    drop(logger);
    drop(invoices);
    drop(bus);
    let _ = consumer.await;

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
