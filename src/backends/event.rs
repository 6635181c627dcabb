//! Event backend: publishes every emitted entry to a message bus
//!
//! Level methods hand the publish to the tokio runtime and return at once.
//! [`EventLogger::emit`] is the awaitable variant for callers that need to
//! know whether the bus accepted the event.

use super::bus::{event_type, LogEvent, LogEventData, MessageBus};
use crate::core::logger::report_sink_failure;
use crate::core::{
    LogEntry, LogLevel, Logger, LoggerError, LoggerMetrics, LoggerOptions, Result, SharedLogger,
};
use serde_json::Value;
use std::sync::Arc;
use tokio::runtime::Handle;
use ulid::Ulid;

pub struct EventLogger {
    options: LoggerOptions,
    bus: Arc<dyn MessageBus>,
    runtime: Handle,
    metrics: Arc<LoggerMetrics>,
}

impl EventLogger {
    /// Create an event logger on the current tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::NoRuntime`] when called outside a runtime; use
    /// [`EventLogger::with_runtime`] there.
    pub fn new(options: LoggerOptions, bus: Arc<dyn MessageBus>) -> Result<Self> {
        let runtime = Handle::try_current().map_err(|_| LoggerError::NoRuntime)?;
        Ok(Self::with_runtime(options, bus, runtime))
    }

    /// Create an event logger that spawns its publishes on `runtime`.
    /// Colorization is always disabled.
    pub fn with_runtime(options: LoggerOptions, bus: Arc<dyn MessageBus>, runtime: Handle) -> Self {
        Self {
            options: options.with_colorize(false),
            bus,
            runtime,
            metrics: Arc::new(LoggerMetrics::new()),
        }
    }

    /// Build the color-free event for one call
    pub fn build_event(&self, level: LogLevel, message: &str, args: &[Value]) -> LogEvent {
        let entry = LogEntry::new(level, message, args, &self.options.context).stripped();
        LogEvent {
            id: Ulid::new().to_string(),
            event_type: event_type(level),
            source: entry.context,
            timestamp: entry.timestamp,
            data: LogEventData {
                level,
                message: entry.message,
                args: entry.args,
            },
        }
    }

    /// Publish one entry and wait for the bus. Filtered levels return
    /// `Ok(())` without publishing. Failures are returned, not reported.
    pub async fn emit(&self, level: LogLevel, message: &str, args: &[Value]) -> Result<()> {
        if !self.is_enabled(level) {
            return Ok(());
        }
        let event = self.build_event(level, message, args);
        publish_counted(self.bus.as_ref(), event, &self.metrics).await
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }
}

async fn publish_counted(bus: &dyn MessageBus, event: LogEvent, metrics: &LoggerMetrics) -> Result<()> {
    let result = bus.publish(event).await;
    match result {
        Ok(()) => {
            metrics.record_logged();
        }
        Err(_) => {
            metrics.record_dropped();
        }
    }
    result
}

/// Travels with a spawned publish. Dropped unsettled, the task never ran to
/// completion (e.g. the runtime shut down) and the entry counts as dropped.
struct PendingPublish {
    metrics: Arc<LoggerMetrics>,
    context: String,
    settled: bool,
}

impl Drop for PendingPublish {
    fn drop(&mut self) {
        if !self.settled {
            self.metrics.record_dropped();
            let error = LoggerError::publish("runtime shut down before the event was published");
            report_sink_failure("event", &self.context, &error);
        }
    }
}

impl Logger for EventLogger {
    fn options(&self) -> &LoggerOptions {
        &self.options
    }

    fn log(&self, level: LogLevel, message: &str, args: &[Value]) {
        if !self.is_enabled(level) {
            return;
        }

        let event = self.build_event(level, message, args);
        let bus = Arc::clone(&self.bus);
        let mut pending = PendingPublish {
            metrics: Arc::clone(&self.metrics),
            context: self.options.context.clone(),
            settled: false,
        };

        self.runtime.spawn(async move {
            let result = publish_counted(bus.as_ref(), event, &pending.metrics).await;
            pending.settled = true;
            if let Err(e) = result {
                report_sink_failure("event", &pending.context, &e);
            }
        });
    }

    fn child(&self, suffix: &str) -> SharedLogger {
        Arc::new(Self {
            options: self.options.child_options(suffix),
            bus: Arc::clone(&self.bus),
            runtime: self.runtime.clone(),
            metrics: Arc::clone(&self.metrics),
        })
    }
}
