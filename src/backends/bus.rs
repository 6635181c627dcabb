//! Message bus contract consumed by the event backend, plus an in-memory bus

use crate::core::{LogLevel, LoggerError, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::broadcast;

/// Payload of a [`LogEvent`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEventData {
    pub level: LogLevel,
    pub message: String,
    pub args: Vec<Value>,
}

/// Structured event published for every emitted log call
///
/// Serializes as
/// `{"id":…,"type":"logger.warn","source":"app:db","timestamp":…,"data":{…}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEvent {
    pub id: String,
    #[serde(rename = "type")]
    pub event_type: String,
    /// Context of the logger that emitted the event
    pub source: String,
    pub timestamp: DateTime<Utc>,
    pub data: LogEventData,
}

/// Event type for a level: `logger.<level>`
pub fn event_type(level: LogLevel) -> String {
    format!("logger.{}", level.name())
}

/// External message bus. Delivery guarantees are the bus's own business.
///
/// # Example
///
/// ```
/// use async_trait::async_trait;
/// use contextual_logger::backends::{LogEvent, MessageBus};
/// use contextual_logger::Result;
///
/// struct StdoutBus;
///
/// #[async_trait]
/// impl MessageBus for StdoutBus {
///     async fn publish(&self, event: LogEvent) -> Result<()> {
///         println!("{}", serde_json::to_string(&event)?);
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait MessageBus: Send + Sync {
    async fn publish(&self, event: LogEvent) -> Result<()>;
}

/// Bus that keeps every event in memory and rebroadcasts it to subscribers
///
/// The event history is unbounded: it holds everything published until the
/// bus is dropped or [`MemoryBus::clear`] is called. Meant for tests and
/// short-lived tools, not as a production transport.
pub struct MemoryBus {
    events: Mutex<Vec<LogEvent>>,
    sender: broadcast::Sender<LogEvent>,
    failing: AtomicBool,
}

impl MemoryBus {
    pub fn new() -> Self {
        Self::with_capacity(256)
    }

    /// `capacity` bounds how far a subscriber may lag behind
    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self {
            events: Mutex::new(Vec::new()),
            sender,
            failing: AtomicBool::new(false),
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<LogEvent> {
        self.sender.subscribe()
    }

    /// Every event published so far
    pub fn events(&self) -> Vec<LogEvent> {
        self.events.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    /// Forget the recorded history. Subscribers are unaffected.
    pub fn clear(&self) {
        self.events.lock().clear();
    }

    /// Make every following publish fail (or succeed again)
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }
}

impl Default for MemoryBus {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MessageBus for MemoryBus {
    async fn publish(&self, event: LogEvent) -> Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(LoggerError::publish("memory bus is set to fail"));
        }
        self.events.lock().push(event.clone());
        // No subscribers is not an error
        let _ = self.sender.send(event);
        Ok(())
    }
}
