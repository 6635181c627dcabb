//! Fan-out backend

use crate::core::{LogLevel, Logger, LoggerOptions, SharedLogger};
use serde_json::Value;
use std::sync::Arc;

/// Forwards every call to its delegates, in the order they were supplied.
///
/// The multi logger applies no level gate of its own; each delegate filters
/// with its own minimum and handles its own failures. Asynchronous delegates
/// are not awaited.
///
/// # Example
///
/// ```
/// use contextual_logger::backends::{CapturedStreams, ConsoleLogger, MultiLogger, NullLogger};
/// use contextual_logger::prelude::*;
/// use std::sync::Arc;
///
/// let streams = CapturedStreams::new();
/// let console: SharedLogger = Arc::new(ConsoleLogger::with_streams(LoggerOptions::new(), streams.clone()));
/// let multi = MultiLogger::new(LoggerOptions::new(), vec![console, NullLogger::new() as SharedLogger]);
///
/// multi.info("to everyone", &[]);
/// assert_eq!(streams.stdout().len(), 1);
/// ```
pub struct MultiLogger {
    options: LoggerOptions,
    delegates: Vec<SharedLogger>,
}

impl MultiLogger {
    pub fn new(options: LoggerOptions, delegates: Vec<SharedLogger>) -> Self {
        Self { options, delegates }
    }

    pub fn delegates(&self) -> &[SharedLogger] {
        &self.delegates
    }
}

impl Logger for MultiLogger {
    fn options(&self) -> &LoggerOptions {
        &self.options
    }

    /// Delegates decide for themselves
    fn is_enabled(&self, level: LogLevel) -> bool {
        self.delegates.iter().any(|delegate| delegate.is_enabled(level))
    }

    fn log(&self, level: LogLevel, message: &str, args: &[Value]) {
        for delegate in &self.delegates {
            delegate.log(level, message, args);
        }
    }

    fn debug(&self, message: &str, args: &[Value]) {
        for delegate in &self.delegates {
            delegate.debug(message, args);
        }
    }

    fn info(&self, message: &str, args: &[Value]) {
        for delegate in &self.delegates {
            delegate.info(message, args);
        }
    }

    fn warn(&self, message: &str, args: &[Value]) {
        for delegate in &self.delegates {
            delegate.warn(message, args);
        }
    }

    fn error(&self, message: &str, args: &[Value]) {
        for delegate in &self.delegates {
            delegate.error(message, args);
        }
    }

    fn child(&self, suffix: &str) -> SharedLogger {
        Arc::new(Self {
            options: self.options.child_options(suffix),
            delegates: self
                .delegates
                .iter()
                .map(|delegate| delegate.child(suffix))
                .collect(),
        })
    }
}
