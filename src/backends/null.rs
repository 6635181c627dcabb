//! No-op backend

use crate::core::{LogLevel, Logger, LoggerOptions, SharedLogger};
use serde_json::Value;
use std::sync::{Arc, Weak};

/// Logger that discards everything before any formatting work.
///
/// `child` hands back the very same instance.
///
/// ```
/// use contextual_logger::backends::NullLogger;
/// use contextual_logger::prelude::*;
/// use std::sync::Arc;
///
/// let logger: SharedLogger = NullLogger::new();
/// let child = logger.child("anything");
/// assert!(Arc::ptr_eq(&logger, &child));
/// ```
pub struct NullLogger {
    options: LoggerOptions,
    this: Weak<NullLogger>,
}

impl NullLogger {
    #[allow(clippy::new_ret_no_self)]
    pub fn new() -> Arc<Self> {
        Self::with_options(LoggerOptions::new().with_level(LogLevel::Silent))
    }

    pub fn with_options(options: LoggerOptions) -> Arc<Self> {
        Arc::new_cyclic(|this| Self {
            options,
            this: this.clone(),
        })
    }
}

impl Logger for NullLogger {
    fn options(&self) -> &LoggerOptions {
        &self.options
    }

    fn is_enabled(&self, _level: LogLevel) -> bool {
        false
    }

    #[inline]
    fn log(&self, _level: LogLevel, _message: &str, _args: &[Value]) {}

    #[inline]
    fn debug(&self, _message: &str, _args: &[Value]) {}

    #[inline]
    fn info(&self, _message: &str, _args: &[Value]) {}

    #[inline]
    fn warn(&self, _message: &str, _args: &[Value]) {}

    #[inline]
    fn error(&self, _message: &str, _args: &[Value]) {}

    fn child(&self, _suffix: &str) -> SharedLogger {
        // `upgrade` only fails while the last strong handle is being dropped
        self.this
            .upgrade()
            .unwrap_or_else(|| Self::with_options(self.options.clone()))
    }
}
