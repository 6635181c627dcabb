//! The logger contract shared by every backend

use super::log_level::{should_log, LogLevel};
use super::options::LoggerOptions;
use serde_json::Value;
use std::sync::Arc;

/// A logger handle that can be cloned cheaply and passed down call chains
pub type SharedLogger = Arc<dyn Logger>;

/// Uniform interface implemented by console, file, event, multi and null
/// backends.
///
/// Level methods never fail and never block on a broken sink. A child logger
/// is a fully independent instance of the same backend kind whose context is
/// `parent.context + ":" + suffix`.
///
/// # Example
///
/// ```
/// use contextual_logger::prelude::*;
/// use serde_json::json;
///
/// let logger = ConsoleLogger::new(LoggerOptions::new().with_context("api"));
/// let db = logger.child("db");
/// assert_eq!(db.context(), "api:db");
///
/// db.info("query took {ms}ms", &[json!({ "ms": 12 })]);
/// ```
pub trait Logger: Send + Sync {
    /// Options snapshot taken at construction
    fn options(&self) -> &LoggerOptions;

    /// Gate, format and write one entry. Sink failures are reported on the
    /// operator channel and dropped.
    fn log(&self, level: LogLevel, message: &str, args: &[Value]);

    /// New logger of the same kind with `suffix` appended to the context
    fn child(&self, suffix: &str) -> SharedLogger;

    fn context(&self) -> &str {
        &self.options().context
    }

    /// Whether a call at `level` would be emitted. `Silent` never is.
    fn is_enabled(&self, level: LogLevel) -> bool {
        level != LogLevel::Silent && should_log(level, self.options().level)
    }

    #[inline]
    fn debug(&self, message: &str, args: &[Value]) {
        self.log(LogLevel::Debug, message, args);
    }

    #[inline]
    fn info(&self, message: &str, args: &[Value]) {
        self.log(LogLevel::Info, message, args);
    }

    #[inline]
    fn warn(&self, message: &str, args: &[Value]) {
        self.log(LogLevel::Warn, message, args);
    }

    #[inline]
    fn error(&self, message: &str, args: &[Value]) {
        self.log(LogLevel::Error, message, args);
    }
}

/// Report a sink failure on the operator channel (process stderr), never on
/// the failing sink itself
pub(crate) fn report_sink_failure(backend: &str, context: &str, error: &dyn std::fmt::Display) {
    eprintln!(
        "[LOGGER ERROR] {} logger '{}' dropped an entry: {}",
        backend, context, error
    );
}
