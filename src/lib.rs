//! # Contextual Logger
//!
//! Structured logging behind one [`Logger`] contract with interchangeable
//! backends and hierarchical child contexts.
//!
//! ## Features
//!
//! - **Backends**: console, rotating file, message-bus events, fan-out and no-op
//! - **Child loggers**: `logger.child("db")` extends the context to `app:db`
//! - **Templates**: `{dotted.path}` placeholders resolved from the first argument
//! - **Fail-open**: a broken sink is reported on stderr, never to the caller
//!
//! ## Example
//!
//! ```
//! use contextual_logger::prelude::*;
//! use serde_json::json;
//!
//! let root: SharedLogger = std::sync::Arc::new(ConsoleLogger::new(
//!     LoggerOptions::new().with_context("api").with_level(LogLevel::Debug),
//! ));
//! let auth = root.child("auth");
//! auth.info("User {name} from {ip}", &[json!({ "name": "John", "ip": "1.2.3.4" })]);
//! ```

pub mod backends;
pub mod config;
pub mod core;
pub mod format;
pub mod macros;

pub mod prelude {
    pub use crate::backends::{ConsoleLogger, EventLogger, FileLogger, MultiLogger, NullLogger};
    pub use crate::config::{BackendKind, LoggerBuilder, LoggerConfig};
    pub use crate::core::{
        should_log, DateFormat, FileOptions, LogLevel, Logger, LoggerError, LoggerMetrics,
        LoggerOptions, Result, SharedLogger,
    };
}

pub use crate::backends::{ConsoleLogger, EventLogger, FileLogger, MultiLogger, NullLogger};
pub use crate::config::{BackendKind, LoggerBuilder, LoggerConfig};
pub use crate::core::{
    should_log, DateFormat, FileOptions, FormattingOptions, LogEntry, LogLevel, Logger,
    LoggerError, LoggerMetrics, LoggerOptions, Result, SharedLogger, CONTEXT_SEPARATOR,
    DEFAULT_CONTEXT, DEFAULT_MAX_FILES, DEFAULT_MAX_FILE_SIZE,
};
pub use crate::format::{format_message, has_ansi_color_codes, strip_ansi_color_codes, strip_colors};
