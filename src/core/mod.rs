//! Core logger types and traits

pub mod error;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod options;
pub mod timestamp;

pub use error::{LoggerError, Result};
pub use log_entry::LogEntry;
pub use log_level::{should_log, LogLevel};
pub use logger::{Logger, SharedLogger};
pub use metrics::LoggerMetrics;
pub use options::{
    FileOptions, FormattingOptions, LoggerOptions, CONTEXT_SEPARATOR, DEFAULT_CONTEXT,
    DEFAULT_MAX_FILES, DEFAULT_MAX_FILE_SIZE,
};
pub use timestamp::DateFormat;
