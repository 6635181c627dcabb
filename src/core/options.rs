//! Logger configuration values
//!
//! `LoggerOptions` is the snapshot every backend owns. It never changes after
//! construction; child loggers receive a copy with an extended context.

use super::log_level::LogLevel;
use super::timestamp::DateFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Context label used when none is configured
pub const DEFAULT_CONTEXT: &str = "app";

/// Separator between a parent context and a child suffix
pub const CONTEXT_SEPARATOR: &str = ":";

/// Default rotation threshold for the file backend (10 MiB)
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Default number of rotated files kept by the file backend
pub const DEFAULT_MAX_FILES: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormattingOptions {
    pub colorize: bool,
    pub date_format: DateFormat,
}

impl Default for FormattingOptions {
    fn default() -> Self {
        Self {
            colorize: true,
            date_format: DateFormat::default(),
        }
    }
}

/// Options shared by every backend
///
/// # Examples
///
/// ```
/// use contextual_logger::{LogLevel, LoggerOptions};
///
/// let options = LoggerOptions::new()
///     .with_level(LogLevel::Warn)
///     .with_context("api");
///
/// let child = options.child_options("db");
/// assert_eq!(child.context, "api:db");
/// assert_eq!(child.level, LogLevel::Warn);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LoggerOptions {
    /// Minimum level to emit
    pub level: LogLevel,
    /// Label printed in every prefix
    pub context: String,
    /// Whether the prefix starts with a timestamp
    pub timestamp: bool,
    pub formatting: FormattingOptions,
}

impl Default for LoggerOptions {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            context: DEFAULT_CONTEXT.to_string(),
            timestamp: true,
            formatting: FormattingOptions::default(),
        }
    }
}

impl LoggerOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = context.into();
        self
    }

    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_timestamp(mut self, enabled: bool) -> Self {
        self.timestamp = enabled;
        self
    }

    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_colorize(mut self, enabled: bool) -> Self {
        self.formatting.colorize = enabled;
        self
    }

    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_date_format(mut self, format: DateFormat) -> Self {
        self.formatting.date_format = format;
        self
    }

    /// Options for a child logger: identical except for the extended context
    #[must_use]
    pub fn child_options(&self, suffix: &str) -> Self {
        let mut options = self.clone();
        options.context = format!("{}{}{}", self.context, CONTEXT_SEPARATOR, suffix);
        options
    }
}

/// File backend settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FileOptions {
    /// Path of the active log file
    #[serde(alias = "filePath")]
    pub path: PathBuf,
    /// Rotate before a write would push the file above this many bytes
    pub max_size: u64,
    /// Number of rotated files (`.1` .. `.max_files`) to keep
    pub max_files: usize,
    /// Append to an existing file instead of truncating it
    pub append: bool,
}

impl Default for FileOptions {
    fn default() -> Self {
        Self {
            path: PathBuf::from("logs/app.log"),
            max_size: DEFAULT_MAX_FILE_SIZE,
            max_files: DEFAULT_MAX_FILES,
            append: true,
        }
    }
}

impl FileOptions {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_max_size(mut self, max_size: u64) -> Self {
        self.max_size = max_size;
        self
    }

    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_max_files(mut self, max_files: usize) -> Self {
        self.max_files = max_files;
        self
    }

    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_append(mut self, append: bool) -> Self {
        self.append = append;
        self
    }
}
