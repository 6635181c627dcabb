//! Configuration and the logger factory
//!
//! The root logger is built once at startup from an explicit [`LoggerConfig`]
//! (parsed from JSON and/or the environment) and then passed down as a
//! [`SharedLogger`]. Switching backends means building a new logger; nothing
//! is mutated in place.

use crate::backends::{
    ConsoleLogger, ConsoleStreams, EventLogger, FileLogger, MessageBus, MultiLogger, NullLogger,
    StdStreams,
};
use crate::core::{FileOptions, LogLevel, LoggerError, LoggerOptions, Result, SharedLogger};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::runtime::Handle;

/// Environment variable overriding the minimum level
pub const ENV_LOG_LEVEL: &str = "LOG_LEVEL";

/// Environment variable switching every logger to the null backend
pub const ENV_LOG_SILENT: &str = "LOG_SILENT";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    #[default]
    Console,
    File,
    Event,
    Multi,
    Null,
}

/// Serializable description of a logger
///
/// # Example
///
/// ```
/// use contextual_logger::config::{BackendKind, LoggerConfig};
/// use contextual_logger::LogLevel;
///
/// let config = LoggerConfig::from_json(r#"{
///     "backend": "file",
///     "options": { "level": "debug", "context": "worker" },
///     "file": { "path": "/tmp/worker.log", "maxFiles": 3 }
/// }"#).unwrap();
///
/// assert_eq!(config.backend, BackendKind::File);
/// assert_eq!(config.options.level, LogLevel::Debug);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LoggerConfig {
    pub backend: BackendKind,
    pub options: LoggerOptions,
    pub file: Option<FileOptions>,
    /// Build a null logger regardless of `backend`
    pub silent: bool,
}

impl LoggerConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Default configuration with the process environment applied
    pub fn from_env() -> Self {
        Self::default().with_env()
    }

    #[must_use]
    pub fn with_env(self) -> Self {
        self.apply_env(std::env::vars())
    }

    /// Apply `LOG_LEVEL` and `LOG_SILENT` from `vars`.
    ///
    /// An unparseable level is reported on stderr and ignored.
    #[must_use]
    pub fn apply_env<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (key, value) in vars {
            let value = value.as_ref();
            match key.as_ref() {
                ENV_LOG_LEVEL => match value.parse::<LogLevel>() {
                    Ok(level) => self.options.level = level,
                    Err(e) => eprintln!("[LOGGER WARN] Ignoring {}: {}", ENV_LOG_LEVEL, e),
                },
                ENV_LOG_SILENT => self.silent = is_truthy(value),
                _ => {}
            }
        }
        self
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Builds a fresh [`SharedLogger`] from configuration and collaborators
///
/// # Example
///
/// ```
/// use contextual_logger::backends::CapturedStreams;
/// use contextual_logger::config::{BackendKind, LoggerBuilder};
/// use contextual_logger::prelude::*;
///
/// let streams = CapturedStreams::new();
/// let logger = LoggerBuilder::new()
///     .backend(BackendKind::Console)
///     .level(LogLevel::Debug)
///     .context("cli")
///     .console_streams(streams.clone())
///     .build()
///     .unwrap();
///
/// logger.debug("ready", &[]);
/// assert_eq!(streams.stdout().len(), 1);
/// ```
pub struct LoggerBuilder {
    config: LoggerConfig,
    bus: Option<Arc<dyn MessageBus>>,
    delegates: Option<Vec<SharedLogger>>,
    streams: Option<Arc<dyn ConsoleStreams>>,
    runtime: Option<Handle>,
}

impl LoggerBuilder {
    pub fn new() -> Self {
        Self::from_config(LoggerConfig::default())
    }

    pub fn from_config(config: LoggerConfig) -> Self {
        Self {
            config,
            bus: None,
            delegates: None,
            streams: None,
            runtime: None,
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn backend(mut self, backend: BackendKind) -> Self {
        self.config.backend = backend;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn options(mut self, options: LoggerOptions) -> Self {
        self.config.options = options;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.config.options.level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn context(mut self, context: impl Into<String>) -> Self {
        self.config.options.context = context.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn file(mut self, file: FileOptions) -> Self {
        self.config.file = Some(file);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn silent(mut self, silent: bool) -> Self {
        self.config.silent = silent;
        self
    }

    /// Message bus for the event backend
    #[must_use = "builder methods return a new value"]
    pub fn bus(mut self, bus: Arc<dyn MessageBus>) -> Self {
        self.bus = Some(bus);
        self
    }

    /// Delegates for the multi backend
    #[must_use = "builder methods return a new value"]
    pub fn delegates(mut self, delegates: Vec<SharedLogger>) -> Self {
        self.delegates = Some(delegates);
        self
    }

    /// Streams for the console backend (stdout/stderr by default)
    #[must_use = "builder methods return a new value"]
    pub fn console_streams(mut self, streams: Arc<dyn ConsoleStreams>) -> Self {
        self.streams = Some(streams);
        self
    }

    /// Runtime for the event backend (the current one by default)
    #[must_use = "builder methods return a new value"]
    pub fn runtime(mut self, runtime: Handle) -> Self {
        self.runtime = Some(runtime);
        self
    }

    /// Build the logger.
    ///
    /// # Errors
    ///
    /// - event backend without a bus, or outside a runtime with none given
    /// - multi backend without a delegate list
    /// - file backend whose directory or file cannot be created
    pub fn build(self) -> Result<SharedLogger> {
        let LoggerBuilder {
            config,
            bus,
            delegates,
            streams,
            runtime,
        } = self;
        let options = config.options;

        if config.silent {
            return Ok(NullLogger::with_options(options));
        }

        let logger: SharedLogger = match config.backend {
            BackendKind::Console => {
                let streams = streams.unwrap_or_else(|| Arc::new(StdStreams));
                Arc::new(ConsoleLogger::with_streams(options, streams))
            }
            BackendKind::File => {
                let file = config.file.unwrap_or_default();
                Arc::new(FileLogger::new(options, file)?)
            }
            BackendKind::Event => {
                let bus = bus.ok_or_else(|| {
                    LoggerError::config("EventLogger", "a message bus is required")
                })?;
                match runtime {
                    Some(runtime) => Arc::new(EventLogger::with_runtime(options, bus, runtime)),
                    None => Arc::new(EventLogger::new(options, bus)?),
                }
            }
            BackendKind::Multi => {
                let delegates = delegates.ok_or_else(|| {
                    LoggerError::config("MultiLogger", "a delegate list is required")
                })?;
                Arc::new(MultiLogger::new(options, delegates))
            }
            BackendKind::Null => NullLogger::with_options(options),
        };

        Ok(logger)
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
