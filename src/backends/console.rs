//! Console backend
//!
//! Debug and info go to the informational stream, warn and error to the
//! error stream. Only the `[timestamp] [LEVEL] [context]` prefix is ever
//! colorized; message bodies and arguments are written as given.

use crate::core::{LogEntry, LogLevel, Logger, LoggerOptions, SharedLogger};
use colored::Colorize;
use parking_lot::Mutex;
use serde_json::Value;
use std::io::Write;
use std::sync::Arc;

/// Which console stream a line was routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleStream {
    Out,
    Err,
}

impl ConsoleStream {
    pub fn for_level(level: LogLevel) -> Self {
        match level {
            LogLevel::Warn | LogLevel::Error => ConsoleStream::Err,
            LogLevel::Debug | LogLevel::Info | LogLevel::Silent => ConsoleStream::Out,
        }
    }
}

/// Destination of console output
pub trait ConsoleStreams: Send + Sync {
    fn write_out(&self, line: &str);
    fn write_err(&self, line: &str);
}

/// Process stdout / stderr
#[derive(Debug, Default, Clone, Copy)]
pub struct StdStreams;

impl ConsoleStreams for StdStreams {
    fn write_out(&self, line: &str) {
        // A closed stdout must not take the application down with it
        let _ = writeln!(std::io::stdout().lock(), "{}", line);
    }

    fn write_err(&self, line: &str) {
        let _ = writeln!(std::io::stderr().lock(), "{}", line);
    }
}

/// In-memory streams, for tests and for embedding console output elsewhere
#[derive(Debug, Default)]
pub struct CapturedStreams {
    lines: Mutex<Vec<(ConsoleStream, String)>>,
}

impl CapturedStreams {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Every captured line, in write order
    pub fn lines(&self) -> Vec<(ConsoleStream, String)> {
        self.lines.lock().clone()
    }

    pub fn stdout(&self) -> Vec<String> {
        self.lines_for(ConsoleStream::Out)
    }

    pub fn stderr(&self) -> Vec<String> {
        self.lines_for(ConsoleStream::Err)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lines.lock().clear();
    }

    fn lines_for(&self, stream: ConsoleStream) -> Vec<String> {
        self.lines
            .lock()
            .iter()
            .filter(|(s, _)| *s == stream)
            .map(|(_, line)| line.clone())
            .collect()
    }
}

impl ConsoleStreams for CapturedStreams {
    fn write_out(&self, line: &str) {
        self.lines.lock().push((ConsoleStream::Out, line.to_string()));
    }

    fn write_err(&self, line: &str) {
        self.lines.lock().push((ConsoleStream::Err, line.to_string()));
    }
}

pub struct ConsoleLogger {
    options: LoggerOptions,
    streams: Arc<dyn ConsoleStreams>,
}

impl ConsoleLogger {
    pub fn new(options: LoggerOptions) -> Self {
        Self::with_streams(options, Arc::new(StdStreams))
    }

    /// Console logger writing to custom streams
    ///
    /// # Example
    ///
    /// ```
    /// use contextual_logger::backends::{CapturedStreams, ConsoleLogger};
    /// use contextual_logger::prelude::*;
    ///
    /// let streams = CapturedStreams::new();
    /// let logger = ConsoleLogger::with_streams(
    ///     LoggerOptions::new().with_level(LogLevel::Warn).with_colorize(false),
    ///     streams.clone(),
    /// );
    /// logger.info("hidden", &[]);
    /// logger.warn("shown", &[]);
    /// assert_eq!(streams.stderr().len(), 1);
    /// ```
    pub fn with_streams(options: LoggerOptions, streams: Arc<dyn ConsoleStreams>) -> Self {
        Self { options, streams }
    }

    /// Render one console line for `entry`
    pub fn format_line(&self, entry: &LogEntry) -> String {
        let prefix = entry.prefix(&self.options);
        let prefix = match entry.level.color_code() {
            Some(color) if self.options.formatting.colorize => prefix.color(color).to_string(),
            _ => prefix,
        };
        format!("{} {}{}", prefix, entry.message, entry.display_args())
    }
}

impl Logger for ConsoleLogger {
    fn options(&self) -> &LoggerOptions {
        &self.options
    }

    fn log(&self, level: LogLevel, message: &str, args: &[Value]) {
        if !self.is_enabled(level) {
            return;
        }

        let entry = LogEntry::new(level, message, args, &self.options.context);
        let line = self.format_line(&entry);
        match ConsoleStream::for_level(level) {
            ConsoleStream::Out => self.streams.write_out(&line),
            ConsoleStream::Err => self.streams.write_err(&line),
        }
    }

    fn child(&self, suffix: &str) -> SharedLogger {
        Arc::new(Self {
            options: self.options.child_options(suffix),
            streams: Arc::clone(&self.streams),
        })
    }
}
