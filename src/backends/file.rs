//! File backend with size-based rotation
//!
//! The active file is archived under numbered suffixes (`app.log.1` is the
//! newest archive, `app.log.<max_files>` the oldest) when the next entry
//! would push it over `max_size`.

use crate::core::logger::report_sink_failure;
use crate::core::{
    FileOptions, LogEntry, LogLevel, Logger, LoggerError, LoggerMetrics, LoggerOptions, Result,
    SharedLogger,
};
use parking_lot::Mutex;
use serde_json::Value;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Lines go straight to the file: a failed write leaves nothing buffered
/// that a later write could flush
enum FileState {
    Open(File),
    Closed,
}

/// The open handle and its size counter. Shared by a logger and its children.
struct FileSink {
    path: PathBuf,
    max_size: u64,
    max_files: usize,
    state: FileState,
    /// Bytes written to the active file since it was opened or rotated
    current_size: u64,
}

impl FileSink {
    fn open(options: &FileOptions) -> Result<Self> {
        let path = options.path.clone();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                LoggerError::io_operation(
                    "create log directory",
                    format!("Failed to create directory '{}'", parent.display()),
                    e,
                )
            })?;
        }

        let file = open_log_file(&path, options.append).map_err(|e| {
            LoggerError::io_operation(
                "open log file",
                format!("Failed to open '{}'", path.display()),
                e,
            )
        })?;
        let current_size = file.metadata()?.len();

        Ok(Self {
            path,
            max_size: options.max_size,
            max_files: options.max_files,
            state: FileState::Open(file),
            current_size,
        })
    }

    fn is_open(&self) -> bool {
        matches!(self.state, FileState::Open(_))
    }

    fn write_line(&mut self, line: &str, metrics: &LoggerMetrics) -> Result<()> {
        if !self.is_open() {
            return Err(LoggerError::file_closed(self.display_path()));
        }

        let len = line.len() as u64;
        // An empty file never rotates, so an oversized entry still lands somewhere
        if self.current_size > 0 && self.current_size + len > self.max_size {
            if let Err(e) = self.rotate() {
                self.recover_after_failed_rotation();
                return Err(e);
            }
            metrics.record_rotation();
        }

        let FileState::Open(file) = &mut self.state else {
            return Err(LoggerError::file_closed(self.display_path()));
        };

        match file.write_all(line.as_bytes()) {
            Ok(()) => {
                self.current_size += len;
                Ok(())
            }
            Err(e) => {
                // Part of the line may have reached the file
                if let Ok(metadata) = file.metadata() {
                    self.current_size = metadata.len();
                }
                Err(LoggerError::file_write(
                    self.display_path(),
                    format!("Failed to write log entry: {}", e),
                ))
            }
        }
    }

    /// Close the active file, shift the archives up by one and open a fresh
    /// active file. Each step starts only after the previous one finished.
    fn rotate(&mut self) -> Result<()> {
        if let FileState::Open(mut file) = std::mem::replace(&mut self.state, FileState::Closed) {
            file.flush().map_err(|e| {
                LoggerError::file_rotation(
                    self.display_path(),
                    format!("Failed to flush before rotation: {}", e),
                )
            })?;
            // Handle released here
        }

        if self.max_files > 0 {
            let oldest = self.backup_path(self.max_files);
            if oldest.exists() {
                fs::remove_file(&oldest).map_err(|e| {
                    LoggerError::file_rotation(
                        oldest.display().to_string(),
                        format!("Failed to remove oldest backup: {}", e),
                    )
                })?;
            }

            for index in (1..self.max_files).rev() {
                let from = self.backup_path(index);
                if from.exists() {
                    fs::rename(&from, self.backup_path(index + 1)).map_err(|e| {
                        LoggerError::file_rotation(
                            from.display().to_string(),
                            format!("Failed to shift backup: {}", e),
                        )
                    })?;
                }
            }

            if self.path.exists() {
                fs::rename(&self.path, self.backup_path(1)).map_err(|e| {
                    LoggerError::file_rotation(
                        self.display_path(),
                        format!("Failed to archive active log file: {}", e),
                    )
                })?;
            }
        }

        // Truncating also covers `max_files == 0`, where nothing is archived
        let file = open_log_file(&self.path, false).map_err(|e| {
            LoggerError::file_rotation(
                self.display_path(),
                format!("Failed to create new log file: {}", e),
            )
        })?;

        self.state = FileState::Open(file);
        self.current_size = 0;
        Ok(())
    }

    /// Reopen the active path in append mode so later entries can still be
    /// written after a rotation step failed
    fn recover_after_failed_rotation(&mut self) {
        if self.is_open() {
            return;
        }
        match open_log_file(&self.path, true) {
            Ok(file) => {
                self.current_size = file.metadata().map(|m| m.len()).unwrap_or(0);
                self.state = FileState::Open(file);
            }
            Err(e) => {
                eprintln!(
                    "[LOGGER ERROR] Failed to reopen log file '{}' after rotation failure: {}",
                    self.path.display(),
                    e
                );
            }
        }
    }

    fn flush(&mut self) -> Result<()> {
        if let FileState::Open(file) = &mut self.state {
            file.flush().map_err(|e| {
                LoggerError::file_write(self.path.display().to_string(), format!("Failed to flush: {}", e))
            })?;
        }
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        let result = self.flush();
        self.state = FileState::Closed;
        result
    }

    fn backup_path(&self, index: usize) -> PathBuf {
        backup_path(&self.path, index)
    }

    fn display_path(&self) -> String {
        self.path.display().to_string()
    }
}

impl Drop for FileSink {
    fn drop(&mut self) {
        // Best effort flush - ignore errors during drop
        let _ = self.flush();
    }
}

fn open_log_file(path: &Path, append: bool) -> std::io::Result<File> {
    let mut options = OpenOptions::new();
    options.create(true);
    if append {
        options.append(true);
    } else {
        options.write(true).truncate(true);
    }
    options.open(path)
}

/// Path of the `index`-th archive of `path`: `app.log` -> `app.log.<index>`
pub fn backup_path(path: &Path, index: usize) -> PathBuf {
    let mut backup = path.as_os_str().to_owned();
    backup.push(format!(".{}", index));
    PathBuf::from(backup)
}

/// Logger writing to a rotating file
///
/// # Examples
///
/// ```no_run
/// use contextual_logger::backends::FileLogger;
/// use contextual_logger::prelude::*;
///
/// let logger = FileLogger::new(
///     LoggerOptions::new().with_context("worker"),
///     FileOptions::new("/var/log/worker.log").with_max_size(1024 * 1024),
/// )
/// .unwrap();
///
/// logger.info("job {id} finished", &[serde_json::json!({ "id": 42 })]);
/// logger.close().unwrap();
/// ```
pub struct FileLogger {
    options: LoggerOptions,
    file: FileOptions,
    sink: Arc<Mutex<FileSink>>,
    metrics: Arc<LoggerMetrics>,
}

impl FileLogger {
    /// Open (or create) the log file. Colorization is always disabled.
    ///
    /// # Errors
    ///
    /// Returns error if the parent directory or the file cannot be created
    pub fn new(options: LoggerOptions, file: FileOptions) -> Result<Self> {
        let sink = FileSink::open(&file)?;
        Ok(Self {
            options: options.with_colorize(false),
            file,
            sink: Arc::new(Mutex::new(sink)),
            metrics: Arc::new(LoggerMetrics::new()),
        })
    }

    /// Emit one entry and report the outcome. This is the confirming
    /// counterpart of [`Logger::log`]; it does not report failures itself.
    ///
    /// Returns `Ok(())` without writing when the level is filtered out.
    pub fn write(&self, level: LogLevel, message: &str, args: &[Value]) -> Result<()> {
        if !self.is_enabled(level) {
            return Ok(());
        }

        let entry = LogEntry::new(level, message, args, &self.options.context);
        let line = self.format_line(&entry);
        let result = self.sink.lock().write_line(&line, &self.metrics);
        match result {
            Ok(()) => {
                self.metrics.record_logged();
            }
            Err(_) => {
                self.metrics.record_dropped();
            }
        }
        result
    }

    /// `prefix message args…\n` with colors stripped and each argument as JSON
    pub fn format_line(&self, entry: &LogEntry) -> String {
        let entry = entry.stripped();
        let mut line = format!("{} {}", entry.prefix(&self.options), entry.message);
        for arg in &entry.args {
            line.push(' ');
            line.push_str(&serde_json::to_string(arg).unwrap_or_else(|_| arg.to_string()));
        }
        line.push('\n');
        line
    }

    pub fn flush(&self) -> Result<()> {
        self.sink.lock().flush()
    }

    /// Flush and release the file handle. Calling it again is a no-op.
    ///
    /// Children share the handle, so this closes it for them as well.
    pub fn close(&self) -> Result<()> {
        self.sink.lock().close()
    }

    pub fn is_open(&self) -> bool {
        self.sink.lock().is_open()
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file.path
    }

    #[must_use]
    pub fn file_options(&self) -> &FileOptions {
        &self.file
    }

    pub fn current_size(&self) -> u64 {
        self.sink.lock().current_size
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }
}

impl Logger for FileLogger {
    fn options(&self) -> &LoggerOptions {
        &self.options
    }

    fn log(&self, level: LogLevel, message: &str, args: &[Value]) {
        if let Err(e) = self.write(level, message, args) {
            report_sink_failure("file", &self.options.context, &e);
        }
    }

    /// Children write through the parent's handle and size counter, so a
    /// logger family never races itself on one path.
    fn child(&self, suffix: &str) -> SharedLogger {
        Arc::new(Self {
            options: self.options.child_options(suffix),
            file: self.file.clone(),
            sink: Arc::clone(&self.sink),
            metrics: Arc::clone(&self.metrics),
        })
    }
}
