//! Error types for the logger system

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Write to the active log file failed
    #[error("File write failed for '{path}': {message}")]
    FileWrite { path: String, message: String },

    /// File rotation error
    #[error("File rotation failed for '{path}': {message}")]
    FileRotation { path: String, message: String },

    /// Write attempted after `close()`
    #[error("Log file '{path}' is closed")]
    FileClosed { path: String },

    /// Message bus rejected an event
    #[error("Publish failed: {0}")]
    Publish(String),

    /// Event backend constructed outside a tokio runtime
    #[error("No async runtime available to publish log events")]
    NoRuntime,
}

impl LoggerError {
    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    pub fn file_write(path: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::FileWrite {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a file rotation error
    pub fn file_rotation(path: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::FileRotation {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn file_closed(path: impl Into<String>) -> Self {
        LoggerError::FileClosed { path: path.into() }
    }

    pub fn publish<S: Into<String>>(msg: S) -> Self {
        LoggerError::Publish(msg.into())
    }
}
