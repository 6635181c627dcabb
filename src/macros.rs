//! Logging macros for ergonomic log message formatting.
//!
//! Two forms are accepted:
//!
//! - `info!(logger, "format {}", args…)` formats with [`format!`] and logs
//!   the result without arguments;
//! - `info!(logger, "template {field}"; arg, …)` passes the message through
//!   untouched and forwards the arguments, so the first argument can act as
//!   the template context.
//!
//! # Examples
//!
//! ```
//! use contextual_logger::backends::NullLogger;
//! use contextual_logger::info;
//! use serde_json::json;
//!
//! let logger = NullLogger::new();
//!
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! info!(logger, "User {name} logged in"; json!({ "name": "ann" }));
//! ```

/// Log a message at an explicit level.
///
/// # Examples
///
/// ```
/// # use contextual_logger::prelude::*;
/// # use contextual_logger::backends::NullLogger;
/// # let logger = NullLogger::new();
/// use contextual_logger::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// log!(logger, LogLevel::Warn, "Disk {disk} at {pct}%"; serde_json::json!({ "disk": "sda", "pct": 91 }));
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $message:expr; $($arg:expr),+ $(,)?) => {{
        use $crate::Logger as _;
        $logger.log($level, $message, &[$($arg),+])
    }};
    ($logger:expr, $level:expr, $($arg:tt)+) => {{
        use $crate::Logger as _;
        $logger.log($level, &format!($($arg)+), &[])
    }};
}

/// Log a debug-level message.
///
/// ```
/// # use contextual_logger::backends::NullLogger;
/// # let logger = NullLogger::new();
/// use contextual_logger::debug;
/// debug!(logger, "Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
///
/// ```
/// # use contextual_logger::backends::NullLogger;
/// # let logger = NullLogger::new();
/// use contextual_logger::error;
/// error!(logger, "Request failed with {}", "timeout");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::backends::{CapturedStreams, ConsoleLogger};
    use crate::{LogLevel, LoggerOptions};
    use serde_json::json;

    fn logger() -> (ConsoleLogger, std::sync::Arc<CapturedStreams>) {
        let streams = CapturedStreams::new();
        let options = LoggerOptions::new()
            .with_level(LogLevel::Debug)
            .with_timestamp(false)
            .with_colorize(false)
            .with_context("m");
        (ConsoleLogger::with_streams(options, streams.clone()), streams)
    }

    #[test]
    fn test_format_form() {
        let (logger, streams) = logger();
        info!(logger, "port {}", 8080);
        debug!(logger, "plain");
        assert_eq!(streams.stdout(), vec!["[INFO] [m] port 8080", "[DEBUG] [m] plain"]);
    }

    #[test]
    fn test_template_form() {
        let (logger, streams) = logger();
        warn!(logger, "user {name}"; json!({ "name": "ann" }));
        error!(logger, "code"; json!(7), json!("x"),);
        assert_eq!(
            streams.stderr(),
            vec![r#"[WARN] [m] user ann {"name":"ann"}"#, "[ERROR] [m] code 7 x"]
        );
    }
}
