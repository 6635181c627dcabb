//! Log level definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a log call, totally ordered by rank.
///
/// `Silent` ranks above every other level. It is meant to be used as a
/// minimum level only: nothing is ever emitted at `Silent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug = 0,
    #[default]
    Info = 1,
    Warn = 2,
    Error = 3,
    Silent = 4,
}

impl LogLevel {
    pub const ALL: [LogLevel; 5] = [
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
        LogLevel::Silent,
    ];

    #[inline]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Silent => "SILENT",
        }
    }

    /// Lower-case name, used for event types such as `logger.warn`
    pub fn name(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Silent => "silent",
        }
    }

    /// Prefix color used by the console backend
    pub fn color_code(&self) -> Option<colored::Color> {
        use colored::Color::*;
        match self {
            LogLevel::Debug => Some(BrightBlack),
            LogLevel::Info => Some(Cyan),
            LogLevel::Warn => Some(Yellow),
            LogLevel::Error => Some(Red),
            LogLevel::Silent => None,
        }
    }
}

/// Decide whether a call at `message_level` passes the `minimum` gate.
///
/// Pure rank comparison. Loggers additionally refuse `Silent` as a message
/// level, see [`crate::Logger::is_enabled`].
///
/// ```
/// use contextual_logger::{should_log, LogLevel};
///
/// assert!(!should_log(LogLevel::Warn, LogLevel::Error));
/// assert!(should_log(LogLevel::Error, LogLevel::Warn));
/// ```
#[inline]
pub fn should_log(message_level: LogLevel, minimum: LogLevel) -> bool {
    message_level.rank() >= minimum.rank()
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "ERROR" => Ok(LogLevel::Error),
            "SILENT" => Ok(LogLevel::Silent),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_table() {
        let ranks: Vec<u8> = LogLevel::ALL.iter().map(|l| l.rank()).collect();
        assert_eq!(ranks, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_should_log_gate() {
        assert!(!should_log(LogLevel::Warn, LogLevel::Error));
        assert!(should_log(LogLevel::Error, LogLevel::Warn));
        assert!(should_log(LogLevel::Info, LogLevel::Info));
        assert!(!should_log(LogLevel::Debug, LogLevel::Info));
        assert!(!should_log(LogLevel::Error, LogLevel::Silent));
    }

    #[test]
    fn test_should_log_matches_rank_for_all_pairs() {
        for level in LogLevel::ALL {
            for minimum in LogLevel::ALL {
                assert_eq!(should_log(level, minimum), level.rank() >= minimum.rank());
            }
        }
    }

    #[test]
    fn test_parse_levels() {
        assert_eq!("warning".parse::<LogLevel>(), Ok(LogLevel::Warn));
        assert_eq!(" Debug ".parse::<LogLevel>(), Ok(LogLevel::Debug));
        assert_eq!("silent".parse::<LogLevel>(), Ok(LogLevel::Silent));
        assert!("verbose".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&LogLevel::Warn).unwrap();
        assert_eq!(json, "\"warn\"");
        let level: LogLevel = serde_json::from_str("\"error\"").unwrap();
        assert_eq!(level, LogLevel::Error);
    }
}
