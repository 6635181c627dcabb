//! Timestamp formatting for log prefixes
//!
//! Supports ISO 8601, the local "locale" rendering, epoch seconds and
//! custom strftime formats.

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// How the `[timestamp]` segment of a log prefix is rendered
///
/// # Examples
///
/// ```
/// use contextual_logger::DateFormat;
/// use chrono::{TimeZone, Utc};
///
/// let at = Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).unwrap();
/// assert_eq!(DateFormat::Iso.format(&at), "2025-01-08T10:30:45.000Z");
/// assert_eq!(DateFormat::Epoch.format(&at), "1736332245");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateFormat {
    /// ISO 8601 in UTC with milliseconds: `2025-01-08T10:30:45.123Z`
    #[default]
    #[serde(alias = "ISO")]
    Iso,

    /// Local wall-clock time: `1/8/2025, 10:30:45 AM`
    Locale,

    /// Whole seconds since the Unix epoch: `1736332245`
    Epoch,

    /// Custom strftime format, rendered in UTC. A pattern chrono cannot
    /// render falls back to [`DateFormat::Iso`].
    Custom(String),
}

impl DateFormat {
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Utc>) -> String {
        match self {
            DateFormat::Iso => datetime.format(ISO_FORMAT).to_string(),
            DateFormat::Locale => datetime
                .with_timezone(&Local)
                .format("%-m/%-d/%Y, %-I:%M:%S %p")
                .to_string(),
            DateFormat::Epoch => datetime.timestamp().to_string(),
            DateFormat::Custom(format_str) => {
                let mut rendered = String::new();
                match write!(rendered, "{}", datetime.format(format_str)) {
                    Ok(()) => rendered,
                    Err(_) => datetime.format(ISO_FORMAT).to_string(),
                }
            }
        }
    }
}

const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";
