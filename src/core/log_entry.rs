//! Log entry structure

use super::log_level::LogLevel;
use super::options::LoggerOptions;
use crate::format::{format_message, render_value, strip_ansi_color_codes, strip_colors};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use std::fmt::Write as _;

/// One emitted log call, after level gating and template formatting
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    pub level: LogLevel,
    /// Message with `{path}` placeholders resolved against `args[0]`
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub context: String,
    pub args: Vec<Value>,
}

impl LogEntry {
    /// Build an entry. When the first argument is a JSON object it is used as
    /// the template context; every argument is kept for the sink.
    pub fn new(level: LogLevel, message: &str, args: &[Value], context: &str) -> Self {
        let template_context = args.first().filter(|arg| arg.is_object());
        Self {
            level,
            message: format_message(message, template_context).into_owned(),
            timestamp: Utc::now(),
            context: context.to_string(),
            args: args.to_vec(),
        }
    }

    /// `[timestamp] [LEVEL] [context]`, without the timestamp segment when
    /// timestamps are disabled
    pub fn prefix(&self, options: &LoggerOptions) -> String {
        let mut prefix = String::with_capacity(48 + self.context.len());
        if options.timestamp {
            let _ = write!(
                prefix,
                "[{}] ",
                options.formatting.date_format.format(&self.timestamp)
            );
        }
        let _ = write!(prefix, "[{}] [{}]", self.level, self.context);
        prefix
    }

    /// Arguments as a console would show them: strings raw, everything else
    /// as compact JSON, each preceded by a space
    pub fn display_args(&self) -> String {
        self.args.iter().fold(String::new(), |mut out, arg| {
            out.push(' ');
            out.push_str(&render_value(arg));
            out
        })
    }

    /// Color-free copy of this entry for sinks that are not terminals
    #[must_use]
    pub fn stripped(&self) -> Self {
        Self {
            level: self.level,
            message: strip_ansi_color_codes(&self.message).into_owned(),
            timestamp: self.timestamp,
            context: strip_ansi_color_codes(&self.context).into_owned(),
            args: self.args.iter().map(strip_colors).collect(),
        }
    }
}
