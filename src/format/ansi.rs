//! ANSI color code detection and removal
//!
//! Recognizes the CSI "select graphic rendition" family `ESC [ n ( ; n )* m`,
//! which covers colors and styles such as bold, underline and reset.

use regex::Regex;
use serde_json::Value;
use std::borrow::Cow;
use std::sync::OnceLock;

fn sgr_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\x1B\[\d+(?:;\d+)*m").expect("SGR pattern is a valid regex")
    })
}

pub fn has_ansi_color_codes(s: &str) -> bool {
    sgr_pattern().is_match(s)
}

/// Remove every color/style escape from `s`.
///
/// ```
/// use contextual_logger::format::strip_ansi_color_codes;
///
/// let s = "\x1B[1mThis is\x1B[34m blue and bold\x1B[0m";
/// assert_eq!(strip_ansi_color_codes(s), "This is blue and bold");
/// ```
pub fn strip_ansi_color_codes(s: &str) -> Cow<'_, str> {
    sgr_pattern().replace_all(s, "")
}

/// Deep variant: strips every string inside nested arrays and objects.
///
/// Numbers, booleans and `null` come back unchanged. Object keys are kept as is.
pub fn strip_colors(value: &Value) -> Value {
    match value {
        Value::String(s) => Value::String(strip_ansi_color_codes(s).into_owned()),
        Value::Array(items) => Value::Array(items.iter().map(strip_colors).collect()),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, v)| (key.clone(), strip_colors(v)))
                .collect(),
        ),
        other => other.clone(),
    }
}
