//! `{dotted.path}` message templates
//!
//! Placeholders are resolved against a JSON context object. Anything that
//! cannot be resolved is left in the output verbatim, so a bad template never
//! loses information and never fails.

use regex::{Captures, Regex};
use serde::Serialize;
use serde_json::Value;
use std::borrow::Cow;
use std::sync::OnceLock;

fn placeholder_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        // `{` identifier (`.` identifier)* `}`
        Regex::new(r"\{([A-Za-z0-9_$]+(?:\.[A-Za-z0-9_$]+)*)\}")
            .expect("placeholder pattern is a valid regex")
    })
}

/// Render `template` against `context`.
///
/// - no context: the template is returned unchanged
/// - missing field or non-object intermediate: the `{path}` token is kept
/// - `null`: rendered as `null`
/// - objects and arrays: compact JSON
///
/// # Examples
///
/// ```
/// use contextual_logger::format::format_message;
/// use serde_json::json;
///
/// let ctx = json!({ "name": "John", "ip": "1.2.3.4" });
/// assert_eq!(format_message("User {name} from {ip}", Some(&ctx)), "User John from 1.2.3.4");
/// assert_eq!(format_message("Hi {x}", Some(&json!({ "y": 1 }))), "Hi {x}");
/// ```
pub fn format_message<'a>(template: &'a str, context: Option<&Value>) -> Cow<'a, str> {
    let Some(context) = context else {
        return Cow::Borrowed(template);
    };

    placeholder_pattern().replace_all(template, |caps: &Captures<'_>| {
        match resolve_path(context, &caps[1]) {
            Some(value) => render_value(value),
            None => caps[0].to_string(),
        }
    })
}

/// Like [`format_message`] for any serializable context.
///
/// A context that fails to serialize leaves the template untouched.
pub fn format_message_with<'a, T: Serialize + ?Sized>(template: &'a str, context: &T) -> Cow<'a, str> {
    match serde_json::to_value(context) {
        Ok(value) => Cow::Owned(format_message(template, Some(&value)).into_owned()),
        Err(_) => Cow::Borrowed(template),
    }
}

fn resolve_path<'v>(context: &'v Value, path: &str) -> Option<&'v Value> {
    path.split('.').try_fold(context, |current, segment| match current {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}

/// Default string rendering of a resolved value
pub fn render_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => {
            serde_json::to_string(value).unwrap_or_else(|_| value.to_string())
        }
    }
}
