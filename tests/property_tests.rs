//! Property-based tests for contextual_logger using proptest

use contextual_logger::backends::{CapturedStreams, ConsoleLogger, NullLogger};
use contextual_logger::prelude::*;
use contextual_logger::{format_message, has_ansi_color_codes, strip_ansi_color_codes};
use proptest::prelude::*;
use serde_json::json;
use std::sync::Arc;

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop::sample::select(LogLevel::ALL.to_vec())
}

fn emitting_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Debug),
        Just(LogLevel::Info),
        Just(LogLevel::Warn),
        Just(LogLevel::Error),
    ]
}

fn ansi_code() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("\x1B[0m".to_string()),
        Just("\x1B[1m".to_string()),
        Just("\x1B[31m".to_string()),
        Just("\x1B[1;33m".to_string()),
        Just("\x1B[38;5;208m".to_string()),
    ]
}

/// Plain text interleaved with color escapes, plus the text alone
fn colored_text() -> impl Strategy<Value = (String, String)> {
    prop::collection::vec(("[a-zA-Z0-9 .:]{0,8}", ansi_code()), 0..6).prop_map(|parts| {
        let mut colored = String::new();
        let mut plain = String::new();
        for (text, code) in parts {
            colored.push_str(&code);
            colored.push_str(&text);
            plain.push_str(&text);
        }
        (colored, plain)
    })
}

// ============================================================================
// Level gating
// ============================================================================

proptest! {
    /// The gate is exactly the rank comparison
    #[test]
    fn test_should_log_is_rank_comparison(level in any_level(), minimum in any_level()) {
        prop_assert_eq!(should_log(level, minimum), level.rank() >= minimum.rank());
    }

    #[test]
    fn test_log_level_str_roundtrip(level in any_level()) {
        let parsed: LogLevel = level.as_str().parse().unwrap();
        prop_assert_eq!(level, parsed);

        let parsed: LogLevel = level.name().parse().unwrap();
        prop_assert_eq!(level, parsed);
    }

    /// A console logger emits a line exactly when the gate passes
    #[test]
    fn test_console_emits_iff_enabled(level in emitting_level(), minimum in any_level()) {
        let streams = CapturedStreams::new();
        let logger = ConsoleLogger::with_streams(
            LoggerOptions::new().with_level(minimum).with_colorize(false),
            streams.clone(),
        );
        logger.log(level, "gated", &[]);
        prop_assert_eq!(streams.lines().len() == 1, should_log(level, minimum));
    }

    #[test]
    fn test_nothing_is_emitted_at_silent(minimum in any_level()) {
        let streams = CapturedStreams::new();
        let logger = ConsoleLogger::with_streams(LoggerOptions::new().with_level(minimum), streams.clone());
        logger.log(LogLevel::Silent, "never", &[]);
        prop_assert!(streams.is_empty());
    }
}

// ============================================================================
// Child contexts
// ============================================================================

proptest! {
    #[test]
    fn test_child_context_chaining(
        root in "[a-z][a-z0-9_]{0,8}",
        first in "[a-z0-9_]{1,8}",
        second in "[a-z0-9_]{1,8}",
    ) {
        let logger: SharedLogger = Arc::new(ConsoleLogger::with_streams(
            LoggerOptions::new().with_context(root.clone()),
            CapturedStreams::new(),
        ));
        let child = logger.child(&first);
        let grandchild = child.child(&second);

        prop_assert_eq!(child.context(), format!("{}:{}", root, first));
        prop_assert_eq!(grandchild.context(), format!("{}:{}:{}", root, first, second));
        prop_assert_eq!(logger.context(), root.as_str());
        prop_assert_eq!(grandchild.options().level, logger.options().level);
    }

    #[test]
    fn test_null_child_is_identity(suffix in "[a-z:]{0,12}") {
        let null: SharedLogger = NullLogger::new();
        let child = null.child(&suffix);
        prop_assert!(Arc::ptr_eq(&null, &child));
    }
}

// ============================================================================
// Templates and color stripping
// ============================================================================

proptest! {
    /// Text without braces survives formatting untouched
    #[test]
    fn test_template_without_placeholders(text in "[^{}]{0,64}", value in "[a-z]{0,8}") {
        let context = json!({ "key": value });
        prop_assert_eq!(format_message(&text, Some(&context)), text.as_str());
        prop_assert_eq!(format_message(&text, None), text.as_str());
    }

    #[test]
    fn test_template_substitutes_known_keys(
        key in "[a-z_][a-z0-9_]{0,8}",
        value in "[a-zA-Z0-9 ]{0,16}",
        before in "[^{}]{0,16}",
        after in "[^{}]{0,16}",
    ) {
        let template = format!("{}{{{}}}{}", before, key, after);
        let mut fields = serde_json::Map::new();
        fields.insert(key, json!(value.clone()));
        let context = serde_json::Value::Object(fields);
        prop_assert_eq!(
            format_message(&template, Some(&context)),
            format!("{}{}{}", before, value, after)
        );
    }

    #[test]
    fn test_unknown_keys_are_left_verbatim(key in "[a-z]{1,8}") {
        let template = format!("value: {{{}}}", key);
        let context = json!({ "0unrelated": 1 });
        prop_assert_eq!(format_message(&template, Some(&context)), template.as_str());
    }

    #[test]
    fn test_strip_removes_every_color_code((colored, plain) in colored_text()) {
        let stripped = strip_ansi_color_codes(&colored);
        prop_assert!(!has_ansi_color_codes(&stripped));
        prop_assert_eq!(stripped.as_ref(), plain.as_str());
    }

    #[test]
    fn test_strip_is_idempotent((colored, _) in colored_text()) {
        let once = strip_ansi_color_codes(&colored).into_owned();
        let twice = strip_ansi_color_codes(&once);
        prop_assert_eq!(twice.as_ref(), once.as_str());
    }
}
