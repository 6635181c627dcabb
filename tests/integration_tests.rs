//! Integration tests for the logger backends
//!
//! These tests verify:
//! - Level gating end to end on the console backend
//! - Context chaining across every backend kind
//! - File rotation with real timestamps in the prefix
//! - Fan-out through a multi logger to mixed backends
//! - Fail-open behaviour of broken sinks

use contextual_logger::backends::file::backup_path;
use contextual_logger::backends::{
    CapturedStreams, ConsoleLogger, ConsoleStream, EventLogger, FileLogger, MemoryBus,
    MultiLogger, NullLogger,
};
use contextual_logger::config::{BackendKind, LoggerBuilder, LoggerConfig};
use contextual_logger::prelude::*;
use serde_json::json;
use std::fs;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

fn quiet_console(options: LoggerOptions) -> (SharedLogger, Arc<CapturedStreams>) {
    let streams = CapturedStreams::new();
    let logger: SharedLogger = Arc::new(ConsoleLogger::with_streams(options, streams.clone()));
    (logger, streams)
}

async fn wait_for_events(bus: &MemoryBus, count: usize) {
    tokio::time::timeout(Duration::from_secs(2), async {
        while bus.len() < count {
            tokio::task::yield_now().await;
        }
    })
    .await
    .expect("events were not published in time");
}

#[test]
fn test_console_warn_minimum_scenario() {
    let (logger, streams) = quiet_console(
        LoggerOptions::new()
            .with_level(LogLevel::Warn)
            .with_context("payments"),
    );

    logger.debug("x", &[]);
    logger.info("y", &[]);
    assert!(streams.is_empty(), "debug and info must be filtered");

    logger.warn("z", &[]);
    let lines = streams.lines();
    assert_eq!(lines.len(), 1);
    let (stream, line) = &lines[0];
    assert_eq!(*stream, ConsoleStream::Err);
    assert!(line.contains('z'));
    assert!(line.contains("payments"));
}

#[test]
fn test_console_timestamp_formats() {
    let (logger, streams) = quiet_console(
        LoggerOptions::new()
            .with_colorize(false)
            .with_date_format(DateFormat::Epoch),
    );
    logger.info("tick", &[]);

    let line = &streams.stdout()[0];
    let stamp = line
        .strip_prefix('[')
        .and_then(|rest| rest.split(']').next())
        .unwrap();
    assert!(stamp.parse::<i64>().is_ok(), "epoch timestamp expected, got {}", stamp);
    assert!(line.ends_with("[INFO] [app] tick"));
}

#[tokio::test]
async fn test_context_chaining_on_every_backend() {
    let dir = TempDir::new().unwrap();
    let bus = Arc::new(MemoryBus::new());
    let (console, _) = quiet_console(LoggerOptions::new().with_context("root"));

    let file: SharedLogger = Arc::new(
        FileLogger::new(
            LoggerOptions::new().with_context("root"),
            FileOptions::new(dir.path().join("chain.log")),
        )
        .unwrap(),
    );
    let event: SharedLogger =
        Arc::new(EventLogger::new(LoggerOptions::new().with_context("root"), bus.clone()).unwrap());
    let multi: SharedLogger = Arc::new(MultiLogger::new(
        LoggerOptions::new().with_context("root"),
        vec![console.clone(), file.clone()],
    ));

    for logger in [console, file, event, multi] {
        let grandchild = logger.child("c1").child("c2");
        assert_eq!(grandchild.context(), "root:c1:c2");
        assert_eq!(logger.context(), "root");
    }

    let null: SharedLogger = NullLogger::new();
    let null_child = null.child("c1").child("c2");
    assert!(Arc::ptr_eq(&null, &null_child));
}

#[test]
fn test_file_rotation_with_timestamps() {
    let dir = TempDir::new().unwrap();
    let log_path = dir.path().join("service.log");
    let logger = FileLogger::new(
        LoggerOptions::new().with_date_format(DateFormat::Custom("fixed".to_string())),
        FileOptions::new(&log_path).with_max_size(100).with_max_files(3),
    )
    .unwrap();

    // "[fixed] [INFO] [app] entry-N\n" is 29 bytes: three fit in 100, the fourth does not
    for n in 1..=3 {
        logger.info(&format!("entry-{}", n), &[]);
    }
    assert_eq!(logger.current_size(), 87);
    assert_eq!(logger.metrics().rotations(), 0);

    logger.info("entry-4", &[]);
    assert_eq!(logger.metrics().rotations(), 1);
    assert_eq!(
        fs::read_to_string(&log_path).unwrap(),
        "[fixed] [INFO] [app] entry-4\n"
    );
    let archived = fs::read_to_string(backup_path(&log_path, 1)).unwrap();
    assert_eq!(archived.lines().count(), 3);
    assert!(archived.starts_with("[fixed] [INFO] [app] entry-1"));

    logger.close().unwrap();
}

#[test]
fn test_file_reopen_continues_size_tracking() {
    let dir = TempDir::new().unwrap();
    let log_path = dir.path().join("service.log");
    let options = LoggerOptions::new().with_timestamp(false);

    {
        let logger = FileLogger::new(options.clone(), FileOptions::new(&log_path)).unwrap();
        logger.info("first run", &[]);
    }

    let logger = FileLogger::new(options, FileOptions::new(&log_path)).unwrap();
    let on_disk = fs::metadata(&log_path).unwrap().len();
    assert_eq!(logger.current_size(), on_disk);
    assert!(on_disk > 0);
}

#[tokio::test]
async fn test_multi_fans_out_to_mixed_backends() {
    let dir = TempDir::new().unwrap();
    let log_path = dir.path().join("multi.log");
    let bus = Arc::new(MemoryBus::new());
    let (console, streams) = quiet_console(LoggerOptions::new().with_colorize(false));

    let file: SharedLogger = Arc::new(
        FileLogger::new(
            LoggerOptions::new().with_timestamp(false),
            FileOptions::new(&log_path),
        )
        .unwrap(),
    );
    let event: SharedLogger = Arc::new(EventLogger::new(LoggerOptions::new(), bus.clone()).unwrap());

    let multi = LoggerBuilder::new()
        .backend(BackendKind::Multi)
        .context("edge")
        .delegates(vec![console, file, event])
        .build()
        .unwrap();

    let jobs = multi.child("jobs");
    jobs.error("job {id} failed", &[json!({ "id": 17 })]);

    assert_eq!(streams.stderr().len(), 1);
    assert!(streams.stderr()[0].contains("[app:jobs] job 17 failed"));

    let content = fs::read_to_string(&log_path).unwrap();
    assert_eq!(content, "[ERROR] [app:jobs] job 17 failed {\"id\":17}\n");

    wait_for_events(&bus, 1).await;
    let event = &bus.events()[0];
    assert_eq!(event.event_type, "logger.error");
    assert_eq!(event.source, "app:jobs");
    assert_eq!(event.data.message, "job 17 failed");
}

#[tokio::test]
async fn test_broken_sinks_never_reach_the_caller() {
    let dir = TempDir::new().unwrap();
    let bus = Arc::new(MemoryBus::new());
    bus.set_failing(true);

    let file = Arc::new(
        FileLogger::new(LoggerOptions::new(), FileOptions::new(dir.path().join("x.log"))).unwrap(),
    );
    file.close().unwrap();
    let event = Arc::new(EventLogger::new(LoggerOptions::new(), bus.clone()).unwrap());

    let multi = MultiLogger::new(
        LoggerOptions::new(),
        vec![file.clone() as SharedLogger, event.clone() as SharedLogger],
    );
    multi.error("goes nowhere", &[]);

    assert_eq!(file.metrics().dropped_count(), 1);
    tokio::time::timeout(Duration::from_secs(2), async {
        while event.metrics().dropped_count() < 1 {
            tokio::task::yield_now().await;
        }
    })
    .await
    .unwrap();
    assert!(bus.is_empty());
}

#[test]
fn test_config_driven_root_logger() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("from-config.log");
    let json = format!(
        r#"{{
            "backend": "file",
            "options": {{ "level": "warn", "context": "daemon", "timestamp": false }},
            "file": {{ "path": {}, "maxSize": 4096 }}
        }}"#,
        serde_json::to_string(&path).unwrap()
    );

    let config = LoggerConfig::from_json(&json)
        .unwrap()
        .apply_env([("LOG_LEVEL", "error")]);
    let logger = LoggerBuilder::from_config(config).build().unwrap();

    logger.warn("filtered by the env override", &[]);
    logger.error("kept", &[]);

    assert_eq!(fs::read_to_string(&path).unwrap(), "[ERROR] [daemon] kept\n");
}

#[test]
fn test_macros_on_shared_logger() {
    let (logger, streams) = quiet_console(
        LoggerOptions::new()
            .with_timestamp(false)
            .with_colorize(false)
            .with_level(LogLevel::Debug),
    );

    contextual_logger::debug!(logger, "step {} of {}", 1, 3);
    contextual_logger::info!(logger, "hello {who}"; json!({ "who": "world" }));

    assert_eq!(
        streams.stdout(),
        vec![
            "[DEBUG] [app] step 1 of 3".to_string(),
            r#"[INFO] [app] hello world {"who":"world"}"#.to_string(),
        ]
    );
}
