//! End-to-end behavior of loggers built from `LOG_*` variables

use std::env;
use std::fmt;
use std::fs;
use std::path::Path;

use envlog_core::logging::global;
use envlog_core::{ConfigError, Level, Log, Logger, LoggerError};
use parking_lot::Mutex;

static ENV: Mutex<()> = Mutex::new(());

fn set_env(filter: Option<&str>, transport: Option<&str>, filename: Option<&Path>) {
    match filter {
        Some(value) => env::set_var("LOG_FILTER", value),
        None => env::remove_var("LOG_FILTER"),
    }
    match transport {
        Some(value) => env::set_var("LOG_TRANSPORT", value),
        None => env::remove_var("LOG_TRANSPORT"),
    }
    match filename {
        Some(value) => env::set_var("LOG_FILENAME", value),
        None => env::remove_var("LOG_FILENAME"),
    }
}

#[derive(Debug)]
struct Timeout;

impl fmt::Display for Timeout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("upstream timed out")
    }
}

impl std::error::Error for Timeout {}

#[test]
fn test_unfiltered_levels_write_one_record_each() {
    let _guard = ENV.lock();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("all.log");
    set_env(None, Some("file"), Some(&path));

    let logger = Logger::from_env().unwrap();
    logger.debug("test %s", &["me".into()]);
    logger.info("things are happening", &[]);
    logger.warn("something bad is happening", &[]);
    logger.error("there was an exception", Some(&Timeout));
    set_env(None, None, None);

    let contents = fs::read_to_string(&path).unwrap();
    let lines: Vec<_> = contents.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].ends_with(" debug: test me"));
    assert!(lines[1].ends_with(" info: things are happening"));
    assert!(lines[2].ends_with(" warn: something bad is happening"));
    assert!(lines[3].contains("there was an exception"));
    assert!(lines[3].contains("upstream timed out"));
}

#[test]
fn test_filtered_levels_are_silent() {
    let _guard = ENV.lock();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("filtered.log");
    set_env(Some("debug,info,warn,error"), Some("file"), Some(&path));

    let logger = Logger::from_env().unwrap();
    for level in Level::ALL {
        assert!(!logger.is_enabled(level));
        logger.log(level, "never written", &[]);
    }
    logger.error("never written", Some(&Timeout));
    set_env(None, None, None);

    assert!(fs::read_to_string(&path).unwrap().is_empty());
}

#[test]
fn test_file_transport_requires_filename() {
    let _guard = ENV.lock();
    set_env(None, Some("file"), None);

    let result = Logger::from_env();
    set_env(None, None, None);

    assert!(matches!(
        result,
        Err(LoggerError::Config(ConfigError::MissingFilename))
    ));
}

#[test]
fn test_reload_picks_up_new_filter() {
    let _guard = ENV.lock();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("reload.log");
    set_env(None, Some("file"), Some(&path));

    let mut logger = Logger::from_env().unwrap();
    logger.info("before reload", &[]);
    logger.debug("before reload", &[]);

    env::set_var("LOG_FILTER", "info, debug");
    logger.reload_from_env().unwrap();
    logger.info("after reload", &[]);
    logger.debug("after reload", &[]);
    logger.warn("warn after reload", &[]);
    logger.error("error after reload", None);
    set_env(None, None, None);

    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(contents.matches("before reload").count(), 2);
    assert!(!contents.contains(": after reload"));
    assert!(contents.contains("warn: warn after reload"));
    assert!(contents.contains("error: error after reload"));
}

#[test]
fn test_global_reload() {
    let _guard = ENV.lock();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("global.log");
    set_env(None, Some("file"), Some(&path));

    global::uninstall();
    global::info("dropped before init", &[]);
    global::init().unwrap();
    global::info("first", &[]);

    env::set_var("LOG_FILTER", "info");
    global::reload().unwrap();
    global::info("second", &[]);
    global::warn("third", &[]);
    global::uninstall();
    set_env(None, None, None);

    let contents = fs::read_to_string(&path).unwrap();
    assert!(!contents.contains("dropped before init"));
    assert!(contents.contains("info: first"));
    assert!(!contents.contains("second"));
    assert!(contents.contains("warn: third"));
}
