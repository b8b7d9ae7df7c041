//! Process-wide logger handle
//!
//! Opt-in: nothing is installed until [`init`] or [`install`] is called, and
//! the free logging functions are no-ops until then. Replacing the installed
//! logger is always explicit, through [`reload`].

use std::error::Error;
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;

use super::facade::Logger;
use super::traits::SharedLogger;
use crate::error::{LoggerError, LoggerResult};
use crate::format::Arg;

static GLOBAL: Lazy<RwLock<Option<SharedLogger>>> = Lazy::new(|| RwLock::new(None));

/// Build a logger from the process environment and install it
///
/// # Errors
///
/// Fails with [`LoggerError::AlreadyInitialized`] on a second call, or with
/// the construction error if the environment is misconfigured.
pub fn init() -> LoggerResult<SharedLogger> {
    let mut slot = GLOBAL.write();
    if slot.is_some() {
        return Err(LoggerError::AlreadyInitialized);
    }

    let logger: SharedLogger = Arc::new(Logger::from_env()?);
    *slot = Some(Arc::clone(&logger));
    Ok(logger)
}

/// Install a prebuilt logger
pub fn install(logger: SharedLogger) -> LoggerResult<()> {
    let mut slot = GLOBAL.write();
    if slot.is_some() {
        return Err(LoggerError::AlreadyInitialized);
    }
    *slot = Some(logger);
    Ok(())
}

/// Re-read the process environment and replace the installed logger
///
/// Works whether or not a logger was installed before. On error the
/// previous logger stays in place.
pub fn reload() -> LoggerResult<SharedLogger> {
    let logger: SharedLogger = Arc::new(Logger::from_env()?);
    *GLOBAL.write() = Some(Arc::clone(&logger));
    Ok(logger)
}

/// The installed logger, if any
pub fn get() -> Option<SharedLogger> {
    GLOBAL.read().clone()
}

/// Remove the installed logger (mainly for testing)
pub fn uninstall() -> Option<SharedLogger> {
    GLOBAL.write().take()
}

/// Log a debug message through the installed logger
pub fn debug(message: &str, args: &[Arg]) {
    if let Some(logger) = get() {
        logger.debug(message, args);
    }
}

/// Log an info message through the installed logger
pub fn info(message: &str, args: &[Arg]) {
    if let Some(logger) = get() {
        logger.info(message, args);
    }
}

/// Log a warning message through the installed logger
pub fn warn(message: &str, args: &[Arg]) {
    if let Some(logger) = get() {
        logger.warn(message, args);
    }
}

/// Log an error message through the installed logger
pub fn error(message: &str, err: Option<&dyn Error>) {
    if let Some(logger) = get() {
        logger.error(message, err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LogConfig;
    use crate::logging::MemorySink;
    use crate::ENV_LOCK;
    use std::env;

    fn clear_env() {
        env::remove_var("LOG_FILTER");
        env::remove_var("LOG_TRANSPORT");
        env::remove_var("LOG_FILENAME");
    }

    #[test]
    fn test_calls_before_init_are_noops() {
        let _guard = ENV_LOCK.lock();
        uninstall();

        debug("nobody listening", &[]);
        info("nobody listening", &[]);
        warn("nobody listening", &[]);
        error("nobody listening", None);
        assert!(get().is_none());
    }

    #[test]
    fn test_install_once() {
        let _guard = ENV_LOCK.lock();
        uninstall();

        let sink = MemorySink::new();
        let logger = Logger::with_writer(LogConfig::console(), sink.clone(), false);
        install(Arc::new(logger)).unwrap();

        info("through the handle %s", &["ok".into()]);
        assert!(sink.contents().ends_with("info: through the handle ok\n"));

        let again = Logger::with_writer(LogConfig::console(), MemorySink::new(), false);
        assert!(matches!(
            install(Arc::new(again)),
            Err(LoggerError::AlreadyInitialized)
        ));

        uninstall();
    }

    #[test]
    fn test_init_twice_fails() {
        let _guard = ENV_LOCK.lock();
        uninstall();
        clear_env();

        init().unwrap();
        assert!(matches!(init(), Err(LoggerError::AlreadyInitialized)));

        uninstall();
    }

    #[test]
    fn test_init_missing_filename() {
        let _guard = ENV_LOCK.lock();
        uninstall();
        clear_env();
        env::set_var("LOG_TRANSPORT", "file");

        let err = init().err().expect("init should fail");
        assert!(matches!(err, LoggerError::Config(_)));
        assert!(get().is_none());

        clear_env();
    }

    #[test]
    fn test_reload_rereads_filter() {
        let _guard = ENV_LOCK.lock();
        uninstall();
        clear_env();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("global.log");
        env::set_var("LOG_TRANSPORT", "file");
        env::set_var("LOG_FILENAME", &path);

        let logger = init().unwrap();
        assert!(get().is_some());
        info("first", &[]);

        env::set_var("LOG_FILTER", "info, debug");
        reload().unwrap();
        info("second", &[]);
        debug("third", &[]);
        warn("fourth", &[]);

        // The old handle keeps its own configuration
        logger.info("fifth", &[]);

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("info: first"));
        assert!(!contents.contains("second"));
        assert!(!contents.contains("third"));
        assert!(contents.contains("warn: fourth"));
        assert!(contents.contains("info: fifth"));

        uninstall();
        clear_env();
    }
}
