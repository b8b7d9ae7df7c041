//! Log trait definition

use std::error::Error;
use std::sync::Arc;

use super::level::Level;
use crate::format::Arg;

/// Leveled logging abstraction
///
/// Implementations:
/// - `Logger`: Environment-configured console or file logger
/// - `NoOpLogger`: Silent logger for testing
///
/// None of the methods return errors or panic. A failed sink write is
/// dropped, never surfaced to the caller.
pub trait Log: Send + Sync {
    /// Log `message` at `level`, substituting printf-style `args`
    fn log(&self, level: Level, message: &str, args: &[Arg]);

    /// Log an error message, appending `err` and its source chain
    fn error(&self, message: &str, err: Option<&dyn Error>);

    /// Log a debug message
    fn debug(&self, message: &str, args: &[Arg]) {
        self.log(Level::Debug, message, args);
    }

    /// Log an info message
    fn info(&self, message: &str, args: &[Arg]) {
        self.log(Level::Info, message, args);
    }

    /// Log a warning message
    fn warn(&self, message: &str, args: &[Arg]) {
        self.log(Level::Warn, message, args);
    }
}

/// Type alias for a boxed logger
pub type BoxedLogger = Box<dyn Log>;

/// Type alias for an Arc-wrapped logger
pub type SharedLogger = Arc<dyn Log>;

/// Convenience macros for logging with positional arguments
///
/// ```
/// use envlog_core::{log_debug, LogConfig, Logger, MemorySink};
///
/// let sink = MemorySink::new();
/// let logger = Logger::with_writer(LogConfig::console(), sink.clone(), false);
///
/// log_debug!(logger, "test %s", "me");
/// assert!(sink.contents().ends_with("debug: test me\n"));
/// ```
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $msg:expr $(, $arg:expr)* $(,)?) => {
        {
            use $crate::Log as _;
            $logger.log($crate::Level::Debug, $msg, &[$($crate::Arg::from($arg)),*])
        }
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $msg:expr $(, $arg:expr)* $(,)?) => {
        {
            use $crate::Log as _;
            $logger.log($crate::Level::Info, $msg, &[$($crate::Arg::from($arg)),*])
        }
    };
}

#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $msg:expr $(, $arg:expr)* $(,)?) => {
        {
            use $crate::Log as _;
            $logger.log($crate::Level::Warn, $msg, &[$($crate::Arg::from($arg)),*])
        }
    };
}

/// Error-level counterpart of `log_info!`
///
/// Takes format arguments. Use [`Log::error`] to attach an error value.
#[macro_export]
macro_rules! log_error {
    ($logger:expr, $msg:expr $(, $arg:expr)* $(,)?) => {
        {
            use $crate::Log as _;
            $logger.log($crate::Level::Error, $msg, &[$($crate::Arg::from($arg)),*])
        }
    };
}
