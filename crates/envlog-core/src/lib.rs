//! envlog Core
//!
//! Leveled logging (debug/info/warn/error) configured from environment
//! variables, built on `tracing`.
//!
//! - `LOG_FILTER`: comma-separated levels to suppress, e.g. `info, debug`
//! - `LOG_TRANSPORT`: `console` (default) or `file`
//! - `LOG_FILENAME`: output path, required when `LOG_TRANSPORT=file`
//!
//! Build one [`Logger`] at startup and pass it (usually as a
//! [`SharedLogger`]) to the code that logs:
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use envlog_core::{log_info, Log, Logger, SharedLogger};
//!
//! fn main() -> Result<(), envlog_core::LoggerError> {
//!     // Fails here, not on the first log call, if LOG_TRANSPORT=file
//!     // is set without LOG_FILENAME
//!     let logger: SharedLogger = Arc::new(Logger::from_env()?);
//!
//!     logger.debug("test %s", &["me".into()]);
//!     log_info!(logger, "%d workers started", 4);
//!
//!     let err = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
//!     logger.error("there was an exception", Some(&err));
//!     Ok(())
//! }
//! ```
//!
//! Applications that prefer module-level calls can opt into the
//! process-wide handle in [`logging::global`].

pub mod config;
pub mod error;
pub mod format;
pub mod logging;

// Re-export commonly used types
pub use config::{
    LogConfig, Transport, ConfigWarning, ConfigError, ConfigResult,
    EnvSource, ProcessEnv, MemoryEnv,
};

pub use error::{LoggerError, LoggerResult};

pub use format::{Arg, FormatError, format_message, format_or_raw};

pub use logging::{
    Level, LevelSet, Log, Logger, SharedLogger, BoxedLogger,
    NoOpLogger, MemorySink, FileSink,
};

/// Serializes tests that touch `LOG_*` process variables
#[cfg(test)]
pub(crate) static ENV_LOCK: parking_lot::Mutex<()> = parking_lot::Mutex::new(());
