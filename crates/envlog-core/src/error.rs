//! Logger construction errors

use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;

/// Errors that can occur while building or installing a logger
///
/// Only construction fails. Logging calls never return errors.
#[derive(Error, Debug)]
pub enum LoggerError {
    /// Invalid configuration
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The file transport could not open its output
    #[error("failed to open log file {}: {source}", .path.display())]
    OpenLogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A process-wide logger is already installed
    #[error("logger already initialized")]
    AlreadyInitialized,
}

pub type LoggerResult<T> = Result<T, LoggerError>;
