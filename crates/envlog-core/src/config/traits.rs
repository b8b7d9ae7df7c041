//! Environment source trait

/// Source of environment-style key/value settings
///
/// Implementations:
/// - `ProcessEnv`: Reads the process environment
/// - `MemoryEnv`: In-memory for testing
pub trait EnvSource: Send + Sync {
    /// Get a variable, or `None` if it is unset or empty
    fn var(&self, key: &str) -> Option<String>;
}

impl<T: EnvSource + ?Sized> EnvSource for &T {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}

/// Errors that can occur while loading the log configuration
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("LOG_TRANSPORT is `file` but LOG_FILENAME is not set")]
    MissingFilename,
}

pub type ConfigResult<T> = Result<T, ConfigError>;
