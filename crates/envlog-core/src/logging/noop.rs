//! No-op logger implementation

use std::error::Error;

use super::level::Level;
use super::traits::Log;
use crate::format::Arg;

/// A logger that does nothing
///
/// Useful for testing, or to hand to components when logging is not needed.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpLogger;

impl NoOpLogger {
    /// Create a new no-op logger
    pub fn new() -> Self {
        Self
    }
}

impl Log for NoOpLogger {
    fn log(&self, _level: Level, _message: &str, _args: &[Arg]) {}
    fn error(&self, _message: &str, _err: Option<&dyn Error>) {}
}
