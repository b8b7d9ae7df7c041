//! Log configuration loaded from environment variables
//!
//! | Variable        | Meaning                                          |
//! |-----------------|--------------------------------------------------|
//! | `LOG_FILTER`    | Comma-separated levels to suppress (`info, debug`) |
//! | `LOG_TRANSPORT` | `console` (default) or `file`                    |
//! | `LOG_FILENAME`  | Output path, required when `LOG_TRANSPORT=file`  |

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::logging::{Level, LevelSet};
use super::env::ProcessEnv;
use super::traits::{ConfigError, ConfigResult, EnvSource};

pub const FILTER_VAR: &str = "LOG_FILTER";
pub const TRANSPORT_VAR: &str = "LOG_TRANSPORT";
pub const FILENAME_VAR: &str = "LOG_FILENAME";

/// Where log records go
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Transport {
    /// Timestamped, colorized lines on stdout (debug, info) and stderr (warn, error)
    Console,
    /// Timestamped plain lines appended to `filename`
    File { filename: PathBuf },
}

impl Transport {
    pub fn name(&self) -> &'static str {
        match self {
            Transport::Console => "console",
            Transport::File { .. } => "file",
        }
    }

    /// Output path for the file transport
    pub fn filename(&self) -> Option<&Path> {
        match self {
            Transport::Console => None,
            Transport::File { filename } => Some(filename),
        }
    }
}

/// Something the loader accepted but did not understand
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// A `LOG_FILTER` entry that names no level
    UnknownLevel(String),
    /// A `LOG_TRANSPORT` value other than `console` or `file`
    UnknownTransport(String),
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigWarning::UnknownLevel(name) => {
                write!(f, "ignoring unknown level `{}` in {}", name, FILTER_VAR)
            }
            ConfigWarning::UnknownTransport(name) => {
                write!(f, "unknown {} `{}`, using console", TRANSPORT_VAR, name)
            }
        }
    }
}

/// Immutable logger configuration
///
/// # Example
///
/// ```
/// use envlog_core::config::{LogConfig, MemoryEnv, Transport};
/// use envlog_core::Level;
///
/// let env = MemoryEnv::new().with_var("LOG_FILTER", "info, debug");
/// let config = LogConfig::load(&env).unwrap();
///
/// assert!(!config.is_enabled(Level::Info));
/// assert!(config.is_enabled(Level::Warn));
/// assert_eq!(config.transport(), &Transport::Console);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    filter: LevelSet,
    transport: Transport,
    warnings: Vec<ConfigWarning>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::console()
    }
}

impl LogConfig {
    /// Console transport, nothing filtered
    pub fn console() -> Self {
        Self {
            filter: LevelSet::empty(),
            transport: Transport::Console,
            warnings: Vec::new(),
        }
    }

    /// File transport, nothing filtered
    pub fn file(filename: impl Into<PathBuf>) -> Self {
        Self {
            filter: LevelSet::empty(),
            transport: Transport::File {
                filename: filename.into(),
            },
            warnings: Vec::new(),
        }
    }

    /// Suppress the given levels
    pub fn with_filter(mut self, levels: impl IntoIterator<Item = Level>) -> Self {
        self.filter = levels.into_iter().collect();
        self
    }

    /// Load from the process environment
    pub fn from_env() -> ConfigResult<Self> {
        Self::load(&ProcessEnv::new())
    }

    /// Load from an environment source
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingFilename`] when the transport is `file`
    /// and `LOG_FILENAME` is unset.
    pub fn load(env: &dyn EnvSource) -> ConfigResult<Self> {
        let (filter, mut warnings) = parse_filter(env.var(FILTER_VAR).as_deref().unwrap_or(""));

        let transport = match env.var(TRANSPORT_VAR) {
            None => Transport::Console,
            Some(raw) => match raw.trim().to_ascii_lowercase().as_str() {
                "" | "console" => Transport::Console,
                "file" => {
                    let filename = env
                        .var(FILENAME_VAR)
                        .filter(|name| !name.trim().is_empty())
                        .ok_or(ConfigError::MissingFilename)?;
                    Transport::File {
                        filename: PathBuf::from(filename),
                    }
                }
                _ => {
                    warnings.push(ConfigWarning::UnknownTransport(raw.trim().to_string()));
                    Transport::Console
                }
            },
        };

        Ok(Self {
            filter,
            transport,
            warnings,
        })
    }

    /// Levels that never produce output
    pub fn filter(&self) -> LevelSet {
        self.filter
    }

    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    pub fn warnings(&self) -> &[ConfigWarning] {
        &self.warnings
    }

    pub fn is_enabled(&self, level: Level) -> bool {
        !self.filter.contains(level)
    }
}

/// Parse a `LOG_FILTER` value
///
/// Entries are trimmed and matched case-insensitively. Empty entries are
/// skipped. Unknown names are returned as warnings instead of failing.
pub fn parse_filter(raw: &str) -> (LevelSet, Vec<ConfigWarning>) {
    let mut set = LevelSet::empty();
    let mut warnings = Vec::new();

    for entry in raw.split(',').map(str::trim).filter(|entry| !entry.is_empty()) {
        match entry.parse::<Level>() {
            Ok(level) => {
                set.insert(level);
            }
            Err(_) => warnings.push(ConfigWarning::UnknownLevel(entry.to_string())),
        }
    }

    (set, warnings)
}
