//! Log levels and level sets

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Log levels, ordered by severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Debug = 0,
    Info = 1,
    Warn = 2,
    Error = 3,
}

impl Level {
    /// Every level, least severe first
    pub const ALL: [Level; 4] = [Level::Debug, Level::Info, Level::Warn, Level::Error];

    /// Lowercase level name, as used in `LOG_FILTER` and in output
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
        }
    }

    fn to_tracing(self) -> tracing::Level {
        match self {
            Level::Debug => tracing::Level::DEBUG,
            Level::Info => tracing::Level::INFO,
            Level::Warn => tracing::Level::WARN,
            Level::Error => tracing::Level::ERROR,
        }
    }

    /// Map a `tracing` level back; `TRACE` has no counterpart.
    pub(crate) fn from_tracing(level: &tracing::Level) -> Option<Self> {
        Level::ALL
            .into_iter()
            .find(|candidate| candidate.to_tracing() == *level)
    }

    fn bit(self) -> u8 {
        1 << self as u8
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Returned when a string names no known level
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown log level: {0}")]
pub struct ParseLevelError(pub String);

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "warn" => Ok(Level::Warn),
            "error" => Ok(Level::Error),
            _ => Err(ParseLevelError(s.trim().to_string())),
        }
    }
}

/// A small set of levels
///
/// Used as the suppression filter: membership, not a threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LevelSet {
    bits: u8,
}

impl LevelSet {
    /// The empty set
    pub const fn empty() -> Self {
        Self { bits: 0 }
    }

    /// Add a level, returning `true` if it was not present yet
    pub fn insert(&mut self, level: Level) -> bool {
        let added = !self.contains(level);
        self.bits |= level.bit();
        added
    }

    pub fn contains(&self, level: Level) -> bool {
        self.bits & level.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Members in severity order
    pub fn iter(&self) -> impl Iterator<Item = Level> + '_ {
        Level::ALL.into_iter().filter(move |level| self.contains(*level))
    }
}

impl FromIterator<Level> for LevelSet {
    fn from_iter<I: IntoIterator<Item = Level>>(iter: I) -> Self {
        let mut set = LevelSet::empty();
        for level in iter {
            set.insert(level);
        }
        set
    }
}

impl<const N: usize> From<[Level; N]> for LevelSet {
    fn from(levels: [Level; N]) -> Self {
        levels.into_iter().collect()
    }
}
