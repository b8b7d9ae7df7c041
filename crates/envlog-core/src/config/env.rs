//! Process environment source

use std::env;

use super::traits::EnvSource;

/// Environment source backed by the process environment
///
/// Read-only. Empty values are treated the same as unset ones, so
/// `LOG_FILENAME=` counts as missing.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv {
    _private: (),
}

impl ProcessEnv {
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        env::var(key).ok().filter(|value| !value.is_empty())
    }
}
