//! In-memory environment source

use std::collections::HashMap;

use parking_lot::RwLock;

use super::traits::EnvSource;

/// In-memory environment for testing
#[derive(Debug, Default)]
pub struct MemoryEnv {
    vars: RwLock<HashMap<String, String>>,
}

impl MemoryEnv {
    /// Create a new empty memory environment
    pub fn new() -> Self {
        Self {
            vars: RwLock::new(HashMap::new()),
        }
    }

    /// Builder-style variant of [`MemoryEnv::set`]
    pub fn with_var(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.write().insert(key.into(), value.into());
    }

    pub fn remove(&self, key: &str) -> Option<String> {
        self.vars.write().remove(key)
    }

    /// Remove every variable
    pub fn clear(&self) {
        self.vars.write().clear();
    }
}

impl EnvSource for MemoryEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars
            .read()
            .get(key)
            .filter(|value| !value.is_empty())
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_env() {
        let env = MemoryEnv::new().with_var("LOG_FILTER", "debug");
        assert_eq!(env.var("LOG_FILTER"), Some("debug".to_string()));
        assert_eq!(env.var("LOG_TRANSPORT"), None);

        env.set("LOG_TRANSPORT", "file");
        assert_eq!(env.var("LOG_TRANSPORT"), Some("file".to_string()));

        assert_eq!(env.remove("LOG_FILTER"), Some("debug".to_string()));
        assert_eq!(env.var("LOG_FILTER"), None);

        env.clear();
        assert_eq!(env.var("LOG_TRANSPORT"), None);
    }

    #[test]
    fn test_memory_env_empty_is_unset() {
        let env = MemoryEnv::new().with_var("LOG_FILENAME", "");
        assert_eq!(env.var("LOG_FILENAME"), None);
    }
}
