//! Configuration loading from environment variables

mod traits;
mod env;
mod memory;
mod loader;

pub use traits::{EnvSource, ConfigError, ConfigResult};
pub use env::ProcessEnv;
pub use memory::MemoryEnv;
pub use loader::{
    LogConfig, Transport, ConfigWarning, parse_filter,
    FILTER_VAR, TRANSPORT_VAR, FILENAME_VAR,
};
