//! Leveled logging over `tracing`
//!
//! `Logger` is the facade: it checks the level filter, formats the message
//! and hands one event straight to its own `tracing` dispatcher, whose fmt layer
//! writes to the console or file sink.

mod level;
mod traits;
mod noop;
mod console;
mod record;
mod writer;
mod facade;
pub mod file_logger;
pub mod global;

pub use level::{Level, LevelSet, ParseLevelError};
pub use traits::{Log, BoxedLogger, SharedLogger};
pub use noop::NoOpLogger;
pub use writer::{GuardedWriter, MemorySink};
pub use facade::Logger;
pub use record::TARGET;
pub use file_logger::FileSink;
