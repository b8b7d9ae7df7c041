//! Environment-configured logger
//!
//! `Logger` owns one sink, chosen by [`Transport`], behind its own
//! `tracing` dispatcher. Records are handed to that dispatcher directly and
//! never go through the thread or global default, so several loggers can
//! coexist in one process, and a host subscriber may call into envlog from
//! its own callbacks.
//!
//! ```no_run
//! use envlog_core::{Log, Logger};
//!
//! // LOG_FILTER=debug LOG_TRANSPORT=file LOG_FILENAME=/var/log/app.log
//! let logger = Logger::from_env()?;
//! logger.info("listening on %s", &["0.0.0.0:8080".into()]);
//! logger.debug("suppressed by LOG_FILTER", &[]);
//! # Ok::<(), envlog_core::LoggerError>(())
//! ```

use std::error::Error;
use std::fmt::Write as _;

use tracing::Dispatch;
use tracing_subscriber::filter::filter_fn;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;

use super::console::console_writer;
use super::file_logger::FileSink;
use super::level::{Level, LevelSet};
use super::record::{dispatch_record, RecordFormat};
use super::traits::Log;
use super::writer::GuardedWriter;
use crate::config::{LogConfig, Transport};
use crate::error::LoggerResult;
use crate::format::{format_or_raw, Arg};

/// Leveled logger built from a [`LogConfig`]
#[derive(Debug)]
pub struct Logger {
    config: LogConfig,
    dispatch: Dispatch,
}

impl Logger {
    /// Build the sink named by `config`
    ///
    /// Configuration warnings (unknown filter levels, unknown transport) are
    /// logged once at warn level through the new sink.
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::OpenLogFile`](crate::LoggerError::OpenLogFile)
    /// if the file transport cannot open its file.
    pub fn new(config: LogConfig) -> LoggerResult<Self> {
        let dispatch = match config.transport() {
            Transport::Console => build_dispatch(config.filter(), console_writer(), true),
            Transport::File { filename } => {
                build_dispatch(config.filter(), FileSink::open(filename)?, false)
            }
        };

        Ok(Self::assemble(config, dispatch))
    }

    /// Build from the process environment
    pub fn from_env() -> LoggerResult<Self> {
        Self::new(LogConfig::from_env()?)
    }

    /// Build over a caller-supplied writer, ignoring the configured transport
    ///
    /// The level filter still applies. `ansi` controls level colors.
    pub fn with_writer<W>(config: LogConfig, writer: W, ansi: bool) -> Self
    where
        W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
    {
        let dispatch = build_dispatch(config.filter(), writer, ansi);
        Self::assemble(config, dispatch)
    }

    fn assemble(config: LogConfig, dispatch: Dispatch) -> Self {
        let logger = Self { config, dispatch };
        for warning in logger.config.warnings() {
            logger.warn(&warning.to_string(), &[]);
        }
        logger
    }

    /// Replace this logger with one built from `config`
    ///
    /// On error the current logger is left untouched.
    pub fn reset(&mut self, config: LogConfig) -> LoggerResult<()> {
        *self = Self::new(config)?;
        Ok(())
    }

    /// Re-read the process environment and rebuild
    pub fn reload_from_env(&mut self) -> LoggerResult<()> {
        self.reset(LogConfig::from_env()?)
    }

    pub fn config(&self) -> &LogConfig {
        &self.config
    }

    /// Whether records at `level` reach the sink
    pub fn is_enabled(&self, level: Level) -> bool {
        self.config.is_enabled(level)
    }

    fn emit(&self, level: Level, text: &str) {
        dispatch_record(&self.dispatch, level, text);
    }
}

impl Log for Logger {
    fn log(&self, level: Level, message: &str, args: &[Arg]) {
        if !self.is_enabled(level) {
            return;
        }
        self.emit(level, &format_or_raw(message, args));
    }

    fn error(&self, message: &str, err: Option<&dyn Error>) {
        if !self.is_enabled(Level::Error) {
            return;
        }

        let mut text = message.to_string();
        if let Some(err) = err {
            append_error_chain(&mut text, err);
        }
        self.emit(Level::Error, &text);
    }
}

/// `": <err>"`, then `"; caused by: <source>"` for each source
fn append_error_chain(text: &mut String, err: &dyn Error) {
    let _ = write!(text, ": {}", err);
    let mut source = err.source();
    while let Some(cause) = source {
        let _ = write!(text, "; caused by: {}", cause);
        source = cause.source();
    }
}

fn build_dispatch<W>(filter: LevelSet, writer: W, ansi: bool) -> Dispatch
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let levels = filter_fn(move |metadata| {
        Level::from_tracing(metadata.level()).is_some_and(|level| !filter.contains(level))
    });
    let layer = tracing_subscriber::fmt::layer()
        .with_ansi(ansi)
        .event_format(RecordFormat)
        .with_writer(GuardedWriter::new(writer));

    Dispatch::new(tracing_subscriber::registry().with(levels).with(layer))
}
