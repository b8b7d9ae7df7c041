//! File sink
//!
//! The log file is opened once, in append mode, when the logger is built and
//! held until the logger is dropped.

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing_subscriber::fmt::MakeWriter;

use crate::error::{LoggerError, LoggerResult};

/// Append-only log file shared by every record
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
    file: Arc<File>,
}

impl FileSink {
    /// Open `path` for appending, creating it if needed
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::OpenLogFile`] if the file cannot be opened.
    pub fn open(path: impl AsRef<Path>) -> LoggerResult<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| LoggerError::OpenLogFile {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(Self {
            path: path.to_path_buf(),
            file: Arc::new(file),
        })
    }

    /// Get the path to the log file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<'a> MakeWriter<'a> for FileSink {
    type Writer = &'a File;

    fn make_writer(&'a self) -> Self::Writer {
        &self.file
    }
}
