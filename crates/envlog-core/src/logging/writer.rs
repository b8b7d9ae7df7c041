//! Sink writers
//!
//! `GuardedWriter` wraps any `MakeWriter` so that a failing sink never
//! reaches application code. `MemorySink` collects output for tests.

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::Metadata;
use tracing_subscriber::fmt::MakeWriter;

/// Swallows write errors, reporting the first one on stderr
#[derive(Debug)]
pub struct GuardedWriter<M> {
    inner: M,
    failed: Arc<AtomicBool>,
}

impl<M> GuardedWriter<M> {
    pub fn new(inner: M) -> Self {
        Self {
            inner,
            failed: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Handle that turns `true` once any write has failed
    pub fn failure_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.failed)
    }
}

impl<'a, M: MakeWriter<'a>> MakeWriter<'a> for GuardedWriter<M> {
    type Writer = Guarded<'a, M::Writer>;

    fn make_writer(&'a self) -> Self::Writer {
        Guarded {
            inner: self.inner.make_writer(),
            failed: &self.failed,
        }
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        Guarded {
            inner: self.inner.make_writer_for(meta),
            failed: &self.failed,
        }
    }
}

/// Writer handed out by [`GuardedWriter`]
pub struct Guarded<'a, W> {
    inner: W,
    failed: &'a AtomicBool,
}

impl<W> Guarded<'_, W> {
    fn report(&self, err: &io::Error) {
        if !self.failed.swap(true, Ordering::Relaxed) {
            // Best effort; a broken stderr has nowhere left to report to
            let _ = writeln!(
                io::stderr(),
                "envlog: log sink write failed, dropping records: {}",
                err
            );
        }
    }
}

impl<W: Write> Write for Guarded<'_, W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self.inner.write(buf) {
            Ok(n) => Ok(n),
            Err(e) => {
                self.report(&e);
                Ok(buf.len())
            }
        }
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        if let Err(e) = self.inner.write_all(buf) {
            self.report(&e);
        }
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        if let Err(e) = self.inner.flush() {
            self.report(&e);
        }
        Ok(())
    }
}

/// Shared in-memory buffer sink for testing
///
/// Clones share the same buffer, so keep one clone and hand the other to
/// [`Logger::with_writer`](super::Logger::with_writer).
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buf.lock()).into_owned()
    }

    /// Written output split into lines
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }

    pub fn clear(&self) {
        self.buf.lock().clear();
    }
}

impl Write for MemorySink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for MemorySink {
    type Writer = MemorySink;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
