//! Cloneable handle around a [`BadWriter`]
//!
//! Code under test often takes its writer by value (`Box<dyn Write>`,
//! `impl Write`). Handing it a [`SharedBadWriter`] clone leaves the test
//! holding another clone to inspect the counters and stored failure after
//! the writer has been consumed.

use std::io;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::bad_writer::{BadWriter, WriteOutcome};
use crate::failure::InjectedFailure;

/// Shared handle to one [`BadWriter`]
#[derive(Debug, Clone)]
pub struct SharedBadWriter {
    inner: Arc<Mutex<BadWriter>>,
}

impl SharedBadWriter {
    /// Wrap a writer
    pub fn new(writer: BadWriter) -> Self {
        SharedBadWriter {
            inner: Arc::new(Mutex::new(writer)),
        }
    }

    /// Bytes accepted so far across all clones
    pub fn bytes_written(&self) -> usize {
        self.inner.lock().bytes_written()
    }

    /// The stored failure, if any
    pub fn error_value(&self) -> Option<InjectedFailure> {
        self.inner.lock().error_value().cloned()
    }

    /// See [`BadWriter::write_partial`]
    pub fn write_partial(&self, buf: &[u8]) -> WriteOutcome {
        self.inner.lock().write_partial(buf)
    }
}

impl io::Write for SharedBadWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::Write::write(&mut *self.inner.lock(), buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        io::Write::flush(&mut *self.inner.lock())
    }
}
