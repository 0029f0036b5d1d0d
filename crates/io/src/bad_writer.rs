//! Controlled-failure byte sink
//!
//! [`BadWriter`] accepts bytes until a cumulative budget is spent and then
//! fails on every further byte. The failure is created at most once (or
//! supplied up front) and the same instance is returned on every overflowing
//! call, so tests can assert identity.
//!
//! # Budget law
//!
//! For a budget `b` and any sequence of writes totalling `L` bytes, exactly
//! `min(L, b)` bytes are accepted. Once the budget is reached every
//! non-empty write accepts zero bytes and reports the stored failure.

use std::io;

use stagehand_core::StagehandError;
use tracing::debug;

use crate::failure::InjectedFailure;
use crate::shared::SharedBadWriter;

/// Result of a single [`BadWriter::write_partial`] call
#[derive(Debug, Clone)]
pub struct WriteOutcome {
    /// Bytes accepted by this call
    pub accepted: usize,
    /// Set when the call ran past the budget
    pub failure: Option<InjectedFailure>,
}

impl WriteOutcome {
    /// True if the call stayed within budget
    pub fn is_ok(&self) -> bool {
        self.failure.is_none()
    }
}

/// Byte sink that fails after a fixed number of bytes
#[derive(Debug, Default)]
pub struct BadWriter {
    /// Cumulative byte budget; 0 fails on the first non-empty write
    err_after_bytes: usize,
    /// Failure returned once the budget is exceeded
    error_value: Option<InjectedFailure>,
    /// Bytes accepted so far, never above `err_after_bytes`
    bytes_written: usize,
}

impl BadWriter {
    /// Create a writer that accepts `err_after_bytes` bytes before failing
    pub fn new(err_after_bytes: usize) -> Self {
        BadWriter {
            err_after_bytes,
            error_value: None,
            bytes_written: 0,
        }
    }

    /// Use `failure` instead of the default budget-exhausted error
    pub fn with_error(mut self, failure: InjectedFailure) -> Self {
        self.error_value = Some(failure);
        self
    }

    /// Configured byte budget
    pub fn budget(&self) -> usize {
        self.err_after_bytes
    }

    /// Bytes accepted so far
    pub fn bytes_written(&self) -> usize {
        self.bytes_written
    }

    /// The stored failure, if it was supplied or has been created
    pub fn error_value(&self) -> Option<&InjectedFailure> {
        self.error_value.as_ref()
    }

    /// Write `buf`, reporting the accepted count and any failure together.
    ///
    /// Unlike [`io::Write::write`] this can return a partial count *and* the
    /// failure from the same call.
    pub fn write_partial(&mut self, buf: &[u8]) -> WriteOutcome {
        let remaining = self.err_after_bytes.saturating_sub(self.bytes_written);

        if buf.len() <= remaining {
            self.bytes_written += buf.len();
            return WriteOutcome {
                accepted: buf.len(),
                failure: None,
            };
        }

        self.bytes_written = self.err_after_bytes;
        let budget = self.err_after_bytes;
        let failure = self
            .error_value
            .get_or_insert_with(|| {
                debug!(target: "stagehand::io", budget, "Write budget exhausted");
                InjectedFailure::new(StagehandError::BudgetExhausted { budget })
            })
            .clone();

        WriteOutcome {
            accepted: remaining,
            failure: Some(failure),
        }
    }

    /// Move this writer behind a cloneable handle
    pub fn shared(self) -> SharedBadWriter {
        SharedBadWriter::new(self)
    }
}

impl io::Write for BadWriter {
    /// Accepted bytes win over the failure: a call that lands some bytes
    /// returns `Ok(n)` and the failure surfaces on the next call.
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let outcome = self.write_partial(buf);
        match outcome.failure {
            Some(failure) if outcome.accepted == 0 => Err(failure.to_io_error()),
            _ => Ok(outcome.accepted),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
