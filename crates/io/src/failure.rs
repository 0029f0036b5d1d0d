//! Shared failure value for fault injection
//!
//! Tests assert that a sink keeps returning *the same* failure, not just an
//! equal one. [`InjectedFailure`] holds the error behind an `Arc` so every
//! clone points at one allocation, and [`InjectedFailure::same_as`] compares
//! by address.

use std::error::Error;
use std::fmt;
use std::io;
use std::sync::Arc;

/// Failure reported by a fault-injecting double
#[derive(Clone)]
pub struct InjectedFailure(Arc<dyn Error + Send + Sync>);

impl InjectedFailure {
    /// Wrap an existing error
    pub fn new<E>(err: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self(Arc::new(err))
    }

    /// Create a failure from a plain message
    pub fn msg(message: impl Into<String>) -> Self {
        let boxed: Box<dyn Error + Send + Sync> = message.into().into();
        Self(Arc::from(boxed))
    }

    /// True if both values share the same underlying error instance
    pub fn same_as(&self, other: &InjectedFailure) -> bool {
        std::ptr::eq(
            Arc::as_ptr(&self.0) as *const (),
            Arc::as_ptr(&other.0) as *const (),
        )
    }

    /// Borrow the wrapped error
    pub fn inner(&self) -> &(dyn Error + Send + Sync + 'static) {
        &*self.0
    }

    /// Convert into an `io::Error` that still carries this instance
    pub fn to_io_error(&self) -> io::Error {
        io::Error::new(io::ErrorKind::Other, self.clone())
    }

    /// Recover the shared instance from an `io::Error` produced by
    /// [`InjectedFailure::to_io_error`]
    pub fn from_io(err: &io::Error) -> Option<&InjectedFailure> {
        err.get_ref()?.downcast_ref::<InjectedFailure>()
    }
}

impl fmt::Debug for InjectedFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("InjectedFailure").field(&self.0).finish()
    }
}

impl fmt::Display for InjectedFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Error for InjectedFailure {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.0.source()
    }
}
