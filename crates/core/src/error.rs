//! Error types for stagehand
//!
//! Every test double reports through [`StagehandError`]. The variants split
//! into two tiers:
//!
//! - **Injected failures** are the conditions a test is trying to exercise
//!   (a sink running out of budget, a scripted identifier slot marked to
//!   fail). They are returned as values.
//! - **Contract violations** mean the test itself is misconfigured (an
//!   uninitialized temp dir, an over-consumed script, a malformed fixture).
//!   The panicking entry points escalate them through [`fatal`].
//!
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for stagehand operations
pub type StagehandResult<T> = std::result::Result<T, StagehandError>;

/// Error types for the stagehand test doubles
#[derive(Debug, Error)]
pub enum StagehandError {
    /// I/O error from real filesystem work
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Identifier string is not in canonical hyphenated form
    #[error("invalid identifier {input:?}: {reason}")]
    InvalidIdentifier {
        /// The rejected input
        input: String,
        /// Why it was rejected
        reason: String,
    },

    /// More identifiers were requested than the script declared
    #[error("unexpected identifier request: script already served all {consumed} entries")]
    ScriptExhausted {
        /// Number of entries consumed before the extra request
        consumed: usize,
    },

    /// A scripted slot was marked to fail
    #[error("injected identifier failure at script position {position}")]
    InjectedIdFailure {
        /// Zero-based script position that failed
        position: usize,
    },

    /// Temp-dir operation issued outside the initialized state
    #[error("temp dir is not initialized, call init() first")]
    NotInitialized,

    /// init() called on a temp dir that is already initialized
    #[error("temp dir is already initialized at {base:?}, call cleanup() first")]
    AlreadyInitialized {
        /// Current base directory
        base: PathBuf,
    },

    /// The platform temporary root cannot be used
    #[error("temp root {path:?} unavailable: {reason}")]
    TempRootUnavailable {
        /// The queried temporary root
        path: PathBuf,
        /// Why it cannot be used
        reason: String,
    },

    /// A controlled-failure sink ran past its byte budget
    #[error("write budget of {budget} bytes exhausted")]
    BudgetExhausted {
        /// Configured byte budget
        budget: usize,
    },

    /// Configuration could not be parsed
    #[error("configuration error: {0}")]
    Config(String),
}

impl StagehandError {
    /// Create an invalid identifier error
    pub fn invalid_identifier(input: impl Into<String>, reason: impl Into<String>) -> Self {
        StagehandError::InvalidIdentifier {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create a temp root error
    pub fn temp_root(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        StagehandError::TempRootUnavailable {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// True for errors that indicate a misconfigured test rather than a
    /// condition under test.
    pub fn is_contract_violation(&self) -> bool {
        !matches!(
            self,
            StagehandError::InjectedIdFailure { .. } | StagehandError::BudgetExhausted { .. }
        )
    }
}

/// Abort the current test with a contract violation.
///
/// The Rust test harness reports the panic as a hard failure of the running
/// test, which is the behavior every fatal path in this workspace relies on.
#[track_caller]
pub fn fatal(err: StagehandError) -> ! {
    panic!("{}", err)
}

/// Unwrap a result or abort the current test with its error.
#[track_caller]
pub fn or_fatal<T>(result: StagehandResult<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => fatal(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_io() {
        let err = StagehandError::Io(io::Error::new(io::ErrorKind::NotFound, "file not found"));
        let msg = format!("{}", err);
        assert!(msg.contains("I/O error"));
        assert!(msg.contains("file not found"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let err: StagehandError = io_err.into();
        assert!(matches!(err, StagehandError::Io(_)));
    }

    #[test]
    fn test_error_display_script_exhausted() {
        let err = StagehandError::ScriptExhausted { consumed: 3 };
        assert_eq!(
            err.to_string(),
            "unexpected identifier request: script already served all 3 entries"
        );
    }

    #[test]
    fn test_contract_violation_tiers() {
        assert!(StagehandError::NotInitialized.is_contract_violation());
        assert!(StagehandError::AlreadyInitialized { base: "/tmp/x".into() }.is_contract_violation());
        assert!(StagehandError::ScriptExhausted { consumed: 0 }.is_contract_violation());
        assert!(StagehandError::invalid_identifier("x", "too short").is_contract_violation());
        assert!(StagehandError::temp_root("/nope", "missing").is_contract_violation());

        assert!(!StagehandError::InjectedIdFailure { position: 1 }.is_contract_violation());
        assert!(!StagehandError::BudgetExhausted { budget: 5 }.is_contract_violation());
    }

    #[test]
    fn test_or_fatal_passes_value_through() {
        let value = or_fatal(Ok::<_, StagehandError>(7));
        assert_eq!(value, 7);
    }

    #[test]
    #[should_panic(expected = "temp dir is not initialized")]
    fn test_or_fatal_panics_with_error_message() {
        or_fatal::<()>(Err(StagehandError::NotInitialized));
    }
}
