//! Fault-injecting I/O doubles
//!
//! - [`BadWriter`]: a byte sink that fails deterministically once a cumulative
//!   byte budget is exceeded
//! - [`SharedBadWriter`]: cloneable handle so a test can keep inspecting a
//!   writer it handed to the code under test
//! - [`InjectedFailure`]: the shared failure value, compared by identity
//!
//! # Example
//!
//! ```
//! use std::io::Write;
//! use stagehand_io::BadWriter;
//!
//! let mut writer = BadWriter::new(5);
//! assert_eq!(writer.write(b"abc").unwrap(), 3);
//! assert_eq!(writer.write(b"def").unwrap(), 2);
//! assert!(writer.write(b"g").is_err());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod bad_writer;
mod failure;
mod shared;

pub use bad_writer::{BadWriter, WriteOutcome};
pub use failure::InjectedFailure;
pub use shared::SharedBadWriter;
