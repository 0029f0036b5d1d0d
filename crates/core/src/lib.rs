//! Core types and traits for stagehand
//!
//! This crate defines the foundational pieces shared by the test doubles:
//! - Identifier: canonical hyphenated UUID used by scripted factories and temp paths
//! - IdSource: trait for anything that hands out unique identifiers
//! - Error: two-tier error enum (injected failures vs. contract violations)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod traits;
pub mod types;

pub use error::{fatal, or_fatal, StagehandError, StagehandResult};
pub use traits::{IdSource, RandomIds};
pub use types::{Identifier, IDENTIFIER_TEXT_LEN};
