//! Scripted identifier generation
//!
//! [`ScriptedIds`] replays a pre-declared sequence of identifiers, optionally
//! failing at chosen positions, so tests get predictable identifiers instead
//! of random ones.
//!
//! # Example
//!
//! ```
//! use stagehand_ids::ScriptedIds;
//!
//! let mut ids = ScriptedIds::parse([
//!     "ce8631ce-3b9d-4ac9-a9fa-d536d2e11a92",
//!     "ERROR",
//!     "367dfdd2-bccb-41db-8364-cc8dd10e9f2a",
//! ]);
//!
//! assert!(ids.try_next_id().is_ok());
//! assert!(ids.try_next_id().is_err());
//! assert!(ids.try_next_id().is_ok());
//! assert!(ids.all_consumed());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod script;

pub use script::{ScriptEntry, ScriptedIds, FAILURE_SENTINEL};
