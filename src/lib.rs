//! Stagehand - deterministic test doubles
//!
//! Stagehand reproduces runtime conditions that are otherwise
//! non-deterministic or hard to trigger, so tests can exercise them on
//! demand:
//!
//! - [`BadWriter`]: a byte sink that fails after a fixed byte budget
//! - [`ScriptedIds`]: identifiers replayed from a script, with injected
//!   failures at chosen positions
//! - [`SuiteTempDir`]: an isolated, self-cleaning temp directory per suite
//!
//! # Quick Start
//!
//! ```
//! use std::io::Write;
//! use stagehand::{BadWriter, InjectedFailure, ScriptedIds, SuiteTempDir, TempDirConfig};
//!
//! // A writer that fails after 4 bytes
//! let mut sink = BadWriter::new(4);
//! let err = sink.write_all(b"hello").unwrap_err();
//! assert!(InjectedFailure::from_io(&err).is_some());
//!
//! // Temp paths named from a script
//! let ids = ScriptedIds::parse(["ce8631ce-3b9d-4ac9-a9fa-d536d2e11a92"]);
//! let mut temp = SuiteTempDir::with_id_source(TempDirConfig::default(), ids);
//! temp.init("quick_start");
//! let path = temp.file_path();
//! assert!(path.ends_with("ce8631ce-3b9d-4ac9-a9fa-d536d2e11a92"));
//! temp.cleanup();
//! ```
//!
//! # Errors
//!
//! Modeled failures (a spent budget, a scripted failure slot) come back as
//! values. Misuse of a double (an uninitialized temp dir, an over-consumed
//! script, a malformed fixture) aborts the running test through a panic;
//! every such operation also has a `try_*` form returning
//! [`StagehandError`].

pub use stagehand_core::{
    fatal, or_fatal, IdSource, Identifier, RandomIds, StagehandError, StagehandResult,
};
pub use stagehand_fs::{
    base_dir_name, SuiteTempDir, TempDirConfig, TempDirState, TempFile, DEFAULT_LABEL,
    KEEP_TEMP_DIRS_ENV,
};
pub use stagehand_ids::{ScriptEntry, ScriptedIds, FAILURE_SENTINEL};
pub use stagehand_io::{BadWriter, InjectedFailure, SharedBadWriter, WriteOutcome};
