//! Suite-scoped temporary filesystem workspaces
//!
//! - [`SuiteTempDir`]: creates one base directory per suite, hands out unique
//!   subdirectories, paths and files beneath it, and removes the tree on
//!   cleanup
//! - [`TempDirConfig`]: manager label and retention policy, from code, the
//!   environment, or TOML

#![warn(missing_docs)]
#![warn(clippy::all)]

mod config;
mod naming;
mod temp_dir;

pub use config::{TempDirConfig, DEFAULT_LABEL, KEEP_TEMP_DIRS_ENV};
pub use naming::base_dir_name;
pub use temp_dir::{SuiteTempDir, TempDirState, TempFile};
