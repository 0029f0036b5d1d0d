//! Suite-scoped temporary directory manager
//!
//! A [`SuiteTempDir`] owns one base directory under the platform temp root
//! for the lifetime of a test suite. Tests ask it for fresh subdirectories,
//! fresh file paths, or freshly created files; all of them live under the
//! base directory, and `cleanup()` removes the whole tree.
//!
//! # Lifecycle
//!
//! ```text
//! Uninitialized --init()--> Initialized --cleanup()--> Cleaned
//!       ^                                                  |
//!       +----------------------init()----------------------+
//! ```
//!
//! Every path operation outside `Initialized` is a contract violation.
//!
//! # Example
//!
//! ```
//! use stagehand_fs::SuiteTempDir;
//!
//! let mut temp = SuiteTempDir::new();
//! temp.init("doc_example_suite");
//!
//! let dir = temp.sub_directory();
//! assert!(dir.starts_with(temp.base()));
//!
//! temp.cleanup();
//! ```

use std::fs::{self, DirBuilder, File};
use std::io;
use std::path::{Path, PathBuf};

use stagehand_core::{or_fatal, IdSource, RandomIds, StagehandError, StagehandResult};
use tracing::{info, warn};

use crate::config::TempDirConfig;
use crate::naming::base_dir_name;

/// Lifecycle state of a [`SuiteTempDir`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TempDirState {
    /// Never initialized
    Uninitialized,
    /// Base directory exists and paths can be handed out
    Initialized,
    /// Cleaned up; unusable until the next init()
    Cleaned,
}

/// A file created by [`SuiteTempDir::file`], open for reading and writing
#[derive(Debug)]
pub struct TempFile {
    /// Location of the file under the base directory
    pub path: PathBuf,
    /// Open read-write handle; closing it is up to the caller
    pub file: File,
}

/// Manager for one suite-scoped temp directory tree
#[derive(Debug)]
pub struct SuiteTempDir<S: IdSource = RandomIds> {
    config: TempDirConfig,
    ids: S,
    state: TempDirState,
    /// Set only while initialized
    base: Option<PathBuf>,
    /// Set only while initialized
    name: Option<String>,
}

impl SuiteTempDir<RandomIds> {
    /// Manager with default config (plus environment overrides) and random
    /// names
    pub fn new() -> Self {
        Self::with_config(TempDirConfig::from_env())
    }

    /// Manager with the given config and random names
    pub fn with_config(config: TempDirConfig) -> Self {
        Self::with_id_source(config, RandomIds)
    }
}

impl Default for SuiteTempDir<RandomIds> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: IdSource> SuiteTempDir<S> {
    /// Manager that names subdirectories and files from `ids`
    pub fn with_id_source(config: TempDirConfig, ids: S) -> Self {
        SuiteTempDir {
            config,
            ids,
            state: TempDirState::Uninitialized,
            base: None,
            name: None,
        }
    }

    /// Current configuration
    pub fn config(&self) -> &TempDirConfig {
        &self.config
    }

    /// Keep (or stop keeping) the tree on cleanup
    pub fn set_retain_on_cleanup(&mut self, retain: bool) {
        self.config.retain_on_cleanup = retain;
    }

    /// Current lifecycle state
    pub fn state(&self) -> TempDirState {
        self.state
    }

    /// True while paths can be handed out
    pub fn is_initialized(&self) -> bool {
        self.state == TempDirState::Initialized
    }

    /// Base directory name, while initialized
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Borrow the identifier source
    pub fn id_source(&self) -> &S {
        &self.ids
    }

    /// Create (or adopt) the base directory for `owner`.
    ///
    /// The directory is `<temp root>/<label>-<owner>` with unsafe characters
    /// normalized. If it already exists a warning is logged and the existing
    /// directory is used: that usually means an earlier run never reached
    /// cleanup().
    ///
    /// # Errors
    ///
    /// - `AlreadyInitialized` if called twice without cleanup()
    /// - `TempRootUnavailable` if the platform temp root is missing or not a
    ///   directory
    /// - `Io` for any creation failure other than "already exists"
    pub fn try_init(&mut self, owner: &str) -> StagehandResult<&Path> {
        if let (TempDirState::Initialized, Some(base)) = (self.state, &self.base) {
            return Err(StagehandError::AlreadyInitialized { base: base.clone() });
        }

        let name = base_dir_name(&self.config.label, owner);
        info!(target: "stagehand::fs", name = %name, "Setting up temp dir");

        let root = temp_root()?;
        let base = root.join(&name);

        match create_private_dir(&base) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                if !base.is_dir() {
                    return Err(StagehandError::Io(io::Error::new(
                        io::ErrorKind::AlreadyExists,
                        format!("{} exists and is not a directory", base.display()),
                    )));
                }
                warn!(
                    target: "stagehand::fs",
                    path = ?base,
                    owner,
                    "Temp dir existed already; did an earlier run skip cleanup()? Reusing it"
                );
            }
            Err(e) => return Err(e.into()),
        }

        info!(target: "stagehand::fs", path = ?base, "Created temp dir");
        self.name = Some(name);
        self.state = TempDirState::Initialized;
        Ok(self.base.insert(base).as_path())
    }

    /// [`try_init`](Self::try_init), aborting the test on error
    #[track_caller]
    pub fn init(&mut self, owner: &str) -> &Path {
        or_fatal(self.try_init(owner))
    }

    /// Path of the base directory.
    ///
    /// # Errors
    ///
    /// Returns `NotInitialized` outside the initialized state.
    pub fn try_base(&self) -> StagehandResult<&Path> {
        match (self.state, &self.base) {
            (TempDirState::Initialized, Some(base)) => Ok(base.as_path()),
            _ => Err(StagehandError::NotInitialized),
        }
    }

    /// [`try_base`](Self::try_base), aborting the test on error
    #[track_caller]
    pub fn base(&self) -> &Path {
        or_fatal(self.try_base())
    }

    /// Create a new, uniquely named subdirectory of the base directory.
    ///
    /// # Errors
    ///
    /// `NotInitialized`, an identifier source failure, or `Io` if the
    /// directory cannot be created.
    pub fn try_sub_directory(&mut self) -> StagehandResult<PathBuf> {
        let path = self.try_file_path()?;
        create_private_dir(&path)?;
        Ok(path)
    }

    /// [`try_sub_directory`](Self::try_sub_directory), aborting the test on
    /// error
    #[track_caller]
    pub fn sub_directory(&mut self) -> PathBuf {
        or_fatal(self.try_sub_directory())
    }

    /// A fresh path under the base directory, named by the next identifier.
    /// Nothing is created on disk.
    ///
    /// # Errors
    ///
    /// `NotInitialized`, or whatever the identifier source reports.
    pub fn try_file_path(&mut self) -> StagehandResult<PathBuf> {
        let base = self.try_base()?.to_path_buf();
        let id = self.ids.try_next_id()?;
        Ok(base.join(id.to_string()))
    }

    /// [`try_file_path`](Self::try_file_path), aborting the test on error
    #[track_caller]
    pub fn file_path(&mut self) -> PathBuf {
        or_fatal(self.try_file_path())
    }

    /// Create a new empty file under the base directory and open it for
    /// reading and writing.
    ///
    /// # Errors
    ///
    /// `NotInitialized`, an identifier source failure, or `Io` if the file
    /// cannot be created (including when the name is already taken).
    pub fn try_file(&mut self) -> StagehandResult<TempFile> {
        let base = self.try_base()?.to_path_buf();
        let id = self.ids.try_next_id()?;

        let named = tempfile::Builder::new()
            .prefix(&id.to_string())
            .rand_bytes(0)
            .tempfile_in(&base)?;
        let (file, path) = named.keep().map_err(|e| StagehandError::Io(e.error))?;

        Ok(TempFile { path, file })
    }

    /// [`try_file`](Self::try_file), aborting the test on error
    #[track_caller]
    pub fn file(&mut self) -> TempFile {
        or_fatal(self.try_file())
    }

    /// Remove the base directory tree unless retention is on, then reset to
    /// an unusable state.
    ///
    /// The state is reset even when removal fails, so a failed cleanup can
    /// not be retried on the same path.
    ///
    /// # Errors
    ///
    /// Returns `Io` if removal fails. A tree that is already gone is not an
    /// error.
    pub fn try_cleanup(&mut self) -> StagehandResult<()> {
        info!(target: "stagehand::fs", "Temp dir cleanup");

        let base = self.base.take();
        self.name = None;
        if self.state == TempDirState::Initialized {
            self.state = TempDirState::Cleaned;
        }

        let Some(base) = base else {
            return Ok(());
        };

        if self.config.retain_on_cleanup {
            info!(target: "stagehand::fs", path = ?base, "Retaining temp dir");
            return Ok(());
        }

        info!(target: "stagehand::fs", path = ?base, "Removing temp dir");
        match fs::remove_dir_all(&base) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// [`try_cleanup`](Self::try_cleanup), aborting the test on error
    #[track_caller]
    pub fn cleanup(&mut self) {
        or_fatal(self.try_cleanup())
    }
}

impl<S: IdSource> Drop for SuiteTempDir<S> {
    fn drop(&mut self) {
        let Some(base) = self.base.take() else {
            return;
        };
        warn!(
            target: "stagehand::fs",
            path = ?base,
            "Temp dir dropped without cleanup()"
        );
        if self.config.retain_on_cleanup {
            return;
        }
        if let Err(e) = fs::remove_dir_all(&base) {
            if e.kind() != io::ErrorKind::NotFound {
                warn!(target: "stagehand::fs", path = ?base, error = %e, "Failed to remove temp dir on drop");
            }
        }
    }
}

/// Query and validate the platform temp root
fn temp_root() -> StagehandResult<PathBuf> {
    let root = std::env::temp_dir();
    if root.as_os_str().is_empty() {
        return Err(StagehandError::temp_root(root, "platform reported no temp dir"));
    }

    let meta = fs::metadata(&root).map_err(|e| StagehandError::temp_root(&root, e.to_string()))?;
    if !meta.is_dir() {
        return Err(StagehandError::temp_root(root, "not a directory"));
    }
    Ok(root)
}

/// Create a single directory, owner-only on unix
fn create_private_dir(path: &Path) -> io::Result<()> {
    let mut builder = DirBuilder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o700);
    }
    builder.create(path)
}
