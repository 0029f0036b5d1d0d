//! Temp-dir configuration
//!
//! The manager's identity and retention policy can come from code, from the
//! environment, or from a TOML fixture:
//!
//! ```toml
//! # Stable identity used in the base directory name
//! label = "my-crate-tempdir"
//!
//! # Keep the directory tree after cleanup() for inspection
//! retain_on_cleanup = true
//! ```
//!
//! Setting `STAGEHAND_KEEP_TEMP_DIRS=1` turns on retention without touching
//! code. The temporary root itself is always queried from the platform.

use serde::{Deserialize, Serialize};
use stagehand_core::{StagehandError, StagehandResult};

/// Environment variable that enables retention when set to 1/true/yes
pub const KEEP_TEMP_DIRS_ENV: &str = "STAGEHAND_KEEP_TEMP_DIRS";

/// Label used when none is configured
pub const DEFAULT_LABEL: &str = "stagehand-tempdir";

/// Configuration for a [`SuiteTempDir`](crate::SuiteTempDir)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TempDirConfig {
    /// Manager identity, combined with the owner name to form the base
    /// directory name.
    #[serde(default = "default_label")]
    pub label: String,
    /// Skip deleting the base directory on cleanup.
    #[serde(default)]
    pub retain_on_cleanup: bool,
}

fn default_label() -> String {
    DEFAULT_LABEL.to_string()
}

impl Default for TempDirConfig {
    fn default() -> Self {
        Self {
            label: default_label(),
            retain_on_cleanup: false,
        }
    }
}

impl TempDirConfig {
    /// Defaults plus any overrides from the environment
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// Apply [`KEEP_TEMP_DIRS_ENV`] on top of this config
    pub fn with_env_overrides(self) -> Self {
        let flag = std::env::var(KEEP_TEMP_DIRS_ENV).ok();
        self.apply_keep_flag(flag.as_deref())
    }

    /// Parse a TOML fixture
    ///
    /// # Errors
    ///
    /// Returns `StagehandError::Config` if the text is not valid TOML or has
    /// fields of the wrong type.
    pub fn from_toml_str(text: &str) -> StagehandResult<Self> {
        toml::from_str(text).map_err(|e| StagehandError::Config(e.to_string()))
    }

    /// Set the manager label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the retention flag
    pub fn with_retain_on_cleanup(mut self, retain: bool) -> Self {
        self.retain_on_cleanup = retain;
        self
    }

    fn apply_keep_flag(mut self, flag: Option<&str>) -> Self {
        if let Some(value) = flag {
            if is_truthy(value) {
                self.retain_on_cleanup = true;
            }
        }
        self
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes"
    )
}
