//! Shared test utilities for all integration test suites.
//!
//! Import via `mod common;` from any test's main.rs.

#![allow(dead_code)]

use stagehand::{IdSource, ScriptedIds, SuiteTempDir, TempDirConfig};

/// Label shared by every integration suite's temp dirs
pub const INTEGRATION_LABEL: &str = "stagehand-it";

/// Fixed identifiers for scripts
pub const ID_A: &str = "ce8631ce-3b9d-4ac9-a9fa-d536d2e11a92";
pub const ID_B: &str = "06ef35bc-b8ae-4eff-ab81-2b2abd109fb5";
pub const ID_C: &str = "367dfdd2-bccb-41db-8364-cc8dd10e9f2a";

/// Config used by integration suites
pub fn integration_config() -> TempDirConfig {
    TempDirConfig::default().with_label(INTEGRATION_LABEL)
}

/// Initialized temp dir with random names for the named suite
pub fn suite_temp_dir(suite: &str) -> SuiteTempDir {
    let mut temp = SuiteTempDir::with_config(integration_config());
    temp.init(suite);
    temp
}

/// Initialized temp dir that draws names from `ids`
pub fn scripted_temp_dir<S: IdSource>(suite: &str, ids: S) -> SuiteTempDir<S> {
    let mut temp = SuiteTempDir::with_id_source(integration_config(), ids);
    temp.init(suite);
    temp
}

/// Script of the three fixed identifiers
pub fn abc_script() -> ScriptedIds {
    ScriptedIds::parse([ID_A, ID_B, ID_C])
}
