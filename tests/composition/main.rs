//! Composition Tests
//!
//! The doubles are independent; these suites wire them together the way a
//! test author would.

#[path = "../common/mod.rs"]
mod common;

// Tier 1: Temp dirs named by scripted identifiers
mod scripted_workspace;

// Tier 2: Failing sinks around real files
mod sink_over_files;
