//! Test harnesses for the mdspec tools.
//!
//! Provides `TestWorkspace`, a throwaway directory holding an input spec
//! and its documentation fragments, and the path to the shared fixtures.

pub mod workspace;

use std::path::PathBuf;

pub use workspace::{TestError, TestWorkspace};

/// Absolute path to the shared test fixtures directory.
pub fn fixtures() -> PathBuf {
    // CARGO_MANIFEST_DIR = .../crates/mdspec-test
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("crates/")
        .parent()
        .expect("workspace root")
        .join("tests/fixtures")
}
