//! TestWorkspace: temporary spec + fragment tree for CLI tests.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use thiserror::Error;

/// Errors from TestWorkspace operations.
#[derive(Debug, Error)]
pub enum TestError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A temporary directory with `spec.json` and a `docs/` files root.
///
/// `docs/` is not created until a fragment is written, so the same workspace
/// serves both `merge` (after writing) and `createfiles` (before).
pub struct TestWorkspace {
    dir: TempDir,
}

impl TestWorkspace {
    /// Create a workspace whose input spec is `spec`.
    pub fn new(spec: &serde_json::Value) -> Result<Self, TestError> {
        let dir = TempDir::new()?;
        fs::write(dir.path().join("spec.json"), serde_json::to_string(spec)?)?;
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn spec_path(&self) -> PathBuf {
        self.dir.path().join("spec.json")
    }

    /// The files root, `<workspace>/docs`.
    pub fn docs(&self) -> PathBuf {
        self.dir.path().join("docs")
    }

    /// Write a fragment relative to the files root, creating parents.
    pub fn write(&self, relative: &str, content: &str) -> Result<PathBuf, TestError> {
        let path = self.docs().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content)?;
        Ok(path)
    }

    /// Read a file relative to the workspace as JSON.
    pub fn read_json(&self, relative: &str) -> Result<serde_json::Value, TestError> {
        let content = fs::read_to_string(self.dir.path().join(relative))?;
        Ok(serde_json::from_str(&content)?)
    }
}
