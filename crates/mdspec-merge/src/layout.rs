//! On-disk layout of documentation fragments.

use std::path::{Component, Path, PathBuf};

use mdspec_spec::{Language, OperationKey};

use crate::error::MergeError;

/// File holding the spec's general info, relative to the root.
pub const INFO_FILE: &str = "info.md";

/// Resolves spec keys to files under a root directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilesLayout {
    root: PathBuf,
}

impl FilesLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Layout over a root that must already be a directory.
    pub fn existing(root: impl Into<PathBuf>) -> Result<Self, MergeError> {
        let root = root.into();
        if !root.is_dir() {
            return Err(MergeError::NoFilesRoot(root));
        }
        Ok(Self { root })
    }

    /// Layout over a root that must not exist yet.
    pub fn fresh(root: impl Into<PathBuf>) -> Result<Self, MergeError> {
        let root = root.into();
        if root.exists() {
            return Err(MergeError::RootExists(root));
        }
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<root>/info.md`
    pub fn info_path(&self) -> PathBuf {
        self.root.join(INFO_FILE)
    }

    /// `<root>/<path without leading slash>`
    pub fn operation_dir(&self, path: &str) -> Result<PathBuf, MergeError> {
        let trimmed = path.strip_prefix('/').unwrap_or(path);
        let relative = Path::new(trimmed);
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if escapes {
            return Err(MergeError::UnsafePath(format!("path {path}")));
        }
        Ok(self.root.join(relative))
    }

    /// `<root>/<path>/<method>.md`
    pub fn doc_path(&self, key: &OperationKey) -> Result<PathBuf, MergeError> {
        self.method_file(key, ".md")
    }

    /// `<root>/<path>/<method><ext>`
    pub fn sample_path(&self, key: &OperationKey, lang: Language) -> Result<PathBuf, MergeError> {
        self.method_file(key, lang.extension())
    }

    /// Resolve every key up front, so a bad key fails before any file is touched.
    pub fn check(&self, keys: &[OperationKey]) -> Result<(), MergeError> {
        for key in keys {
            self.doc_path(key)?;
        }
        Ok(())
    }

    fn method_file(&self, key: &OperationKey, extension: &str) -> Result<PathBuf, MergeError> {
        let file_name = format!("{}{}", key.method, extension);
        let mut components = Path::new(&file_name).components();
        let single_name = matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(name)), None) if name == file_name.as_str()
        );
        if !single_name {
            return Err(MergeError::UnsafePath(format!(
                "method {} of path {}",
                key.method, key.path
            )));
        }
        Ok(self.operation_dir(&key.path)?.join(file_name))
    }
}
