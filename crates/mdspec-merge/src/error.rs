use std::io;
use std::path::{Path, PathBuf};

use mdspec_spec::SpecError;
use thiserror::Error;

/// Errors produced while merging or scaffolding.
#[derive(Debug, Error)]
pub enum MergeError {
    /// Spec loading or structure error.
    #[error(transparent)]
    Spec(#[from] SpecError),

    /// Input spec file does not exist.
    #[error("input spec {} does not exist", .0.display())]
    NoInputFile(PathBuf),

    /// Files root is missing or is not a directory (merge).
    #[error("files root {} does not exist or is not a directory", .0.display())]
    NoFilesRoot(PathBuf),

    /// Files root already exists (createfiles).
    #[error("files root {} already exists", .0.display())]
    RootExists(PathBuf),

    /// A path or method key would resolve outside the files root.
    #[error("{0} resolves outside the files root")]
    UnsafePath(String),

    /// Parent directory of the output file does not exist.
    #[error("output spec parent {} does not exist", .0.display())]
    NoOutputParent(PathBuf),

    /// I/O error on a specific file.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MergeError {
    /// Wrap an I/O error with the path it happened on.
    pub fn io(path: &Path) -> impl FnOnce(io::Error) -> MergeError + '_ {
        move |source| MergeError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            MergeError::Spec(e) => e.exit_code(),
            MergeError::NoInputFile(_) => 3,
            MergeError::NoFilesRoot(_) => 4,
            MergeError::RootExists(_) => 5,
            MergeError::UnsafePath(_) => 9,
            MergeError::NoOutputParent(_) => 11,
            MergeError::Io { .. } | MergeError::Json(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_errors_keep_their_exit_code() {
        let err = MergeError::from(SpecError::InvalidPaths);
        assert_eq!(err.exit_code(), 8);
        assert_eq!(err.to_string(), "\"paths\" section is not an object");
    }

    #[test]
    fn io_error_names_the_file() {
        let err = MergeError::io(Path::new("docs/info.md"))(io::Error::new(
            io::ErrorKind::PermissionDenied,
            "denied",
        ));
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().starts_with("I/O error on docs/info.md"));
    }
}
