use thiserror::Error;

/// Errors produced while loading or accessing a spec document.
#[derive(Debug, Error)]
pub enum SpecError {
    /// Input is not valid JSON.
    #[error("given file is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// Input parsed, but the top-level value is not an object.
    #[error("spec root must be an object")]
    InvalidRoot,

    /// `info` is present but is not an object.
    #[error("\"info\" section is not an object")]
    InvalidInfo,

    /// `paths` is present but is not an object.
    #[error("\"paths\" section is not an object")]
    InvalidPaths,

    /// A path entry under `paths` is not an object.
    #[error("path {0} is not an object")]
    InvalidPath(String),

    /// A method entry under a path is not an object.
    #[error("method {method} of path {path} is not an object")]
    InvalidMethod { path: String, method: String },

    /// An operation looked up by key does not exist.
    #[error("no operation {method} under path {path}")]
    UnknownOperation { path: String, method: String },

    /// I/O error reading the spec file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SpecError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            SpecError::InvalidJson(_) | SpecError::InvalidRoot => 6,
            SpecError::InvalidInfo => 7,
            SpecError::InvalidPaths => 8,
            SpecError::InvalidPath(_) => 9,
            SpecError::InvalidMethod { .. } => 10,
            SpecError::UnknownOperation { .. } | SpecError::Io(_) => 1,
        }
    }
}
