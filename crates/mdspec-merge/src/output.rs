use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use mdspec_spec::SpecDocument;

use crate::error::MergeError;

/// Where a merged spec is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Stdout,
    File(PathBuf),
}

impl Output {
    pub fn from_arg(path: Option<PathBuf>) -> Self {
        path.map_or(Output::Stdout, Output::File)
    }
}

/// Write `spec` as JSON, compact unless `pretty` is set.
///
/// Writing to a file requires its parent directory to exist already.
pub fn write_spec(spec: &SpecDocument, output: &Output, pretty: bool) -> Result<(), MergeError> {
    let json = spec.to_json(pretty)?;
    match output {
        Output::Stdout => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            writeln!(lock, "{json}")
                .and_then(|()| lock.flush())
                .map_err(MergeError::io(Path::new("<stdout>")))
        }
        Output::File(path) => {
            check_parent(path)?;
            fs::write(path, json).map_err(MergeError::io(path))?;
            mdspec_telemetry::log_output_written!(file = %path.display(), "merged spec written");
            Ok(())
        }
    }
}

fn check_parent(path: &Path) -> Result<(), MergeError> {
    match path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) if !parent.is_dir() => Err(MergeError::NoOutputParent(parent.to_path_buf())),
        _ => Ok(()),
    }
}
