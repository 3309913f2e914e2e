//! Merges documentation fragments into a JSON API spec.
//!
//! Each `paths.<path>.<method>` entry is documented by files under a root
//! directory:
//!
//! ```text
//! <root>/info.md
//! <root>/<path>/<method>.md
//! <root>/<path>/<method><ext>     one per code-sample language
//! ```
//!
//! [`merge`] reads those files into the spec. [`scaffold`] creates the empty
//! layout for a spec so it can be filled in by hand.

pub mod error;
pub mod fragment;
pub mod layout;
pub mod merge;
pub mod output;
pub mod scaffold;

use std::path::Path;

pub use error::MergeError;
pub use fragment::{strip_heading, Fragment};
pub use layout::{FilesLayout, INFO_FILE};
pub use merge::{collect_code_samples, merge, MergeReport, CODE_SAMPLES_KEY};
pub use output::{write_spec, Output};
pub use scaffold::{scaffold, ScaffoldReport};

use mdspec_spec::{parse_spec_file, SpecDocument, SpecError};

/// Fail with [`MergeError::NoInputFile`] if the input spec does not exist.
pub fn require_input(path: &Path) -> Result<(), MergeError> {
    if path.exists() {
        Ok(())
    } else {
        Err(MergeError::NoInputFile(path.to_path_buf()))
    }
}

/// Load and validate the input spec.
///
/// A file that vanished since [`require_input`] is reported as
/// [`MergeError::NoInputFile`]; other read failures carry the path.
pub fn load_input(path: &Path) -> Result<SpecDocument, MergeError> {
    let spec = parse_spec_file(path).map_err(|e| match e {
        SpecError::Io(source) if source.kind() == std::io::ErrorKind::NotFound => {
            MergeError::NoInputFile(path.to_path_buf())
        }
        SpecError::Io(source) => MergeError::io(path)(source),
        other => MergeError::Spec(other),
    })?;
    let operations = spec.operations()?.len();
    mdspec_telemetry::log_spec_loaded!(
        file = %path.display(),
        operations,
        "spec loaded"
    );
    Ok(spec)
}
