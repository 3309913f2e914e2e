use std::collections::HashSet;
use std::fs::{self, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use mdspec_spec::{Language, SpecDocument};

use crate::error::MergeError;
use crate::layout::FilesLayout;

/// Summary of a scaffold walk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScaffoldReport {
    /// Distinct directories created, the root included.
    pub directories: usize,
    /// Files touched.
    pub files: usize,
}

/// Create the empty file layout [`merge`](crate::merge) expects for `spec`.
///
/// The root must not exist. Every key is resolved before the root is created,
/// so a spec with an unusable key leaves nothing on disk.
pub fn scaffold(
    spec: &SpecDocument,
    layout: &FilesLayout,
    languages: &[Language],
) -> Result<ScaffoldReport, MergeError> {
    let keys = spec.operations()?;
    layout.check(&keys)?;

    let mut languages_seen = HashSet::new();
    let languages: Vec<Language> = languages
        .iter()
        .copied()
        .filter(|lang| languages_seen.insert(*lang))
        .collect();

    let mut report = ScaffoldReport::default();
    let mut created: HashSet<PathBuf> = HashSet::new();

    create_root(layout.root())?;
    created.insert(layout.root().to_path_buf());
    report.directories += 1;

    touch(&layout.info_path())?;
    report.files += 1;

    for key in &keys {
        let dir = layout.operation_dir(&key.path)?;
        if created.insert(dir.clone()) {
            fs::create_dir_all(&dir).map_err(MergeError::io(&dir))?;
            report.directories += 1;
        }

        touch(&layout.doc_path(key)?)?;
        report.files += 1;

        for lang in &languages {
            touch(&layout.sample_path(key, *lang)?)?;
            report.files += 1;
        }
    }

    Ok(report)
}

fn create_root(root: &Path) -> Result<(), MergeError> {
    if let Some(parent) = root.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(MergeError::io(parent))?;
    }
    fs::create_dir(root).map_err(|e| match e.kind() {
        ErrorKind::AlreadyExists => MergeError::RootExists(root.to_path_buf()),
        _ => MergeError::io(root)(e),
    })
}

/// Create `path` if missing. Existing content is kept.
fn touch(path: &Path) -> Result<(), MergeError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map(drop)
        .map_err(MergeError::io(path))
}
