use std::fs;
use std::path::{Path, PathBuf};

use mdspec_spec::{CodeSample, Language, OperationKey, SpecDocument};
use serde_json::Value;

use crate::error::MergeError;
use crate::fragment::Fragment;
use crate::layout::FilesLayout;

/// Operation key receiving the collected code samples.
pub const CODE_SAMPLES_KEY: &str = "x-codeSamples";

/// Summary of a merge walk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeReport {
    /// Whether `info.md` was found and merged.
    pub info_merged: bool,
    /// Path/method pairs visited.
    pub operations: usize,
    /// Operations that received `summary` and `description`.
    pub documented: usize,
    /// Code samples attached across all operations.
    pub code_samples: usize,
    /// Markdown files that were expected but not present.
    pub missing: Vec<PathBuf>,
}

/// Merge documentation fragments under `layout` into `spec`.
///
/// A missing `info.md` or `<method>.md` is logged and skipped. Code samples
/// are collected for every operation whether or not its Markdown exists.
pub fn merge(spec: &mut SpecDocument, layout: &FilesLayout) -> Result<MergeReport, MergeError> {
    let keys = spec.operations()?;
    layout.check(&keys)?;

    let mut report = MergeReport::default();

    let info_path = layout.info_path();
    match read_optional(&info_path)? {
        Some(text) => {
            let fragment = Fragment::parse(&text);
            let info = spec.info_mut()?;
            info.insert("title".into(), Value::String(fragment.title));
            info.insert("description".into(), Value::String(fragment.description));
            report.info_merged = true;
        }
        None => {
            mdspec_telemetry::log_fragment_missing!(
                file = %info_path.display(),
                "Markdown file with general info is not present"
            );
            report.missing.push(info_path);
        }
    }

    for key in &keys {
        report.operations += 1;

        let doc_path = layout.doc_path(key)?;
        let fragment = read_optional(&doc_path)?.map(|text| Fragment::parse(&text));
        let samples = collect_code_samples(layout, key)?;

        let operation = spec.operation_mut(key)?;
        match fragment {
            Some(fragment) => {
                operation.insert("summary".into(), Value::String(fragment.title));
                operation.insert("description".into(), Value::String(fragment.description));
                report.documented += 1;
            }
            None => {
                mdspec_telemetry::log_fragment_missing!(
                    file = %doc_path.display(),
                    path = %key.path,
                    method = %key.method,
                    "Markdown file for operation is not present"
                );
                report.missing.push(doc_path);
            }
        }

        if !samples.is_empty() {
            report.code_samples += samples.len();
            operation.insert(CODE_SAMPLES_KEY.into(), serde_json::to_value(&samples)?);
        }
    }

    Ok(report)
}

/// Read every existing code-sample file for `key`, in language order.
pub fn collect_code_samples(
    layout: &FilesLayout,
    key: &OperationKey,
) -> Result<Vec<CodeSample>, MergeError> {
    let mut samples = Vec::new();
    for lang in Language::ALL {
        let path = layout.sample_path(key, lang)?;
        if let Some(source) = read_optional(&path)? {
            tracing::debug!(file = %path.display(), lang = %lang, "code sample found");
            samples.push(CodeSample::new(lang, source));
        }
    }
    Ok(samples)
}

/// Read a file, or `None` if no regular file exists at `path`.
fn read_optional(path: &Path) -> Result<Option<String>, MergeError> {
    if !path.is_file() {
        return Ok(None);
    }
    fs::read_to_string(path)
        .map(Some)
        .map_err(MergeError::io(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mdspec_spec::parse_spec;
    use serde_json::json;
    use tempfile::TempDir;

    fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn pets_spec() -> SpecDocument {
        parse_spec(
            r#"{
                "openapi": "3.0.0",
                "info": {"title": "Old", "version": "1.0.0"},
                "paths": {
                    "/pets": {"get": {"operationId": "listPets"}, "post": {}},
                    "/pets/{id}": {"delete": {}}
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn merges_info_and_operation_docs() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "info.md", "# Title\nBody text\n");
        write(temp.path(), "pets/get.md", "# List pets\nAll of them.\n");
        write(temp.path(), "pets/post.md", "Create a pet");
        write(temp.path(), "pets/{id}/delete.md", "");

        let mut spec = pets_spec();
        let report = merge(&mut spec, &FilesLayout::new(temp.path())).unwrap();

        let info = spec.info().unwrap();
        assert_eq!(info["title"], "Title");
        assert_eq!(info["description"], "Body text\n");
        assert_eq!(info["version"], "1.0.0");

        let get = spec.operation(&OperationKey::new("/pets", "get")).unwrap();
        assert_eq!(get["operationId"], "listPets");
        assert_eq!(get["summary"], "List pets");
        assert_eq!(get["description"], "All of them.\n");

        let post = spec.operation(&OperationKey::new("/pets", "post")).unwrap();
        assert_eq!(post["summary"], "Create a pet");
        assert_eq!(post["description"], "");

        assert!(report.info_merged);
        assert_eq!(report.operations, 3);
        assert_eq!(report.documented, 3);
        assert!(report.missing.is_empty());
    }

    #[test]
    fn missing_markdown_is_skipped() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "pets/get.md", "# List pets\n");

        let mut spec = pets_spec();
        let report = merge(&mut spec, &FilesLayout::new(temp.path())).unwrap();

        // info untouched
        assert_eq!(spec.info().unwrap()["title"], "Old");
        assert!(spec.info().unwrap().get("description").is_none());

        let post = spec.operation(&OperationKey::new("/pets", "post")).unwrap();
        assert!(post.is_empty());

        assert!(!report.info_merged);
        assert_eq!(report.documented, 1);
        assert_eq!(
            report.missing,
            vec![
                temp.path().join("info.md"),
                temp.path().join("pets/post.md"),
                temp.path().join("pets/{id}/delete.md"),
            ]
        );
    }

    #[test]
    fn code_samples_follow_language_order() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "pets/get.md", "List pets\n");
        write(temp.path(), "pets/get.go", "package main\n");
        write(temp.path(), "pets/get.py", "print('pets')\n");
        write(temp.path(), "pets/get.cpp", "int main() {}\n");

        let mut spec = pets_spec();
        let report = merge(&mut spec, &FilesLayout::new(temp.path())).unwrap();

        let get = spec.operation(&OperationKey::new("/pets", "get")).unwrap();
        assert_eq!(
            get[CODE_SAMPLES_KEY],
            json!([
                {"lang": "Python", "source": "print('pets')\n"},
                {"lang": "C++", "source": "int main() {}\n"},
                {"lang": "Go", "source": "package main\n"},
            ])
        );
        assert_eq!(report.code_samples, 3);

        let post = spec.operation(&OperationKey::new("/pets", "post")).unwrap();
        assert!(post.get(CODE_SAMPLES_KEY).is_none());
    }

    #[test]
    fn code_samples_attach_without_markdown() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "pets/post.js", "fetch('/pets', {method: 'POST'})\n");

        let mut spec = pets_spec();
        merge(&mut spec, &FilesLayout::new(temp.path())).unwrap();

        let post = spec.operation(&OperationKey::new("/pets", "post")).unwrap();
        assert!(post.get("summary").is_none());
        assert_eq!(post[CODE_SAMPLES_KEY][0]["lang"], "JavaScript");
    }

    #[test]
    fn merge_is_idempotent() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "info.md", "# Pets API\nManage pets.\n");
        write(temp.path(), "pets/get.md", "# List pets\n");
        write(temp.path(), "pets/get.dart", "void main() {}\n");

        let layout = FilesLayout::new(temp.path());
        let mut first = pets_spec();
        merge(&mut first, &layout).unwrap();
        let once = first.to_json(false).unwrap();

        let mut second = parse_spec(&once).unwrap();
        merge(&mut second, &layout).unwrap();
        assert_eq!(second.to_json(false).unwrap(), once);
    }

    #[test]
    fn file_in_place_of_path_directory_is_missing() {
        let temp = TempDir::new().unwrap();
        // `<root>/pets` is a regular file, so nothing under it can exist.
        write(temp.path(), "pets", "not a directory");
        write(temp.path(), "users/get.md", "# List users\n");
        let mut spec =
            parse_spec(r#"{"paths": {"/pets": {"get": {}}, "/users": {"get": {}}}}"#).unwrap();

        let report = merge(&mut spec, &FilesLayout::new(temp.path())).unwrap();

        let pets = spec.operation(&OperationKey::new("/pets", "get")).unwrap();
        assert!(pets.is_empty());
        let users = spec.operation(&OperationKey::new("/users", "get")).unwrap();
        assert_eq!(users["summary"], "List users");

        assert_eq!(report.documented, 1);
        assert!(report.missing.contains(&temp.path().join("pets/get.md")));
    }

    #[test]
    fn unsafe_path_fails_before_reading() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "info.md", "# Title\n");
        let mut spec = parse_spec(r#"{"paths": {"/../outside": {"get": {}}}}"#).unwrap();

        let err = merge(&mut spec, &FilesLayout::new(temp.path())).unwrap_err();
        assert!(matches!(err, MergeError::UnsafePath(_)));
        assert!(spec.info().unwrap().get("title").is_none());
    }
}
