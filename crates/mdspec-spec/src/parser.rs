use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::SpecError;
use crate::model::OperationKey;

/// A loaded spec whose `info`, `paths`, path entries and method entries are
/// all known to be objects.
///
/// Key order of the source document is preserved, so serializing an
/// untouched document yields the same key sequence it was read with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub struct SpecDocument {
    root: Map<String, Value>,
}

/// Parse a spec from a JSON string.
pub fn parse_spec(input: &str) -> Result<SpecDocument, SpecError> {
    let root: Value = serde_json::from_str(input)?;
    SpecDocument::try_from(root)
}

/// Parse a spec from a file path.
pub fn parse_spec_file(path: &Path) -> Result<SpecDocument, SpecError> {
    let content = std::fs::read_to_string(path)?;
    parse_spec(&content)
}

impl TryFrom<Value> for SpecDocument {
    type Error = SpecError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let Value::Object(root) = value else {
            return Err(SpecError::InvalidRoot);
        };
        let mut doc = SpecDocument { root };
        doc.apply_defaults();
        doc.validate()?;
        Ok(doc)
    }
}

impl From<SpecDocument> for Value {
    fn from(doc: SpecDocument) -> Self {
        Value::Object(doc.root)
    }
}

impl SpecDocument {
    /// Missing `info` and `paths` become empty objects, appended to the root.
    fn apply_defaults(&mut self) {
        for section in ["info", "paths"] {
            self.root
                .entry(section)
                .or_insert_with(|| Value::Object(Map::new()));
        }
    }

    fn validate(&self) -> Result<(), SpecError> {
        self.info()?;
        for (path, item) in self.paths()? {
            let item = item
                .as_object()
                .ok_or_else(|| SpecError::InvalidPath(path.clone()))?;
            for (method, operation) in item {
                if !operation.is_object() {
                    return Err(SpecError::InvalidMethod {
                        path: path.clone(),
                        method: method.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// The `info` object.
    pub fn info(&self) -> Result<&Map<String, Value>, SpecError> {
        self.root
            .get("info")
            .and_then(Value::as_object)
            .ok_or(SpecError::InvalidInfo)
    }

    pub fn info_mut(&mut self) -> Result<&mut Map<String, Value>, SpecError> {
        self.root
            .get_mut("info")
            .and_then(Value::as_object_mut)
            .ok_or(SpecError::InvalidInfo)
    }

    /// The `paths` object.
    pub fn paths(&self) -> Result<&Map<String, Value>, SpecError> {
        self.root
            .get("paths")
            .and_then(Value::as_object)
            .ok_or(SpecError::InvalidPaths)
    }

    /// Every path/method pair, in document order.
    pub fn operations(&self) -> Result<Vec<OperationKey>, SpecError> {
        let mut keys = Vec::new();
        for (path, item) in self.paths()? {
            let item = item
                .as_object()
                .ok_or_else(|| SpecError::InvalidPath(path.clone()))?;
            keys.extend(item.keys().map(|method| OperationKey::new(path, method)));
        }
        Ok(keys)
    }

    /// The method object for `key`.
    pub fn operation(&self, key: &OperationKey) -> Result<&Map<String, Value>, SpecError> {
        let item = self
            .paths()?
            .get(&key.path)
            .ok_or_else(|| unknown_operation(key))?
            .as_object()
            .ok_or_else(|| SpecError::InvalidPath(key.path.clone()))?;
        item.get(&key.method)
            .ok_or_else(|| unknown_operation(key))?
            .as_object()
            .ok_or_else(|| invalid_method(key))
    }

    pub fn operation_mut(
        &mut self,
        key: &OperationKey,
    ) -> Result<&mut Map<String, Value>, SpecError> {
        let item = self
            .root
            .get_mut("paths")
            .and_then(Value::as_object_mut)
            .ok_or(SpecError::InvalidPaths)?
            .get_mut(&key.path)
            .ok_or_else(|| unknown_operation(key))?
            .as_object_mut()
            .ok_or_else(|| SpecError::InvalidPath(key.path.clone()))?;
        item.get_mut(&key.method)
            .ok_or_else(|| unknown_operation(key))?
            .as_object_mut()
            .ok_or_else(|| invalid_method(key))
    }

    /// The whole document as a root object.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.root
    }

    /// Serialize to JSON, compact unless `pretty` is set.
    pub fn to_json(&self, pretty: bool) -> Result<String, serde_json::Error> {
        if pretty {
            serde_json::to_string_pretty(&self.root)
        } else {
            serde_json::to_string(&self.root)
        }
    }
}

fn unknown_operation(key: &OperationKey) -> SpecError {
    SpecError::UnknownOperation {
        path: key.path.clone(),
        method: key.method.clone(),
    }
}

fn invalid_method(key: &OperationKey) -> SpecError {
    SpecError::InvalidMethod {
        path: key.path.clone(),
        method: key.method.clone(),
    }
}
