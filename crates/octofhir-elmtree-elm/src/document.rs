//! ELM JSON documents
//!
//! An [`ElmDocument`] owns the generic JSON tree of one compiled library. The
//! only shape checked at load time is the envelope: a JSON object with a
//! `library` object inside. Everything below `library` is checked lazily by
//! the section accessors.

use octofhir_elmtree_diagnostics::{
    ELM0002, ELM0003, ELM0004, ELM0005, ElmError, ElmPath, Result,
};
use serde_json::{Map, Value};
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

/// Field holding the library in the ELM JSON envelope
pub const LIBRARY: &str = "library";

/// Deepest array/object nesting accepted, matching the JSON parser limit
pub const MAX_DEPTH: usize = 128;

/// Where to load an ELM document from
#[derive(Debug, Clone, Copy)]
pub enum ElmSource<'a> {
    /// Inline JSON text
    Text(&'a str),
    /// Path of a JSON file
    Path(&'a Path),
}

impl<'a> From<&'a Path> for ElmSource<'a> {
    fn from(path: &'a Path) -> Self {
        Self::Path(path)
    }
}

/// A loaded ELM library document, immutable after load
#[derive(Debug, Clone, PartialEq)]
pub struct ElmDocument {
    root: Value,
}

impl ElmDocument {
    /// Load a document from text or a file
    pub fn load(source: ElmSource<'_>) -> Result<Self> {
        match source {
            ElmSource::Text(text) => Self::from_json(text),
            ElmSource::Path(path) => Self::from_path(path),
        }
    }

    /// Parse a document from JSON text
    pub fn from_json(text: &str) -> Result<Self> {
        log::debug!("loading ELM document from {} bytes of text", text.len());
        let root = serde_json::from_str(text).map_err(|e| ElmError::malformed_input(&e))?;
        Self::from_value(root)
    }

    /// Parse a document from UTF-8 JSON bytes
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        log::debug!("loading ELM document from {} bytes", bytes.len());
        let root = serde_json::from_slice(bytes).map_err(|e| ElmError::malformed_input(&e))?;
        Self::from_value(root)
    }

    /// Parse a document from a reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        log::debug!("loading ELM document from reader");
        let root = serde_json::from_reader(reader).map_err(|e| {
            if e.is_io() {
                ElmError::io(&std::io::Error::from(e), None)
            } else {
                ElmError::malformed_input(&e)
            }
        })?;
        Self::from_value(root)
    }

    /// Read and parse a document from a file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("loading ELM document from {}", path.display());
        let bytes = std::fs::read(path).map_err(|e| ElmError::io(&e, Some(path.to_path_buf())))?;
        Self::from_slice(&bytes)
    }

    /// Wrap an already parsed JSON value, checking the envelope.
    ///
    /// Values nested deeper than [`MAX_DEPTH`] are rejected, since building
    /// and visiting trees recurse once per level.
    pub fn from_value(root: Value) -> Result<Self> {
        let problem = match &root {
            Value::Object(map) => match map.get(LIBRARY) {
                Some(Value::Object(_)) => None,
                Some(_) => Some((ELM0004, ElmPath::library())),
                None => Some((ELM0003, ElmPath::root())),
            },
            _ => Some((ELM0002, ElmPath::root())),
        };
        if let Some((code, path)) = problem {
            return Err(ElmError::invalid_shape(code, path));
        }
        if nesting_depth(&root) > MAX_DEPTH {
            return Err(ElmError::invalid_shape(ELM0005, ElmPath::root()));
        }
        Ok(Self { root })
    }

    /// The whole JSON tree
    pub fn root(&self) -> &Value {
        &self.root
    }

    /// The `library` object
    pub fn library(&self) -> Result<&Map<String, Value>> {
        self.root
            .get(LIBRARY)
            .and_then(Value::as_object)
            .ok_or_else(|| ElmError::missing_section(LIBRARY, ElmPath::library()))
    }

    pub fn into_value(self) -> Value {
        self.root
    }
}

/// Levels of array/object nesting in `value`, scalars counting as 0
fn nesting_depth(value: &Value) -> usize {
    let mut deepest = 0;
    let mut stack = vec![(value, 0)];
    while let Some((value, depth)) = stack.pop() {
        let depth = depth + 1;
        match value {
            Value::Array(items) => stack.extend(items.iter().map(|item| (item, depth))),
            Value::Object(fields) => stack.extend(fields.values().map(|item| (item, depth))),
            _ => continue,
        }
        deepest = deepest.max(depth);
    }
    deepest
}

impl FromStr for ElmDocument {
    type Err = ElmError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_json(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use octofhir_elmtree_diagnostics::{ELM0001, ErrorKind};
    use serde_json::json;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_document_is_shareable() {
        assert_send_sync::<ElmDocument>();
    }

    #[test]
    fn test_from_json() {
        let doc = ElmDocument::from_json(r#"{"library": {"identifier": {"id": "X"}}}"#).unwrap();
        assert!(doc.library().unwrap().contains_key("identifier"));
    }

    #[test]
    fn test_envelope_checks() {
        let err = ElmDocument::from_value(json!([])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidShape);
        assert_eq!(err.code(), ELM0002);

        let err = ElmDocument::from_value(json!({"identifier": {}})).unwrap_err();
        assert_eq!(err.code(), ELM0003);

        let err = ElmDocument::from_value(json!({"library": []})).unwrap_err();
        assert_eq!(err.code(), ELM0004);
        assert_eq!(err.path().map(ToString::to_string).as_deref(), Some("library"));
    }

    fn nested(levels: usize) -> Value {
        let mut value = json!(true);
        for _ in 0..levels {
            value = json!([value]);
        }
        json!({"library": {"statements": value}})
    }

    #[test]
    fn test_depth_limit() {
        assert_eq!(nesting_depth(&json!(1)), 0);
        assert_eq!(nesting_depth(&json!({"a": [1, {"b": []}]})), 4);

        assert!(ElmDocument::from_value(nested(MAX_DEPTH - 2)).is_ok());
        let err = ElmDocument::from_value(nested(MAX_DEPTH + 10)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidShape);
        assert_eq!(err.code(), ELM0005);
    }

    #[test]
    fn test_from_reader_malformed() {
        let err = ElmDocument::from_reader("{\"library\": ".as_bytes()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedInput);
        assert_eq!(err.code(), ELM0001);
    }

    #[test]
    fn test_from_str_trait() {
        let doc: ElmDocument = r#"{"library": {}}"#.parse().unwrap();
        assert_eq!(doc.into_value(), json!({"library": {}}));
    }
}
