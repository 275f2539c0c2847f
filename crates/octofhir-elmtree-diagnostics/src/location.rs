//! Locations inside ELM input: text positions and document paths

use serde::{Deserialize, Serialize};
use std::fmt;

/// Position in the raw JSON text, as reported by the JSON parser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceLocation {
    /// Line number (1-based)
    pub line: usize,
    /// Column number (1-based)
    pub column: usize,
}

impl SourceLocation {
    /// Create a new source location
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Location reported by a `serde_json` error.
    ///
    /// Returns `None` for errors that are not tied to a text position
    /// (for example I/O failures while reading).
    pub fn from_json_error(error: &serde_json::Error) -> Option<Self> {
        if error.line() == 0 {
            None
        } else {
            Some(Self::new(error.line(), error.column()))
        }
    }
}

impl Default for SourceLocation {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// One step of an [`ElmPath`]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PathSegment {
    /// Object field
    Key(String),
    /// Array element
    Index(usize),
}

/// Path from the document root to a value, e.g. `library.statements.def[3]`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ElmPath {
    segments: Vec<PathSegment>,
}

impl ElmPath {
    /// The document root
    pub const fn root() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Path to the `library` entry
    pub fn library() -> Self {
        Self::root().key("library")
    }

    /// Extend the path with an object field
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.segments.push(PathSegment::Key(key.into()));
        self
    }

    /// Extend the path with an array index
    pub fn index(mut self, index: usize) -> Self {
        self.segments.push(PathSegment::Index(index));
        self
    }

    /// Path segments from the root
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Whether this is the document root
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for ElmPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return write!(f, "$");
        }
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Key(key) if i == 0 => write!(f, "{}", key)?,
                PathSegment::Key(key) => write!(f, ".{}", key)?,
                PathSegment::Index(index) => write!(f, "[{}]", index)?,
            }
        }
        Ok(())
    }
}
