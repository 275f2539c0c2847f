//! ELM error codes following a structured numbering system
//!
//! Error code ranges:
//! - ELM0001-ELM0099: Input errors (JSON syntax, document shape)
//! - ELM0100-ELM0199: Structure errors (sections, definition fields)
//! - ELM0200-ELM0299: Lookup errors (rule selection)
//! - ELM0400-ELM0499: System errors (I/O)

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// Error code identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ErrorCode(u16);

impl ErrorCode {
    /// Create a new error code
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Get the numeric code
    pub const fn code(&self) -> u16 {
        self.0
    }

    /// Get error information for this code
    pub fn info(&self) -> &'static ErrorInfo {
        ERROR_INFO.get(&self.0).unwrap_or(&UNKNOWN_ERROR)
    }

    /// Check if this is an input error (0001-0099)
    pub const fn is_input_error(&self) -> bool {
        self.0 >= 1 && self.0 < 100
    }

    /// Check if this is a structure error (0100-0199)
    pub const fn is_structure_error(&self) -> bool {
        self.0 >= 100 && self.0 < 200
    }

    /// Check if this is a lookup error (0200-0299)
    pub const fn is_lookup_error(&self) -> bool {
        self.0 >= 200 && self.0 < 300
    }

    /// Check if this is a system error (0400-0499)
    pub const fn is_system_error(&self) -> bool {
        self.0 >= 400 && self.0 < 500
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ELM{:04}", self.0)
    }
}

/// Information about an error code
#[derive(Debug, Clone)]
pub struct ErrorInfo {
    /// Short description of the error
    pub description: &'static str,
    /// Detailed help text
    pub help: Option<&'static str>,
}

impl ErrorInfo {
    const fn new(description: &'static str) -> Self {
        Self {
            description,
            help: None,
        }
    }

    const fn with_help(mut self, help: &'static str) -> Self {
        self.help = Some(help);
        self
    }
}

static UNKNOWN_ERROR: ErrorInfo = ErrorInfo::new("Unknown error");

static ERROR_INFO: LazyLock<HashMap<u16, ErrorInfo>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    // Input errors (0001-0099)
    map.insert(1, ErrorInfo::new("Malformed JSON input"));
    map.insert(
        2,
        ErrorInfo::new("Document root is not a JSON object")
            .with_help("ELM JSON documents have the form { \"library\": { ... } }"),
    );
    map.insert(3, ErrorInfo::new("Document has no `library` entry"));
    map.insert(4, ErrorInfo::new("`library` entry is not a JSON object"));
    map.insert(
        5,
        ErrorInfo::new("Document nests arrays and objects too deeply")
            .with_help("At most 128 levels of nesting are accepted, as when parsing JSON text"),
    );

    // Structure errors (0100-0199)
    map.insert(
        100,
        ErrorInfo::new("Section is absent from the library")
            .with_help("The library does not declare this section at all"),
    );
    map.insert(
        101,
        ErrorInfo::new("Section has no `def` entry")
            .with_help("A present section must hold its definitions under `def`"),
    );
    map.insert(102, ErrorInfo::new("Section is not a JSON object"));
    map.insert(103, ErrorInfo::new("Section `def` entry is not a JSON array"));
    map.insert(104, ErrorInfo::new("Definition entry has no name"));
    map.insert(105, ErrorInfo::new("Definition name is not a string"));

    // Lookup errors (0200-0299)
    map.insert(
        200,
        ErrorInfo::new("No statement with the requested name")
            .with_help("Statement names are matched exactly and case-sensitively"),
    );

    // System errors (0400-0499)
    map.insert(401, ErrorInfo::new("I/O error"));
    map.insert(404, ErrorInfo::new("File not found"));

    map
});

// Input errors
pub const ELM0001: ErrorCode = ErrorCode::new(1);
pub const ELM0002: ErrorCode = ErrorCode::new(2);
pub const ELM0003: ErrorCode = ErrorCode::new(3);
pub const ELM0004: ErrorCode = ErrorCode::new(4);
pub const ELM0005: ErrorCode = ErrorCode::new(5);

// Structure errors
pub const ELM0100: ErrorCode = ErrorCode::new(100);
pub const ELM0101: ErrorCode = ErrorCode::new(101);
pub const ELM0102: ErrorCode = ErrorCode::new(102);
pub const ELM0103: ErrorCode = ErrorCode::new(103);
pub const ELM0104: ErrorCode = ErrorCode::new(104);
pub const ELM0105: ErrorCode = ErrorCode::new(105);

// Lookup errors
pub const ELM0200: ErrorCode = ErrorCode::new(200);

// System errors
pub const ELM0401: ErrorCode = ErrorCode::new(401);
pub const ELM0404: ErrorCode = ErrorCode::new(404);
