//! ELM tree error types

use crate::{
    ELM0001, ELM0100, ELM0200, ELM0401, ELM0404, ElmPath, ErrorCode, SourceLocation,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Diagnostic severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// Error - the requested operation cannot proceed
    Error,
    /// Warning - potential issue but can continue
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A diagnostic message with location and context
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Severity level
    pub severity: Severity,
    /// Error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Position in the raw JSON text
    pub location: Option<SourceLocation>,
    /// Position in the document tree
    pub path: Option<ElmPath>,
    /// Additional context or help
    pub help: Option<String>,
}

impl Diagnostic {
    /// Create a new error diagnostic
    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
            location: None,
            path: None,
            help: None,
        }
    }

    /// Create a new warning diagnostic
    pub fn warning(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            ..Self::error(code, message)
        }
    }

    /// Set the text location
    pub fn with_location(mut self, location: SourceLocation) -> Self {
        self.location = Some(location);
        self
    }

    /// Set the document path
    pub fn with_path(mut self, path: ElmPath) -> Self {
        self.path = Some(path);
        self
    }

    /// Set help text
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Render with terminal colours
    #[cfg(feature = "colored")]
    pub fn render_colored(&self) -> String {
        use colored::Colorize;

        let severity = match self.severity {
            Severity::Error => format!("{}[{}]", self.severity, self.code).red().bold(),
            Severity::Warning => format!("{}[{}]", self.severity, self.code).yellow().bold(),
        };
        let mut out = format!("{}: {}", severity, self.message.bold());
        if let Some(loc) = &self.location {
            out.push_str(&format!("\n  {} {}", "-->".blue().bold(), loc));
        }
        if let Some(path) = &self.path {
            out.push_str(&format!("\n  {} {}", "at".blue().bold(), path.to_string().cyan()));
        }
        if let Some(help) = &self.help {
            out.push_str(&format!("\n  {} {}", "help:".green().bold(), help));
        }
        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} - {}", self.severity, self.code, self.message)?;
        if let Some(loc) = &self.location {
            write!(f, " at {}", loc)?;
        }
        if let Some(path) = &self.path {
            write!(f, " at {}", path)?;
        }
        Ok(())
    }
}

/// Failure category of an [`ElmError`], without payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    MalformedInput,
    InvalidShape,
    MissingSection,
    MissingField,
    RuleNotFound,
    Io,
}

/// Main ELM tree error type
#[derive(Debug, Clone, Error)]
pub enum ElmError {
    /// Input text is not valid JSON
    #[error("{code}: {message}")]
    MalformedInput {
        code: ErrorCode,
        message: String,
        location: Option<SourceLocation>,
    },

    /// Valid JSON that is not an ELM library document
    #[error("{code}: {message}")]
    InvalidShape {
        code: ErrorCode,
        message: String,
        path: ElmPath,
    },

    /// A top-level library section is absent
    #[error("{code}: section `{section}` is absent")]
    MissingSection {
        code: ErrorCode,
        section: String,
        path: ElmPath,
    },

    /// A section or definition entry lacks a required field
    #[error("{code}: {message}")]
    MissingField {
        code: ErrorCode,
        field: String,
        message: String,
        path: ElmPath,
    },

    /// No statement matches the requested rule name
    #[error("{code}: no statement named `{name}`")]
    RuleNotFound { code: ErrorCode, name: String },

    /// The input could not be read
    #[error("{code}: {message}")]
    Io {
        code: ErrorCode,
        message: String,
        file: Option<PathBuf>,
    },
}

impl ElmError {
    /// Create a malformed-input error from a JSON parser error
    pub fn malformed_input(error: &serde_json::Error) -> Self {
        Self::MalformedInput {
            code: ELM0001,
            message: format!("malformed JSON: {}", error),
            location: SourceLocation::from_json_error(error),
        }
    }

    /// Create an invalid-shape error
    pub fn invalid_shape(code: ErrorCode, path: ElmPath) -> Self {
        Self::InvalidShape {
            code,
            message: code.info().description.to_string(),
            path,
        }
    }

    /// Create a missing-section error
    pub fn missing_section(section: impl Into<String>, path: ElmPath) -> Self {
        Self::MissingSection {
            code: ELM0100,
            section: section.into(),
            path,
        }
    }

    /// Create a missing-field error
    pub fn missing_field(code: ErrorCode, field: impl Into<String>, path: ElmPath) -> Self {
        let field = field.into();
        Self::MissingField {
            code,
            message: format!("{}: `{}` at {}", code.info().description, field, path),
            field,
            path,
        }
    }

    /// Create a rule-not-found error
    pub fn rule_not_found(name: impl Into<String>) -> Self {
        Self::RuleNotFound {
            code: ELM0200,
            name: name.into(),
        }
    }

    /// Create an I/O error, optionally naming the file being read
    pub fn io(error: &std::io::Error, file: Option<PathBuf>) -> Self {
        let code = if error.kind() == std::io::ErrorKind::NotFound {
            ELM0404
        } else {
            ELM0401
        };
        let message = match &file {
            Some(path) => format!("cannot read {}: {}", path.display(), error),
            None => format!("cannot read input: {}", error),
        };
        Self::Io {
            code,
            message,
            file,
        }
    }

    /// Get the failure category
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MalformedInput { .. } => ErrorKind::MalformedInput,
            Self::InvalidShape { .. } => ErrorKind::InvalidShape,
            Self::MissingSection { .. } => ErrorKind::MissingSection,
            Self::MissingField { .. } => ErrorKind::MissingField,
            Self::RuleNotFound { .. } => ErrorKind::RuleNotFound,
            Self::Io { .. } => ErrorKind::Io,
        }
    }

    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::MalformedInput { code, .. }
            | Self::InvalidShape { code, .. }
            | Self::MissingSection { code, .. }
            | Self::MissingField { code, .. }
            | Self::RuleNotFound { code, .. }
            | Self::Io { code, .. } => *code,
        }
    }

    /// Get the document path if the error is tied to one
    pub fn path(&self) -> Option<&ElmPath> {
        match self {
            Self::InvalidShape { path, .. }
            | Self::MissingSection { path, .. }
            | Self::MissingField { path, .. } => Some(path),
            _ => None,
        }
    }

    /// Convert to a diagnostic
    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diag = Diagnostic::error(self.code(), self.to_string());
        if let Self::MalformedInput {
            location: Some(loc),
            ..
        } = self
        {
            diag = diag.with_location(*loc);
        }
        if let Some(path) = self.path() {
            diag = diag.with_path(path.clone());
        }
        if let Some(help) = self.code().info().help {
            diag = diag.with_help(help);
        }
        diag
    }
}
