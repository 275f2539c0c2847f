//! ELM tree diagnostics and error handling
//!
//! This crate provides the error handling infrastructure shared by the ELM
//! document, builder and walker crates: error codes, document locations and
//! diagnostic reporting.

mod error;
mod error_code;
mod location;

pub use error::*;
pub use error_code::*;
pub use location::*;

/// Result type for ELM tree operations
pub type Result<T> = std::result::Result<T, ElmError>;
