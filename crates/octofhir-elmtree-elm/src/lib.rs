//! ELM (Expression Logical Model) JSON documents as typed trees
//!
//! This crate provides:
//! - [`ElmDocument`], a loaded ELM JSON library with envelope validation
//! - Section extraction (`identifier`, `usings`, `statements`, ...)
//! - Structural building of sections into [`octofhir_elmtree_ast::Node`] trees
//! - Rule selection by statement name
//!
//! # Example
//!
//! ```
//! use octofhir_elmtree_elm::ElmDocument;
//!
//! let doc = ElmDocument::from_json(r#"{"library": {"statements": {"def": [
//!     {"name": "InDemographic", "expression": {"type": "And", "operand": [true, false]}}
//! ]}}}"#)?;
//!
//! let rule = doc.build_rule("InDemographic")?;
//! assert_eq!(octofhir_elmtree_ast::Node::from(rule).walk().count(), 6);
//! # Ok::<(), octofhir_elmtree_diagnostics::ElmError>(())
//! ```

mod builder;
mod document;
mod section;
mod select;

pub use builder::*;
pub use document::*;
pub use section::*;
pub use select::*;
