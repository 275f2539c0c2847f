//! ELM (Expression Logical Model) JSON as typed, walkable trees
//!
//! This crate ties together:
//! - Loading compiled CQL libraries from ELM JSON
//! - Extracting library sections (`identifier`, `usings`, `statements`, ...)
//! - Building sections into [`Node`] trees
//! - Selecting a rule by statement name
//! - Pre-order walking and visiting of the built tree
//!
//! # Example
//!
//! ```
//! use octofhir_elmtree::{ElmDocument, Node};
//!
//! let doc = ElmDocument::from_json(r#"{"library": {"statements": {"def": [
//!     {"name": "R1", "expression": {"type": "And", "operand": [true, false]}}
//! ]}}}"#)?;
//!
//! let rule = Node::from(doc.build_rule("R1")?);
//! let kinds: Vec<_> = rule.walk().map(|n| n.kind().as_str()).collect();
//! assert_eq!(
//!     kinds,
//!     ["NamedDefinition", "Mapping", "Literal", "Sequence", "Literal", "Literal"]
//! );
//! # Ok::<(), octofhir_elmtree::ElmError>(())
//! ```

pub use octofhir_elmtree_ast as ast;
pub use octofhir_elmtree_diagnostics as diagnostics;
pub use octofhir_elmtree_elm as elm;

pub use octofhir_elmtree_ast::{
    DumpOptions, ExpressionKind, Literal, NamedDefinition, Node, NodeKind, Visitor, dump, walk,
    walk_with_depth,
};
pub use octofhir_elmtree_diagnostics::{ElmError, ErrorKind, Result};
pub use octofhir_elmtree_elm::{DefSection, ElmDocument, ElmSource, build_section, select_rule};

/// Load a document and build the statement named `name`
pub fn load_rule(source: ElmSource<'_>, name: &str) -> Result<NamedDefinition> {
    let document = ElmDocument::load(source)?;
    log::debug!("selecting rule `{}`", name);
    document.build_rule(name)
}

#[cfg(feature = "cli")]
pub mod cli;
