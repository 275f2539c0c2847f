//! Typed ELM abstract syntax tree
//!
//! This crate defines the tree that ELM JSON documents are built into, and
//! the primitives to inspect it:
//! - [`Node`], a closed set of node kinds mirroring the JSON structure
//! - [`walk`], a lazy pre-order traversal
//! - [`Visitor`], per-kind hooks with default descent
//! - [`ExpressionKind`], a classification lens over ELM expression objects
//! - [`dump`], an indented text rendering

mod dump;
mod expression;
mod literal;
mod node;
mod visitor;
mod walk;

pub use dump::*;
pub use expression::*;
pub use literal::*;
pub use node::*;
pub use visitor::*;
pub use walk::*;
