//! Classification of ELM expression mappings
//!
//! ELM encodes every expression as an object whose `type` field names the
//! expression class (`"And"`, `"Equal"`, `"InValueSet"`, ...). The tree keeps
//! such objects as plain [`Node::Mapping`]s; [`ExpressionKind`] is a
//! read-only lens that groups them for inspection.

use crate::Node;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Field holding the ELM expression class
pub const TYPE_FIELD: &str = "type";

/// Broad category of an ELM expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpressionKind {
    /// Literal value (`Literal`, `Null`, `Quantity`, ...)
    Literal,
    /// Reference to a definition, parameter, value set, property, ...
    Reference,
    /// Equality or ordering comparison
    Comparison,
    /// Boolean combination (`And`, `Or`, `Not`, ...)
    Boolean,
    /// Membership or containment test (`In`, `InValueSet`, ...)
    Membership,
    /// Any other expression class
    Other,
}

impl ExpressionKind {
    /// Classify an ELM expression class name
    pub fn from_type_name(name: &str) -> Self {
        match name {
            "Literal" | "Null" | "Quantity" | "Ratio" => Self::Literal,

            "ExpressionRef" | "FunctionRef" | "ParameterRef" | "ValueSetRef" | "CodeSystemRef"
            | "CodeRef" | "ConceptRef" | "IdentifierRef" | "AliasRef" | "QueryLetRef"
            | "OperandRef" | "Property" => Self::Reference,

            "Equal" | "NotEqual" | "Equivalent" | "Less" | "LessOrEqual" | "Greater"
            | "GreaterOrEqual" => Self::Comparison,

            "And" | "Or" | "Xor" | "Not" | "Implies" => Self::Boolean,

            "In" | "Contains" | "InValueSet" | "AnyInValueSet" | "InCodeSystem"
            | "AnyInCodeSystem" | "IncludedIn" | "Includes" | "ProperIn" | "ProperContains"
            | "ProperIncludedIn" | "ProperIncludes" => Self::Membership,

            _ => Self::Other,
        }
    }

    /// Classify a node, if it is a mapping with a string `type` field
    pub fn of(node: &Node) -> Option<Self> {
        type_name(node).map(Self::from_type_name)
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Literal => "literal",
            Self::Reference => "reference",
            Self::Comparison => "comparison",
            Self::Boolean => "boolean",
            Self::Membership => "membership",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for ExpressionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The ELM expression class of a mapping node
pub fn type_name(node: &Node) -> Option<&str> {
    node.get(TYPE_FIELD).and_then(Node::as_str)
}
