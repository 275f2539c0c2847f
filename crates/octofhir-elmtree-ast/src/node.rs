//! AST node model
//!
//! An ELM document is self-describing JSON, so the tree mirrors it
//! structurally: objects become [`Node::Mapping`], arrays become
//! [`Node::Sequence`] and scalars become [`Node::Literal`]. Entries of a
//! library `def` section are bound to their name as
//! [`Node::NamedDefinition`].

use crate::{Literal, Visitor, Walk, walk, walk_node};
use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;
use std::iter::FusedIterator;

/// Ordered fields of a [`Node::Mapping`]
pub type Fields = IndexMap<String, Node>;

/// A node of the ELM tree
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Node {
    /// Scalar value
    Literal(Literal),
    /// Ordered list of child nodes
    Sequence(Vec<Node>),
    /// Ordered key to child pairs, in document field order
    Mapping(Fields),
    /// A `def` entry bound to its name
    NamedDefinition(NamedDefinition),
}

/// A definition from a library section (`statements`, `valueSets`, ...)
///
/// For definitions carrying an `expression` (statements, functions), the body
/// is the expression tree and the remaining entry fields other than `name`
/// are kept as attributes (`context`, `accessLevel`, function `operand`
/// declarations, ...). Other definitions have the whole entry as body and no
/// attributes. Children of a definition are its body followed by its
/// attribute values in field order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamedDefinition {
    /// Definition name
    pub name: String,
    /// Definition body
    pub body: Box<Node>,
    /// Entry fields that are neither the name nor the body
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub attributes: Fields,
}

impl NamedDefinition {
    pub fn new(name: impl Into<String>, body: Node) -> Self {
        Self {
            name: name.into(),
            body: Box::new(body),
            attributes: Fields::new(),
        }
    }

    pub fn with_attributes(mut self, attributes: Fields) -> Self {
        self.attributes = attributes;
        self
    }

    /// Get a definition attribute
    pub fn attribute(&self, key: &str) -> Option<&Node> {
        self.attributes.get(key)
    }
}

/// Kind of a [`Node`], without payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NodeKind {
    Literal,
    Sequence,
    Mapping,
    NamedDefinition,
}

impl NodeKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Literal => "Literal",
            Self::Sequence => "Sequence",
            Self::Mapping => "Mapping",
            Self::NamedDefinition => "NamedDefinition",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Node {
    /// Get the node kind
    pub const fn kind(&self) -> NodeKind {
        match self {
            Self::Literal(_) => NodeKind::Literal,
            Self::Sequence(_) => NodeKind::Sequence,
            Self::Mapping(_) => NodeKind::Mapping,
            Self::NamedDefinition(_) => NodeKind::NamedDefinition,
        }
    }

    /// Direct children in stored order.
    ///
    /// Mapping children are the field values in insertion order; a named
    /// definition yields its body, then its attribute values.
    pub fn children(&self) -> Children<'_> {
        let inner = match self {
            Self::Literal(_) => ChildrenInner::Leaf,
            Self::Sequence(items) => ChildrenInner::Sequence(items.iter()),
            Self::Mapping(fields) => ChildrenInner::Mapping(fields.values()),
            Self::NamedDefinition(def) => {
                ChildrenInner::Definition(Some(&*def.body), def.attributes.values())
            }
        };
        Children { inner }
    }

    /// Pre-order traversal starting at this node
    pub fn walk(&self) -> Walk<'_> {
        walk(self)
    }

    /// Dispatch to a visitor
    pub fn accept<'ast, V: Visitor<'ast>>(&'ast self, visitor: &mut V) {
        walk_node(visitor, self);
    }

    /// Whether the node has no children
    pub fn is_leaf(&self) -> bool {
        self.children().len() == 0
    }

    /// Number of nodes reachable from this one, itself included
    pub fn node_count(&self) -> usize {
        self.walk().count()
    }

    /// Get a mapping field by key
    pub fn get(&self, key: &str) -> Option<&Node> {
        match self {
            Self::Mapping(fields) => fields.get(key),
            _ => None,
        }
    }

    /// Get a sequence item by position
    pub fn index(&self, index: usize) -> Option<&Node> {
        match self {
            Self::Sequence(items) => items.get(index),
            _ => None,
        }
    }

    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Self::Literal(lit) => Some(lit),
            _ => None,
        }
    }

    /// Get the value of a string literal
    pub fn as_str(&self) -> Option<&str> {
        self.as_literal().and_then(Literal::as_str)
    }

    pub fn as_sequence(&self) -> Option<&[Node]> {
        match self {
            Self::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&Fields> {
        match self {
            Self::Mapping(fields) => Some(fields),
            _ => None,
        }
    }

    pub fn as_named_definition(&self) -> Option<&NamedDefinition> {
        match self {
            Self::NamedDefinition(def) => Some(def),
            _ => None,
        }
    }

    /// Name of a named definition
    pub fn name(&self) -> Option<&str> {
        self.as_named_definition().map(|def| def.name.as_str())
    }

    /// One-line description: kind plus a short payload summary
    pub fn summary(&self) -> String {
        match self {
            Self::Literal(lit) => format!("Literal {}", lit),
            Self::Sequence(items) => format!("Sequence ({})", plural(items.len(), "item")),
            Self::Mapping(fields) => format!("Mapping ({})", plural(fields.len(), "field")),
            Self::NamedDefinition(def) => format!("NamedDefinition {:?}", def.name),
        }
    }
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("1 {}", noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

impl From<Literal> for Node {
    fn from(lit: Literal) -> Self {
        Self::Literal(lit)
    }
}

impl From<NamedDefinition> for Node {
    fn from(def: NamedDefinition) -> Self {
        Self::NamedDefinition(def)
    }
}

impl From<Vec<Node>> for Node {
    fn from(items: Vec<Node>) -> Self {
        Self::Sequence(items)
    }
}

impl From<Vec<NamedDefinition>> for Node {
    fn from(definitions: Vec<NamedDefinition>) -> Self {
        Self::Sequence(definitions.into_iter().map(Node::from).collect())
    }
}

impl From<Fields> for Node {
    fn from(fields: Fields) -> Self {
        Self::Mapping(fields)
    }
}

/// Iterator over the direct children of a [`Node`]
#[derive(Debug, Clone)]
pub struct Children<'a> {
    inner: ChildrenInner<'a>,
}

#[derive(Debug, Clone)]
enum ChildrenInner<'a> {
    Leaf,
    Sequence(std::slice::Iter<'a, Node>),
    Mapping(indexmap::map::Values<'a, String, Node>),
    Definition(Option<&'a Node>, indexmap::map::Values<'a, String, Node>),
}

impl<'a> Iterator for Children<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            ChildrenInner::Leaf => None,
            ChildrenInner::Sequence(iter) => iter.next(),
            ChildrenInner::Mapping(iter) => iter.next(),
            ChildrenInner::Definition(body, attributes) => body.take().or_else(|| attributes.next()),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match &self.inner {
            ChildrenInner::Leaf => 0,
            ChildrenInner::Sequence(iter) => iter.len(),
            ChildrenInner::Mapping(iter) => iter.len(),
            ChildrenInner::Definition(body, attributes) => {
                usize::from(body.is_some()) + attributes.len()
            }
        };
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for Children<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            ChildrenInner::Leaf => None,
            ChildrenInner::Sequence(iter) => iter.next_back(),
            ChildrenInner::Mapping(iter) => iter.next_back(),
            ChildrenInner::Definition(body, attributes) => {
                attributes.next_back().or_else(|| body.take())
            }
        }
    }
}

impl ExactSizeIterator for Children<'_> {}

impl FusedIterator for Children<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn and_expression() -> Node {
        let mut fields = Fields::new();
        fields.insert("type".to_string(), Literal::from("And").into());
        fields.insert(
            "operand".to_string(),
            Node::Sequence(vec![Literal::from(true).into(), Literal::from(false).into()]),
        );
        Node::Mapping(fields)
    }

    #[test]
    fn test_children_order() {
        let node = and_expression();
        let kinds: Vec<_> = node.children().map(Node::kind).collect();
        assert_eq!(kinds, vec![NodeKind::Literal, NodeKind::Sequence]);
        assert_eq!(node.children().len(), 2);

        let reversed: Vec<_> = node.children().rev().map(Node::kind).collect();
        assert_eq!(reversed, vec![NodeKind::Sequence, NodeKind::Literal]);
    }

    #[test]
    fn test_definition_has_body_as_only_child() {
        let def = Node::from(NamedDefinition::new("R1", and_expression()));
        assert_eq!(def.kind(), NodeKind::NamedDefinition);
        assert_eq!(def.name(), Some("R1"));
        assert_eq!(def.children().count(), 1);
        assert_eq!(def.node_count(), 6);
    }

    #[test]
    fn test_definition_children_include_attributes() {
        let mut attributes = Fields::new();
        attributes.insert("context".to_string(), Literal::from("Patient").into());
        attributes.insert(
            "operand".to_string(),
            Node::Sequence(vec![Literal::from("x").into()]),
        );
        let def = Node::from(NamedDefinition::new("F", and_expression()).with_attributes(attributes));

        let kinds: Vec<_> = def.children().map(Node::kind).collect();
        assert_eq!(kinds, vec![NodeKind::Mapping, NodeKind::Literal, NodeKind::Sequence]);
        assert_eq!(def.children().len(), 3);

        let reversed: Vec<_> = def.children().rev().map(Node::kind).collect();
        assert_eq!(reversed, vec![NodeKind::Sequence, NodeKind::Literal, NodeKind::Mapping]);
        assert_eq!(def.node_count(), 9);
    }

    #[test]
    fn test_accessors() {
        let node = and_expression();
        assert_eq!(node.get("type").and_then(Node::as_str), Some("And"));
        assert_eq!(
            node.get("operand").and_then(|o| o.index(1)).and_then(Node::as_literal),
            Some(&Literal::Boolean(false))
        );
        assert!(node.get("missing").is_none());
        assert!(Node::from(Literal::Null).is_leaf());
        assert!(!node.is_leaf());
    }

    #[test]
    fn test_summary() {
        let node = and_expression();
        assert_eq!(node.summary(), "Mapping (2 fields)");
        assert_eq!(
            node.get("operand").map(Node::summary).as_deref(),
            Some("Sequence (2 items)")
        );
        assert_eq!(
            Node::from(NamedDefinition::new("R1", Node::Sequence(vec![]))).summary(),
            "NamedDefinition \"R1\""
        );
        assert_eq!(Node::Mapping(Fields::new()).summary(), "Mapping (0 fields)");
    }
}
