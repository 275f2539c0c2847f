//! Visitor pattern for AST traversal

use crate::{Fields, Literal, NamedDefinition, Node};

/// Trait for visiting ELM tree nodes
///
/// Every hook has a default that keeps descending, so an implementation
/// only overrides the nodes it cares about. Overriding [`Visitor::visit_node`]
/// without calling [`walk_node`] stops the descent at that node.
pub trait Visitor<'ast>: Sized {
    /// Visit any node
    fn visit_node(&mut self, node: &'ast Node) {
        walk_node(self, node)
    }

    /// Visit a scalar
    fn visit_literal(&mut self, _literal: &'ast Literal) {}

    /// Visit a sequence
    fn visit_sequence(&mut self, items: &'ast [Node]) {
        for item in items {
            self.visit_node(item);
        }
    }

    /// Visit a mapping
    fn visit_mapping(&mut self, fields: &'ast Fields) {
        for (key, value) in fields {
            self.visit_field(key, value);
        }
    }

    /// Visit one mapping field
    fn visit_field(&mut self, _key: &'ast str, value: &'ast Node) {
        self.visit_node(value)
    }

    /// Visit a named definition: its body, then its attributes as fields
    fn visit_named_definition(&mut self, definition: &'ast NamedDefinition) {
        self.visit_node(&definition.body);
        for (key, value) in &definition.attributes {
            self.visit_field(key, value);
        }
    }
}

/// Default dispatch from a node to the matching visitor hook
pub fn walk_node<'ast, V: Visitor<'ast>>(visitor: &mut V, node: &'ast Node) {
    match node {
        Node::Literal(literal) => visitor.visit_literal(literal),
        Node::Sequence(items) => visitor.visit_sequence(items),
        Node::Mapping(fields) => visitor.visit_mapping(fields),
        Node::NamedDefinition(definition) => visitor.visit_named_definition(definition),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Default)]
    struct KeyCollector<'ast> {
        keys: Vec<&'ast str>,
        literals: usize,
    }

    impl<'ast> Visitor<'ast> for KeyCollector<'ast> {
        fn visit_literal(&mut self, _literal: &'ast Literal) {
            self.literals += 1;
        }

        fn visit_field(&mut self, key: &'ast str, value: &'ast Node) {
            self.keys.push(key);
            self.visit_node(value);
        }
    }

    #[test]
    fn test_visitor_sees_fields_in_order() {
        let mut inner = Fields::new();
        inner.insert("type".to_string(), Literal::from("Equal").into());
        inner.insert("operand".to_string(), Node::Sequence(vec![Literal::Null.into()]));
        let mut outer = Fields::new();
        outer.insert("expression".to_string(), Node::Mapping(inner));
        let root = Node::from(NamedDefinition::new("X", Node::Mapping(outer)));

        let mut collector = KeyCollector::default();
        root.accept(&mut collector);

        assert_eq!(collector.keys, vec!["expression", "type", "operand"]);
        assert_eq!(collector.literals, 2);
    }

    #[test]
    fn test_visitor_sees_definition_attributes() {
        let mut attributes = Fields::new();
        attributes.insert("context".to_string(), Literal::from("Patient").into());
        attributes.insert("accessLevel".to_string(), Literal::from("Public").into());
        let def = NamedDefinition::new("X", Literal::Null.into()).with_attributes(attributes);
        let root = Node::from(def);

        let mut collector = KeyCollector::default();
        root.accept(&mut collector);

        assert_eq!(collector.keys, vec!["context", "accessLevel"]);
        assert_eq!(collector.literals, 3);
    }
}
