//! Indented text rendering of a tree, one node per line

use crate::{Node, Visitor, walk_node};
use std::fmt::Write;

/// Options for [`dump`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpOptions {
    /// Spaces per depth level
    pub indent: usize,
    /// Prefix mapping children with their field name
    pub show_keys: bool,
}

impl Default for DumpOptions {
    fn default() -> Self {
        Self {
            indent: 2,
            show_keys: true,
        }
    }
}

impl DumpOptions {
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub fn without_keys(mut self) -> Self {
        self.show_keys = false;
        self
    }
}

/// Render `root` and everything below it
pub fn dump(root: &Node, options: &DumpOptions) -> String {
    let mut dumper = Dumper {
        options,
        out: String::new(),
        depth: 0,
        key: None,
    };
    dumper.visit_node(root);
    dumper.out
}

struct Dumper<'ast, 'o> {
    options: &'o DumpOptions,
    out: String,
    depth: usize,
    key: Option<&'ast str>,
}

impl<'ast> Visitor<'ast> for Dumper<'ast, '_> {
    fn visit_node(&mut self, node: &'ast Node) {
        let key = self.key.take();
        let pad = self.depth * self.options.indent;
        // Writing to a String cannot fail.
        let _ = match key {
            Some(key) if self.options.show_keys => {
                writeln!(self.out, "{:pad$}{}: {}", "", key, node.summary())
            }
            _ => writeln!(self.out, "{:pad$}{}", "", node.summary()),
        };

        self.depth += 1;
        walk_node(self, node);
        self.depth -= 1;
    }

    fn visit_field(&mut self, key: &'ast str, value: &'ast Node) {
        self.key = Some(key);
        self.visit_node(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Fields, Literal, NamedDefinition};
    use insta::assert_snapshot;

    fn rule() -> Node {
        let mut expression = Fields::new();
        expression.insert("type".to_string(), Literal::from("And").into());
        expression.insert(
            "operand".to_string(),
            Node::Sequence(vec![Literal::from(true).into(), Literal::from(false).into()]),
        );
        NamedDefinition::new("R1", Node::Mapping(expression)).into()
    }

    #[test]
    fn test_dump_with_keys() {
        assert_snapshot!(dump(&rule(), &DumpOptions::default()), @r#"
        NamedDefinition "R1"
          Mapping (2 fields)
            type: Literal "And"
            operand: Sequence (2 items)
              Literal true
              Literal false
        "#);
    }

    #[test]
    fn test_dump_without_keys() {
        let options = DumpOptions::default().with_indent(1).without_keys();
        let out = dump(&rule(), &options);
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[2], "  Literal \"And\"");
        assert_eq!(lines[5], "   Literal false");
    }

    #[test]
    fn test_dump_definition_attributes() {
        let mut attributes = Fields::new();
        attributes.insert("context".to_string(), Literal::from("Patient").into());
        let def = NamedDefinition::new("F", Literal::Null.into()).with_attributes(attributes);
        assert_eq!(
            dump(&def.into(), &DumpOptions::default()),
            "NamedDefinition \"F\"\n  Literal null\n  context: Literal \"Patient\"\n"
        );
    }

    #[test]
    fn test_dump_leaf() {
        assert_eq!(
            dump(&Literal::Null.into(), &DumpOptions::default()),
            "Literal null\n"
        );
    }
}
