//! JSON to AST building
//!
//! One structural rule covers every ELM shape: objects become mappings (field
//! order kept), arrays become sequences (element order kept), scalars become
//! literals. `def` entries are additionally bound to their name, with their
//! `expression` as body when they have one.

use crate::section::definition_entry;
use crate::{DefSection, ElmDocument, SectionView};
use octofhir_elmtree_ast::{Fields, Literal, NamedDefinition, Node};
use octofhir_elmtree_diagnostics::Result;
use rust_decimal::Decimal;
use serde_json::{Map, Number, Value};

/// Build a tree mirroring `value`
pub fn build_from_value(value: &Value) -> Node {
    match value {
        Value::Null => Literal::Null.into(),
        Value::Bool(b) => Literal::Boolean(*b).into(),
        Value::Number(n) => literal_from_number(n).into(),
        Value::String(s) => Literal::String(s.clone()).into(),
        Value::Array(items) => Node::Sequence(items.iter().map(build_from_value).collect()),
        Value::Object(fields) => Node::Mapping(
            fields
                .iter()
                .map(|(key, value)| (key.clone(), build_from_value(value)))
                .collect(),
        ),
    }
}

/// Build the tree of an `identifier` or `schemaIdentifier` value
pub fn build_identifier(value: &Value) -> Node {
    build_from_value(value)
}

/// Field holding the expression tree of a definition
pub const EXPRESSION: &str = "expression";

/// Build one named definition per entry of a `def` section, in order
pub fn build_section(view: SectionView<'_>) -> Result<Vec<NamedDefinition>> {
    log::debug!("building {} {} definitions", view.len(), view.section());
    view.iter()
        .enumerate()
        .map(|(index, entry)| -> Result<NamedDefinition> {
            let (name, fields) = definition_entry(view.section(), entry, view.path().index(index))?;
            log::trace!("built {} definition `{}`", view.section(), name);
            Ok(build_definition(name, entry, fields))
        })
        .collect()
}

pub(crate) fn build_definition(
    name: &str,
    entry: &Value,
    fields: &Map<String, Value>,
) -> NamedDefinition {
    let Some(expression) = fields.get(EXPRESSION) else {
        return NamedDefinition::new(name, build_from_value(entry));
    };
    let attributes: Fields = fields
        .iter()
        .filter(|(key, _)| key.as_str() != EXPRESSION && key.as_str() != "name")
        .map(|(key, value)| (key.clone(), build_from_value(value)))
        .collect();
    NamedDefinition::new(name, build_from_value(expression)).with_attributes(attributes)
}

/// Convert a JSON number to the narrowest exact literal.
///
/// Integers that fit `i64` stay integers; other numbers become decimals when
/// [`Decimal`] can hold them exactly and floats otherwise.
pub fn literal_from_number(number: &Number) -> Literal {
    if let Some(i) = number.as_i64() {
        return Literal::Integer(i);
    }
    if let Some(u) = number.as_u64() {
        return Literal::Decimal(Decimal::from(u));
    }
    let text = number.to_string();
    Decimal::from_str_exact(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .map(Literal::Decimal)
        .unwrap_or_else(|_| Literal::Float(number.as_f64().unwrap_or(f64::NAN)))
}

impl ElmDocument {
    /// Tree of `library.identifier`
    pub fn build_identifier_node(&self) -> Result<Node> {
        self.identifier().map(build_identifier)
    }

    /// Tree of `library.schemaIdentifier`
    pub fn build_schema_identifier_node(&self) -> Result<Node> {
        self.schema_identifier().map(build_identifier)
    }

    /// Named definitions of a `def` section
    pub fn build_def_section(&self, section: DefSection) -> Result<Vec<NamedDefinition>> {
        build_section(self.def_section(section)?)
    }
}
