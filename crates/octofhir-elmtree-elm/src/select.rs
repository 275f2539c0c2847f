//! Rule selection by statement name

use crate::ElmDocument;
use crate::builder::build_definition;
use crate::section::definition_entry;
use octofhir_elmtree_ast::NamedDefinition;
use octofhir_elmtree_diagnostics::{ElmError, Result};
use serde_json::Value;

/// Select the statement named exactly `name`.
///
/// Statement names are not unique in ELM; the first match in document order
/// wins.
pub fn select_rule<'a>(statements: &'a [NamedDefinition], name: &str) -> Result<&'a NamedDefinition> {
    statements
        .iter()
        .find(|def| def.name == name)
        .ok_or_else(|| ElmError::rule_not_found(name))
}

impl ElmDocument {
    /// Build the statement named `name`.
    ///
    /// Only the selected entry is built. Entries are checked in document
    /// order up to the first match, so an unnamed entry after it is not an
    /// error here.
    pub fn build_rule(&self, name: &str) -> Result<NamedDefinition> {
        let view = self.statements()?;
        for (index, entry) in view.iter().enumerate() {
            let (entry_name, fields) =
                definition_entry(view.section(), entry, view.path().index(index))?;
            if entry_name != name {
                continue;
            }
            let duplicates = view
                .iter()
                .skip(index + 1)
                .filter(|rest| rest.get("name").and_then(Value::as_str) == Some(name))
                .count();
            if duplicates > 0 {
                log::warn!(
                    "statement `{}` is defined {} times, using the first",
                    name,
                    duplicates + 1
                );
            }
            log::debug!("built statement `{}` at {}", name, view.path().index(index));
            return Ok(build_definition(entry_name, entry, fields));
        }
        Err(ElmError::rule_not_found(name))
    }

    /// Statement names in document order
    pub fn rule_names(&self) -> Result<Vec<&str>> {
        self.statements()?.names()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use octofhir_elmtree_ast::{Literal, Node};
    use octofhir_elmtree_diagnostics::ErrorKind;

    fn def(name: &str, marker: i64) -> NamedDefinition {
        NamedDefinition::new(name, Node::Literal(Literal::Integer(marker)))
    }

    #[test]
    fn test_first_match_wins() {
        let statements = vec![def("A", 0), def("X", 1), def("X", 2)];
        let rule = select_rule(&statements, "X").unwrap();
        assert!(std::ptr::eq(rule, &statements[1]));
        assert_eq!(rule.body.as_literal(), Some(&Literal::Integer(1)));
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let statements = vec![def("InDemographic", 0)];
        let err = select_rule(&statements, "indemographic").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RuleNotFound);
        assert_eq!(err.to_string(), "ELM0200: no statement named `indemographic`");
    }

    #[test]
    fn test_empty_statements() {
        let err = select_rule(&[], "X").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RuleNotFound);
    }

    #[test]
    fn test_build_rule_builds_only_up_to_the_match() {
        let doc = ElmDocument::from_json(
            r#"{"library": {"statements": {"def": [
                {"name": "A", "expression": {"type": "Null"}},
                {"expression": {"type": "Null"}}
            ]}}}"#,
        )
        .unwrap();
        assert_eq!(doc.build_rule("A").unwrap().name, "A");

        let err = doc.build_rule("B").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingField);
    }

    #[test]
    fn test_build_rule_takes_first_duplicate() {
        let doc = ElmDocument::from_json(
            r#"{"library": {"statements": {"def": [
                {"name": "X", "expression": 1},
                {"name": "X", "expression": 2}
            ]}}}"#,
        )
        .unwrap();
        assert_eq!(doc.build_rule("X").unwrap().body.as_literal(), Some(&Literal::Integer(1)));
    }
}
