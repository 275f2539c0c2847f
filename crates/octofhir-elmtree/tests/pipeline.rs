//! End-to-end: load, select, walk and visit

use insta::assert_snapshot;
use octofhir_elmtree::{
    DumpOptions, ElmSource, ErrorKind, ExpressionKind, Node, Visitor, dump, load_rule, walk,
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::collections::BTreeMap;
use std::io::Write;

const LIBRARY: &str = r#"{
  "library": {
    "identifier": {"id": "ChlamydiaScreening", "version": "1"},
    "valueSets": {"def": [
      {"name": "Female Administrative Sex", "id": "2.16.840.1.113883.3.560.100.2"}
    ]},
    "statements": {"def": [
      {
        "name": "InDemographic",
        "context": "Patient",
        "expression": {
          "type": "And",
          "operand": [
            {
              "type": "InValueSet",
              "code": {"path": "gender", "type": "Property"},
              "valueset": {"name": "Female Administrative Sex", "type": "ValueSetRef"}
            },
            {
              "type": "LessOrEqual",
              "operand": [
                {"name": "AgeInYears", "type": "FunctionRef"},
                {"valueType": "{urn:hl7-org:elm-types:r1}Integer", "value": "24", "type": "Literal"}
              ]
            }
          ]
        }
      }
    ]}
  }
}"#;

#[derive(Default)]
struct KindCounter {
    counts: BTreeMap<&'static str, usize>,
}

impl<'ast> Visitor<'ast> for KindCounter {
    fn visit_mapping(&mut self, fields: &'ast octofhir_elmtree::ast::Fields) {
        let node_kind = fields
            .get("type")
            .and_then(Node::as_str)
            .map(ExpressionKind::from_type_name);
        if let Some(kind) = node_kind {
            *self.counts.entry(kind.as_str()).or_default() += 1;
        }
        for (key, value) in fields {
            self.visit_field(key, value);
        }
    }
}

#[test]
fn test_rule_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(LIBRARY.as_bytes()).unwrap();

    let rule = load_rule(ElmSource::Path(file.path()), "InDemographic").unwrap();
    assert_eq!(rule.attribute("context").and_then(Node::as_str), Some("Patient"));

    let root = Node::from(rule);
    let mut counter = KindCounter::default();
    root.accept(&mut counter);
    assert_eq!(
        counter.counts,
        BTreeMap::from([
            ("boolean", 1),
            ("comparison", 1),
            ("literal", 1),
            ("membership", 1),
            ("reference", 3),
        ])
    );
}

#[test]
fn test_walk_visits_expression_classes_in_order() {
    let root = Node::from(load_rule(ElmSource::Text(LIBRARY), "InDemographic").unwrap());
    let classes: Vec<_> = walk(&root)
        .filter_map(|node| node.get("type").and_then(Node::as_str))
        .collect();
    assert_eq!(
        classes,
        vec![
            "And",
            "InValueSet",
            "Property",
            "ValueSetRef",
            "LessOrEqual",
            "FunctionRef",
            "Literal",
        ]
    );
}

#[test]
fn test_dump_rule() {
    let root = Node::from(load_rule(ElmSource::Text(LIBRARY), "InDemographic").unwrap());
    assert_snapshot!(dump(&root, &DumpOptions::default()), @r#"
    NamedDefinition "InDemographic"
      Mapping (2 fields)
        type: Literal "And"
        operand: Sequence (2 items)
          Mapping (3 fields)
            type: Literal "InValueSet"
            code: Mapping (2 fields)
              path: Literal "gender"
              type: Literal "Property"
            valueset: Mapping (2 fields)
              name: Literal "Female Administrative Sex"
              type: Literal "ValueSetRef"
          Mapping (2 fields)
            type: Literal "LessOrEqual"
            operand: Sequence (2 items)
              Mapping (2 fields)
                name: Literal "AgeInYears"
                type: Literal "FunctionRef"
              Mapping (3 fields)
                valueType: Literal "{urn:hl7-org:elm-types:r1}Integer"
                value: Literal "24"
                type: Literal "Literal"
      context: Literal "Patient"
    "#);
}

#[rstest]
#[case(ElmSource::Text("{not json"), ErrorKind::MalformedInput)]
#[case(ElmSource::Text("[]"), ErrorKind::InvalidShape)]
#[case(ElmSource::Text(r#"{"library": {}}"#), ErrorKind::MissingSection)]
#[case(ElmSource::Text(r#"{"library": {"statements": {}}}"#), ErrorKind::MissingField)]
#[case(ElmSource::Text(r#"{"library": {"statements": {"def": []}}}"#), ErrorKind::RuleNotFound)]
fn test_pipeline_failures(#[case] source: ElmSource<'static>, #[case] kind: ErrorKind) {
    let err = load_rule(source, "InDemographic").unwrap_err();
    assert_eq!(err.kind(), kind);
}
