//! Dump command implementation

use super::output::{self, OutputFormat};
use anyhow::Result;
use octofhir_elmtree_ast::{DumpOptions, Node, dump as dump_tree};
use octofhir_elmtree_elm::{DefSection, ElmDocument};
use std::path::PathBuf;

/// What part of a library to dump
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DumpTarget {
    /// Every definition of a section
    Section(DefSection),
    /// One statement by name
    Rule(String),
    /// The library identifier
    Identifier,
}

/// Configuration for dump command
pub struct DumpConfig {
    pub file: PathBuf,
    pub target: DumpTarget,
    pub options: DumpOptions,
    pub format: OutputFormat,
    pub output_file: Option<PathBuf>,
}

/// Build the tree selected by `target`
pub fn build_target(document: &ElmDocument, target: &DumpTarget) -> Result<Node> {
    let node = match target {
        DumpTarget::Section(section) => Node::from(document.build_def_section(*section)?),
        DumpTarget::Rule(name) => Node::from(document.build_rule(name)?),
        DumpTarget::Identifier => document.build_identifier_node()?,
    };
    Ok(node)
}

/// Dump a built tree of an ELM file
pub fn dump(config: DumpConfig) -> Result<()> {
    let document = super::load_document(&config.file)?;
    let node = build_target(&document, &config.target)?;
    log::debug!("dumping {} nodes", node.node_count());

    let content = match config.format {
        OutputFormat::Text => dump_tree(&node, &config.options),
        OutputFormat::Json => output::format_json(&node, false)?,
        OutputFormat::JsonPretty => output::format_json(&node, true)?,
    };
    output::write_output(&content, config.output_file.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn document() -> ElmDocument {
        ElmDocument::from_json(
            r#"{"library": {
                "identifier": {"id": "Lib"},
                "valueSets": {"def": [{"name": "VS", "id": "1.2.3"}]},
                "statements": {"def": [{"name": "R", "expression": {"type": "Null"}}]}
            }}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_build_targets() {
        let doc = document();
        let rule = build_target(&doc, &DumpTarget::Rule("R".to_string())).unwrap();
        assert_eq!(rule.name(), Some("R"));

        let section = build_target(&doc, &DumpTarget::Section(DefSection::ValueSets)).unwrap();
        assert_eq!(section.summary(), "Sequence (1 item)");

        let id = build_target(&doc, &DumpTarget::Identifier).unwrap();
        assert_eq!(id.get("id").and_then(Node::as_str), Some("Lib"));
    }

    #[test]
    fn test_rule_dump_text() {
        let node = build_target(&document(), &DumpTarget::Rule("R".to_string())).unwrap();
        assert_eq!(
            dump_tree(&node, &DumpOptions::default()),
            "NamedDefinition \"R\"\n  Mapping (1 field)\n    type: Literal \"Null\"\n"
        );
    }
}
