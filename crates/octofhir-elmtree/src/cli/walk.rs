//! Walk command implementation

use super::output::{self, OutputFormat};
use anyhow::Result;
use colored::Colorize;
use octofhir_elmtree_ast::{ExpressionKind, Node, type_name, walk_with_depth};
use serde::Serialize;
use std::path::PathBuf;

/// Configuration for walk command
pub struct WalkConfig {
    pub file: PathBuf,
    pub rule: String,
    /// Indent each line by the node depth
    pub depth: bool,
    pub format: OutputFormat,
    pub output_file: Option<PathBuf>,
}

/// One visited node, as reported by the walk command
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WalkStep {
    pub depth: usize,
    pub kind: &'static str,
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,
}

impl WalkStep {
    fn new(depth: usize, node: &Node) -> Self {
        Self {
            depth,
            kind: node.kind().as_str(),
            summary: node.summary(),
            expression: type_name(node)
                .map(|name| format!("{} ({})", name, ExpressionKind::from_type_name(name))),
        }
    }
}

/// Steps of a pre-order walk from `root`
pub fn walk_steps(root: &Node) -> Vec<WalkStep> {
    walk_with_depth(root)
        .map(|(depth, node)| WalkStep::new(depth, node))
        .collect()
}

/// Render steps one per line
pub fn render_text(steps: &[WalkStep], indent: bool) -> String {
    steps
        .iter()
        .map(|step| {
            let pad = if indent { step.depth * 2 } else { 0 };
            match &step.expression {
                Some(expression) => format!(
                    "{:pad$}{} {}\n",
                    "",
                    step.summary,
                    expression.cyan()
                ),
                None => format!("{:pad$}{}\n", "", step.summary),
            }
        })
        .collect()
}

/// Walk a rule of an ELM file and print every node in visit order
pub fn walk(config: WalkConfig) -> Result<()> {
    let document = super::load_document(&config.file)?;
    let root = Node::from(document.build_rule(&config.rule)?);
    let steps = walk_steps(&root);
    log::debug!("walked {} nodes of `{}`", steps.len(), config.rule);

    let content = match config.format {
        OutputFormat::Text => render_text(&steps, config.depth),
        OutputFormat::Json => output::format_json(&steps, false)?,
        OutputFormat::JsonPretty => output::format_json(&steps, true)?,
    };
    output::write_output(&content, config.output_file.as_deref())
}
