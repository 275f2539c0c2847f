//! Sections command implementation

use super::output::{self, OutputFormat};
use anyhow::Result;
use colored::Colorize;
use octofhir_elmtree_ast::Node;
use octofhir_elmtree_diagnostics::ErrorKind;
use octofhir_elmtree_elm::{DefSection, ElmDocument};
use serde::Serialize;
use std::fmt::Write;
use std::path::PathBuf;

/// Configuration for sections command
pub struct SectionsConfig {
    pub file: PathBuf,
    pub format: OutputFormat,
    pub output_file: Option<PathBuf>,
}

/// State of one definition section in a library
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SectionStatus {
    Present { definitions: usize },
    Absent,
    Malformed { error: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct SectionReport {
    /// Section name as written in ELM JSON
    pub section: &'static str,
    #[serde(flatten)]
    pub status: SectionStatus,
}

/// Overview of a library document
#[derive(Debug, Clone, Serialize)]
pub struct LibraryReport {
    pub identifier: Option<String>,
    pub version: Option<String>,
    pub sections: Vec<SectionReport>,
}

/// Inspect every definition section of a document
pub fn library_report(document: &ElmDocument) -> LibraryReport {
    let identifier = document.build_identifier_node().ok();
    let field = |key: &str| {
        identifier
            .as_ref()
            .and_then(|id| id.get(key))
            .and_then(Node::as_str)
            .map(str::to_string)
    };

    let sections = DefSection::ALL
        .into_iter()
        .map(|section| {
            let status = match document.def_section(section) {
                Ok(view) => SectionStatus::Present {
                    definitions: view.len(),
                },
                Err(e) if e.kind() == ErrorKind::MissingSection => SectionStatus::Absent,
                Err(e) => SectionStatus::Malformed {
                    error: e.to_string(),
                },
            };
            SectionReport {
                section: section.field_name(),
                status,
            }
        })
        .collect();

    LibraryReport {
        identifier: field("id"),
        version: field("version"),
        sections,
    }
}

/// Render a report as aligned text lines
pub fn render_text(report: &LibraryReport) -> String {
    let mut out = String::new();
    let id = report.identifier.as_deref().unwrap_or("<anonymous>");
    match &report.version {
        Some(version) => {
            let _ = writeln!(out, "{} {}", id.bold(), version);
        }
        None => {
            let _ = writeln!(out, "{}", id.bold());
        }
    }
    for entry in &report.sections {
        let status = match &entry.status {
            SectionStatus::Present { definitions: 1 } => "1 definition".to_string(),
            SectionStatus::Present { definitions } => format!("{} definitions", definitions),
            SectionStatus::Absent => "absent".dimmed().to_string(),
            SectionStatus::Malformed { error } => format!("{} {}", "malformed:".red(), error),
        };
        let _ = writeln!(out, "  {:<12} {}", entry.section, status);
    }
    out
}

/// Print the section overview of an ELM file
pub fn sections(config: SectionsConfig) -> Result<()> {
    let document = super::load_document(&config.file)?;
    let report = library_report(&document);
    let content = match config.format {
        OutputFormat::Text => render_text(&report),
        OutputFormat::Json => output::format_json(&report, false)?,
        OutputFormat::JsonPretty => output::format_json(&report, true)?,
    };
    output::write_output(&content, config.output_file.as_deref())
}
