//! CLI functionality for the `elmtree` tool
//!
//! Each subcommand takes a plain config struct built from its arguments:
//! - Section overview
//! - Rule listing
//! - Tree dumping
//! - Tree walking
//! - Output formatting

pub mod dump;
pub mod output;
pub mod rules;
pub mod sections;
pub mod walk;

use anyhow::Result;
use octofhir_elmtree_elm::{ElmDocument, ElmSource};
use std::path::Path;

/// Load the ELM document a command operates on
pub fn load_document(file: &Path) -> Result<ElmDocument> {
    Ok(ElmDocument::load(ElmSource::Path(file))?)
}
