//! Rules command implementation

use super::output::{self, OutputFormat};
use anyhow::Result;
use octofhir_elmtree_elm::{DefSection, ElmDocument};
use std::path::PathBuf;

/// Configuration for rules command
pub struct RulesConfig {
    pub file: PathBuf,
    /// Section whose definition names are listed
    pub section: DefSection,
    pub format: OutputFormat,
    pub output_file: Option<PathBuf>,
}

/// Definition names of a section, in document order
pub fn definition_names(document: &ElmDocument, section: DefSection) -> Result<Vec<&str>> {
    Ok(document.def_section(section)?.names()?)
}

/// List definition names of an ELM file
pub fn rules(config: RulesConfig) -> Result<()> {
    let document = super::load_document(&config.file)?;
    let names = definition_names(&document, config.section)?;
    log::debug!("{} {} definitions", names.len(), config.section);

    let content = match config.format {
        OutputFormat::Text => names.iter().map(|name| format!("{}\n", name)).collect(),
        OutputFormat::Json => output::format_json(&names, false)?,
        OutputFormat::JsonPretty => output::format_json(&names, true)?,
    };
    output::write_output(&content, config.output_file.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use octofhir_elmtree_diagnostics::{ElmError, ErrorKind};

    #[test]
    fn test_definition_names() {
        let doc = ElmDocument::from_json(
            r#"{"library": {
                "usings": {"def": [{"localIdentifier": "FHIR"}]},
                "statements": {"def": [{"name": "B"}, {"name": "A"}]}
            }}"#,
        )
        .unwrap();
        assert_eq!(definition_names(&doc, DefSection::Statements).unwrap(), vec!["B", "A"]);
        assert_eq!(definition_names(&doc, DefSection::Usings).unwrap(), vec!["FHIR"]);

        let err = definition_names(&doc, DefSection::Parameters).unwrap_err();
        assert_eq!(
            err.downcast_ref::<ElmError>().map(ElmError::kind),
            Some(ErrorKind::MissingSection)
        );
    }
}
