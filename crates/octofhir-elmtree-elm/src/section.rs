//! Section extraction
//!
//! Library sections are reached through fixed field paths below `library`.
//! A `def`-style section fails in two distinguishable ways: the section is
//! absent ([`ErrorKind::MissingSection`]), or present without a usable `def`
//! array ([`ErrorKind::MissingField`]). An empty `def` array is a valid,
//! empty section.
//!
//! [`ErrorKind::MissingSection`]: octofhir_elmtree_diagnostics::ErrorKind::MissingSection
//! [`ErrorKind::MissingField`]: octofhir_elmtree_diagnostics::ErrorKind::MissingField

use crate::ElmDocument;
use octofhir_elmtree_diagnostics::{
    ELM0101, ELM0102, ELM0103, ELM0104, ELM0105, ElmError, ElmPath, Result,
};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Field holding the definitions of a section
pub const DEF: &str = "def";
/// Library identifier field
pub const IDENTIFIER: &str = "identifier";
/// Schema identifier field
pub const SCHEMA_IDENTIFIER: &str = "schemaIdentifier";

/// A library section holding a `def` array
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefSection {
    Usings,
    Includes,
    Parameters,
    CodeSystems,
    ValueSets,
    Codes,
    Concepts,
    Contexts,
    Statements,
}

impl DefSection {
    /// All sections, in the order ELM libraries declare them
    pub const ALL: [DefSection; 9] = [
        Self::Usings,
        Self::Includes,
        Self::Parameters,
        Self::CodeSystems,
        Self::ValueSets,
        Self::Codes,
        Self::Concepts,
        Self::Contexts,
        Self::Statements,
    ];

    /// JSON field name below `library`
    pub const fn field_name(&self) -> &'static str {
        match self {
            Self::Usings => "usings",
            Self::Includes => "includes",
            Self::Parameters => "parameters",
            Self::CodeSystems => "codeSystems",
            Self::ValueSets => "valueSets",
            Self::Codes => "codes",
            Self::Concepts => "concepts",
            Self::Contexts => "contexts",
            Self::Statements => "statements",
        }
    }

    /// Entry fields that carry the definition name, in lookup order.
    ///
    /// Using and include definitions are named by `localIdentifier` in ELM.
    pub const fn name_fields(&self) -> &'static [&'static str] {
        match self {
            Self::Usings | Self::Includes => &["name", "localIdentifier"],
            _ => &["name"],
        }
    }

    /// Path of the section in a document
    pub fn path(&self) -> ElmPath {
        ElmPath::library().key(self.field_name())
    }
}

impl fmt::Display for DefSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

impl FromStr for DefSection {
    type Err = String;

    /// Accepts the JSON field name in any case, with or without underscores
    /// (`valueSets`, `value_sets`, `VALUESETS`).
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_lowercase();
        Self::ALL
            .into_iter()
            .find(|section| section.field_name().to_lowercase() == wanted)
            .ok_or_else(|| format!("unknown library section `{}`", s))
    }
}

/// Borrowed view of the `def` array of one section
#[derive(Debug, Clone, Copy)]
pub struct SectionView<'doc> {
    section: DefSection,
    defs: &'doc [Value],
}

impl<'doc> SectionView<'doc> {
    /// Create a view over definition entries
    pub fn new(section: DefSection, defs: &'doc [Value]) -> Self {
        Self { section, defs }
    }

    pub fn section(&self) -> DefSection {
        self.section
    }

    /// The raw definition entries
    pub fn defs(&self) -> &'doc [Value] {
        self.defs
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'doc, Value> {
        self.defs.iter()
    }

    /// Path of the `def` array
    pub fn path(&self) -> ElmPath {
        self.section.path().key(DEF)
    }

    /// Name of the entry at `index`
    pub fn name_at(&self, index: usize) -> Result<&'doc str> {
        let entry = self
            .defs
            .get(index)
            .ok_or_else(|| ElmError::missing_field(ELM0104, "name", self.path().index(index)))?;
        definition_entry(self.section, entry, self.path().index(index)).map(|(name, _)| name)
    }

    /// Names of all entries, in order
    pub fn names(&self) -> Result<Vec<&'doc str>> {
        (0..self.defs.len()).map(|i| self.name_at(i)).collect()
    }
}

impl<'doc> IntoIterator for SectionView<'doc> {
    type Item = &'doc Value;
    type IntoIter = std::slice::Iter<'doc, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.defs.iter()
    }
}

/// Name and fields of one definition entry, located at `path`
pub(crate) fn definition_entry<'doc>(
    section: DefSection,
    entry: &'doc Value,
    path: ElmPath,
) -> Result<(&'doc str, &'doc Map<String, Value>)> {
    let Value::Object(fields) = entry else {
        return Err(ElmError::missing_field(ELM0104, "name", path));
    };
    let Some((field, value)) = section
        .name_fields()
        .iter()
        .find_map(|field| fields.get(*field).map(|value| (*field, value)))
    else {
        return Err(ElmError::missing_field(ELM0104, "name", path));
    };
    let name = value
        .as_str()
        .ok_or_else(|| ElmError::missing_field(ELM0105, field, path.key(field)))?;
    Ok((name, fields))
}

impl ElmDocument {
    /// Raw value of `library.identifier`
    pub fn identifier(&self) -> Result<&Value> {
        self.library_field(IDENTIFIER)
    }

    /// Raw value of `library.schemaIdentifier`
    pub fn schema_identifier(&self) -> Result<&Value> {
        self.library_field(SCHEMA_IDENTIFIER)
    }

    fn library_field(&self, field: &str) -> Result<&Value> {
        self.library()?
            .get(field)
            .ok_or_else(|| ElmError::missing_section(field, ElmPath::library().key(field)))
    }

    /// The `def` array of a section
    pub fn def_section(&self, section: DefSection) -> Result<SectionView<'_>> {
        let path = section.path();
        let container = self
            .library()?
            .get(section.field_name())
            .ok_or_else(|| ElmError::missing_section(section.field_name(), path.clone()))?;
        let Value::Object(container) = container else {
            return Err(ElmError::missing_field(ELM0102, section.field_name(), path));
        };
        let defs = container
            .get(DEF)
            .ok_or_else(|| ElmError::missing_field(ELM0101, DEF, path.clone()))?;
        let Value::Array(defs) = defs else {
            return Err(ElmError::missing_field(ELM0103, DEF, path.key(DEF)));
        };
        log::debug!("extracted section `{}` with {} definitions", section, defs.len());
        Ok(SectionView::new(section, defs))
    }

    pub fn usings(&self) -> Result<SectionView<'_>> {
        self.def_section(DefSection::Usings)
    }

    pub fn includes(&self) -> Result<SectionView<'_>> {
        self.def_section(DefSection::Includes)
    }

    pub fn parameters(&self) -> Result<SectionView<'_>> {
        self.def_section(DefSection::Parameters)
    }

    pub fn code_systems(&self) -> Result<SectionView<'_>> {
        self.def_section(DefSection::CodeSystems)
    }

    pub fn value_sets(&self) -> Result<SectionView<'_>> {
        self.def_section(DefSection::ValueSets)
    }

    pub fn codes(&self) -> Result<SectionView<'_>> {
        self.def_section(DefSection::Codes)
    }

    pub fn concepts(&self) -> Result<SectionView<'_>> {
        self.def_section(DefSection::Concepts)
    }

    pub fn contexts(&self) -> Result<SectionView<'_>> {
        self.def_section(DefSection::Contexts)
    }

    pub fn statements(&self) -> Result<SectionView<'_>> {
        self.def_section(DefSection::Statements)
    }

    /// Sections declared by the library, in declaration order
    pub fn present_sections(&self) -> Result<Vec<DefSection>> {
        let library = self.library()?;
        Ok(DefSection::ALL
            .into_iter()
            .filter(|section| library.contains_key(section.field_name()))
            .collect())
    }
}
