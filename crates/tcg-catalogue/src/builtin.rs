//! # Built-in Catalogue
//!
//! The default questionnaire and section catalogue shipped with the
//! repository under `catalogue/`. Embedded at compile time; parsed and
//! validated on every call, so a broken edit surfaces as a
//! `CatalogueError` at startup rather than a panic.

use tcg_core::CatalogueError;

use crate::load::{parse_document, DocumentFormat};
use crate::questionnaire::{QuestionCatalogue, QuestionCatalogueDocument};
use crate::section::{SectionCatalogue, SectionCatalogueDocument};

const QUESTIONS_YAML: &str = include_str!("../../../catalogue/questions.yaml");
const SECTIONS_YAML: &str = include_str!("../../../catalogue/sections.yaml");

/// The built-in question catalogue.
pub fn questions() -> Result<QuestionCatalogue, CatalogueError> {
    let document: QuestionCatalogueDocument =
        parse_document(QUESTIONS_YAML, DocumentFormat::Yaml, "builtin:questions.yaml")?;
    QuestionCatalogue::try_from(document)
}

/// The built-in section catalogue.
pub fn sections() -> Result<SectionCatalogue, CatalogueError> {
    let document: SectionCatalogueDocument =
        parse_document(SECTIONS_YAML, DocumentFormat::Yaml, "builtin:sections.yaml")?;
    SectionCatalogue::try_from(document)
}
