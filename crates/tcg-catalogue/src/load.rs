//! # Catalogue Loading
//!
//! Reads question and section catalogues from YAML or JSON files. The format
//! is chosen by extension: `.yaml`/`.yml` or `.json`. Anything else is an
//! `UnsupportedFormat` error, raised before the file is opened.

use std::path::Path;

use serde::de::DeserializeOwned;

use tcg_core::CatalogueError;

use crate::questionnaire::{QuestionCatalogue, QuestionCatalogueDocument};
use crate::section::{SectionCatalogue, SectionCatalogueDocument};

/// Serialization format of a catalogue document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Yaml,
    Json,
}

impl DocumentFormat {
    /// Detect the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Some(Self::Yaml),
            Some("json") => Some(Self::Json),
            _ => None,
        }
    }
}

/// Parse a catalogue document from text.
///
/// `origin` names the source in error messages.
pub fn parse_document<T: DeserializeOwned>(
    text: &str,
    format: DocumentFormat,
    origin: &str,
) -> Result<T, CatalogueError> {
    let parsed = match format {
        DocumentFormat::Yaml => serde_yaml::from_str(text).map_err(|e| e.to_string()),
        DocumentFormat::Json => serde_json::from_str(text).map_err(|e| e.to_string()),
    };
    parsed.map_err(|reason| CatalogueError::Parse {
        path: origin.to_string(),
        reason,
    })
}

fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T, CatalogueError> {
    let display = path.display().to_string();
    let format = DocumentFormat::from_path(path).ok_or_else(|| CatalogueError::UnsupportedFormat {
        path: display.clone(),
    })?;
    let text = std::fs::read_to_string(path).map_err(|source| CatalogueError::Read {
        path: display.clone(),
        source,
    })?;
    parse_document(&text, format, &display)
}

/// Load and validate a question catalogue file.
pub fn load_questions(path: impl AsRef<Path>) -> Result<QuestionCatalogue, CatalogueError> {
    let path = path.as_ref();
    let document: QuestionCatalogueDocument = read_document(path)?;
    let catalogue = QuestionCatalogue::try_from(document)?;
    tracing::info!(
        path = %path.display(),
        questions = catalogue.len(),
        steps = catalogue.steps().len(),
        fingerprint = %catalogue.fingerprint(),
        "loaded question catalogue"
    );
    Ok(catalogue)
}

/// Load and validate a section catalogue file.
pub fn load_sections(path: impl AsRef<Path>) -> Result<SectionCatalogue, CatalogueError> {
    let path = path.as_ref();
    let document: SectionCatalogueDocument = read_document(path)?;
    let catalogue = SectionCatalogue::try_from(document)?;
    tracing::info!(
        path = %path.display(),
        sections = catalogue.len(),
        "loaded section catalogue"
    );
    Ok(catalogue)
}
