//! # Compliance Sections
//!
//! One entry of the compliance-section catalogue. The resolver reads only
//! `slug`, `applicable_to` and `baseline`; the remaining fields are carried
//! for consumers that render the guide.

use serde::{Deserialize, Serialize};

use tcg_core::{BusinessType, CatalogueError, PriorityLevel, SectionCategory, SectionSlug};

use crate::validation;

/// A compliance guide section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ComplianceSection {
    /// Unique section identifier.
    pub slug: SectionSlug,
    /// Section title.
    pub title: String,
    /// Topical category.
    pub category: SectionCategory,
    /// Business types the section is declared applicable to. Never empty.
    pub applicable_to: Vec<BusinessType>,
    /// Priority assigned when the section applies.
    pub baseline: PriorityLevel,
    /// Short summary.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub summary: String,
    /// Subsection titles.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subsections: Vec<String>,
    /// Legislative and regulatory citations.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub citations: Vec<String>,
}

impl ComplianceSection {
    /// Whether the section is declared applicable to `business_type`.
    pub fn applies_to(&self, business_type: BusinessType) -> bool {
        self.applicable_to.contains(&business_type)
    }
}

/// Unvalidated wire form of the section catalogue.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SectionCatalogueDocument {
    pub sections: Vec<ComplianceSection>,
}

/// The validated section catalogue, in published order.
#[derive(Debug, Clone, Serialize)]
pub struct SectionCatalogue {
    sections: Vec<ComplianceSection>,
}

impl SectionCatalogue {
    /// Validate and build a section catalogue.
    ///
    /// # Errors
    ///
    /// `EmptyApplicability`, `DuplicateApplicability`, `InvalidBaseline` or
    /// `DuplicateSection` for the first offending section.
    pub fn new(sections: Vec<ComplianceSection>) -> Result<Self, CatalogueError> {
        validation::validate_sections(&sections)?;
        Ok(Self { sections })
    }

    /// All sections in catalogue order.
    pub fn sections(&self) -> &[ComplianceSection] {
        &self.sections
    }

    pub fn get(&self, slug: SectionSlug) -> Option<&ComplianceSection> {
        self.sections.iter().find(|s| s.slug == slug)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl TryFrom<SectionCatalogueDocument> for SectionCatalogue {
    type Error = CatalogueError;

    fn try_from(document: SectionCatalogueDocument) -> Result<Self, Self::Error> {
        Self::new(document.sections)
    }
}
