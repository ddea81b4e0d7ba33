//! # Section Priority Resolver
//!
//! Assigns every catalogue section a priority for a given set of business
//! types:
//!
//! ```text
//! priority(section) = section.baseline    if applicable_to ∩ types ≠ ∅
//!                     NOT_APPLICABLE      otherwise
//! ```
//!
//! Output has one entry per section, in catalogue order. The resolver is
//! total: it has no error path and the empty type set resolves every
//! section to `NOT_APPLICABLE`.

use serde::{Deserialize, Serialize};

use tcg_catalogue::ComplianceSection;
use tcg_core::{BusinessType, PriorityLevel, SectionSlug};

/// Priority of one section for one assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionResult {
    pub slug: SectionSlug,
    pub priority: PriorityLevel,
    /// Business types that made the section applicable, in the section's
    /// declared order. Empty exactly when `priority` is `NOT_APPLICABLE`.
    #[serde(default)]
    pub matched: Vec<BusinessType>,
}

impl SectionResult {
    pub fn is_applicable(&self) -> bool {
        self.priority.is_applicable()
    }
}

/// Resolve the priority of every section in `sections`.
pub fn resolve(business_types: &[BusinessType], sections: &[ComplianceSection]) -> Vec<SectionResult> {
    sections
        .iter()
        .map(|section| resolve_section(business_types, section))
        .collect()
}

/// Resolve a single section.
pub fn resolve_section(business_types: &[BusinessType], section: &ComplianceSection) -> SectionResult {
    let matched: Vec<BusinessType> = section
        .applicable_to
        .iter()
        .copied()
        .filter(|bt| business_types.contains(bt))
        .collect();

    let priority = if matched.is_empty() {
        PriorityLevel::NotApplicable
    } else {
        section.baseline
    };

    SectionResult {
        slug: section.slug,
        priority,
        matched,
    }
}
