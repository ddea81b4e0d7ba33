//! # Assessment
//!
//! Classification followed by resolution, bound to the questionnaire
//! version the answers were checked against.

use std::cmp::Reverse;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use tcg_catalogue::{QuestionCatalogue, SectionCatalogue};
use tcg_core::{AssessmentError, BusinessType, PriorityLevel, SectionSlug};

use crate::answers::AssessmentAnswers;
use crate::classifier::{classify_with_trace, Contribution};
use crate::resolver::{resolve, SectionResult};

/// Outcome of one assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResult {
    /// Inferred business types, in canonical order.
    pub business_types: Vec<BusinessType>,
    /// One result per catalogue section, in catalogue order.
    pub sections: Vec<SectionResult>,
    /// Hex SHA-256 fingerprint of the questionnaire used.
    pub questionnaire_fingerprint: String,
}

impl AssessmentResult {
    /// Sections ordered most urgent first. Ties keep catalogue order.
    pub fn by_priority(&self) -> Vec<&SectionResult> {
        let mut ordered: Vec<&SectionResult> = self.sections.iter().collect();
        ordered.sort_by_key(|r| Reverse(r.priority));
        ordered
    }

    /// Number of sections at each priority level. Every level is present.
    pub fn counts(&self) -> BTreeMap<PriorityLevel, usize> {
        let mut counts: BTreeMap<PriorityLevel, usize> =
            PriorityLevel::all().iter().map(|p| (*p, 0)).collect();
        for result in &self.sections {
            *counts.entry(result.priority).or_default() += 1;
        }
        counts
    }

    /// Sections whose priority is not `NOT_APPLICABLE`, in catalogue order.
    pub fn applicable(&self) -> impl Iterator<Item = &SectionResult> {
        self.sections.iter().filter(|r| r.is_applicable())
    }

    pub fn get(&self, slug: SectionSlug) -> Option<&SectionResult> {
        self.sections.iter().find(|r| r.slug == slug)
    }
}

/// Classify `answers` against `questions`, then resolve every section.
///
/// # Errors
///
/// Any classification error. No partial result is produced.
pub fn assess(
    questions: &QuestionCatalogue,
    sections: &SectionCatalogue,
    answers: &AssessmentAnswers,
) -> Result<AssessmentResult, AssessmentError> {
    assess_with_trace(questions, sections, answers).map(|(result, _)| result)
}

/// [`assess`], also returning the per-answer contributions from the same
/// classification pass.
pub fn assess_with_trace(
    questions: &QuestionCatalogue,
    sections: &SectionCatalogue,
    answers: &AssessmentAnswers,
) -> Result<(AssessmentResult, Vec<Contribution>), AssessmentError> {
    let classification = classify_with_trace(questions.questions(), answers)?;
    let business_types = classification.business_types;
    let resolved = resolve(&business_types, sections.sections());

    let result = AssessmentResult {
        business_types,
        sections: resolved,
        questionnaire_fingerprint: questions.fingerprint().to_hex(),
    };

    tracing::info!(
        answers = answers.len(),
        business_types = result.business_types.len(),
        applicable_sections = result.applicable().count(),
        "assessment completed"
    );

    Ok((result, classification.contributions))
}
