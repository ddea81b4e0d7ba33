//! # Catalogue Validation
//!
//! Load-time checks for both catalogues. Every function returns the first
//! violation found; a catalogue that fails any check is never constructed,
//! so the engine only ever sees well-formed tables.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use tcg_core::{CatalogueError, InputKind, QuestionId, SectionSlug};

use crate::question::{Question, BOOLEAN_VALUES};
use crate::questionnaire::WizardStep;
use crate::section::ComplianceSection;

/// Validate a single question's options and mapping.
///
/// - choice questions declare at least one option;
/// - boolean questions declare no options, or exactly `true` and `false`;
/// - option values are unique;
/// - every accepted value has a mapping entry;
/// - every mapping key is an accepted value.
pub fn validate_question(question: &Question) -> Result<(), CatalogueError> {
    let id = question.id.as_str();

    if question.input.is_choice() && question.options.is_empty() {
        return Err(CatalogueError::NoOptions {
            question_id: id.to_string(),
        });
    }

    let mut seen = HashSet::new();
    for option in &question.options {
        if question.input == InputKind::Boolean && !BOOLEAN_VALUES.contains(&option.value.as_str())
        {
            return Err(CatalogueError::InvalidBooleanOption {
                question_id: id.to_string(),
                value: option.value.clone(),
            });
        }
        if !seen.insert(option.value.as_str()) {
            return Err(CatalogueError::DuplicateOption {
                question_id: id.to_string(),
                value: option.value.clone(),
            });
        }
    }
    if question.input == InputKind::Boolean
        && !question.options.is_empty()
        && seen.len() != BOOLEAN_VALUES.len()
    {
        return Err(CatalogueError::IncompleteBooleanOptions {
            question_id: id.to_string(),
        });
    }

    let accepted = question.option_values();
    if let Some(value) = accepted
        .iter()
        .find(|v| !question.answer_to_business_types.contains_key(**v))
    {
        return Err(CatalogueError::UnmappedOption {
            question_id: id.to_string(),
            value: (*value).to_string(),
        });
    }
    if let Some(key) = question
        .answer_to_business_types
        .keys()
        .find(|k| !accepted.contains(&k.as_str()))
    {
        return Err(CatalogueError::StrayMappingKey {
            question_id: id.to_string(),
            key: key.clone(),
        });
    }

    Ok(())
}

/// Validate the question list: identifiers unique, each question well-formed.
pub fn validate_questions(questions: &[Question]) -> Result<(), CatalogueError> {
    let mut seen = HashSet::new();
    for question in questions {
        if !seen.insert(&question.id) {
            return Err(CatalogueError::DuplicateQuestion {
                question_id: question.id.to_string(),
            });
        }
        validate_question(question)?;
    }
    Ok(())
}

/// Validate the wizard steps against the question list.
///
/// Step indices run `0..n` in order; each step lists only defined
/// questions; each question is listed exactly once, by the step its own
/// `step` field names.
pub fn validate_steps(steps: &[WizardStep], questions: &[Question]) -> Result<(), CatalogueError> {
    for (position, step) in steps.iter().enumerate() {
        if step.index != position {
            return Err(CatalogueError::StepOutOfOrder {
                position,
                index: step.index,
            });
        }
    }

    let declared: BTreeMap<&QuestionId, usize> =
        questions.iter().map(|q| (&q.id, q.step)).collect();
    let mut listed: BTreeSet<&QuestionId> = BTreeSet::new();

    for step in steps {
        for id in &step.questions {
            let Some(&declared_step) = declared.get(id) else {
                return Err(CatalogueError::UnknownStepQuestion {
                    step: step.index,
                    question_id: id.to_string(),
                });
            };
            if !listed.insert(id) {
                return Err(CatalogueError::QuestionInMultipleSteps {
                    question_id: id.to_string(),
                });
            }
            if declared_step != step.index {
                return Err(CatalogueError::StepIndexMismatch {
                    question_id: id.to_string(),
                    declared: declared_step,
                    actual: step.index,
                });
            }
        }
    }

    if let Some(question) = questions.iter().find(|q| !listed.contains(&q.id)) {
        return Err(CatalogueError::QuestionWithoutStep {
            question_id: question.id.to_string(),
        });
    }

    Ok(())
}

/// Validate a single section: non-empty, duplicate-free applicability and
/// an applicable baseline.
pub fn validate_section(section: &ComplianceSection) -> Result<(), CatalogueError> {
    if section.applicable_to.is_empty() {
        return Err(CatalogueError::EmptyApplicability { slug: section.slug });
    }
    let mut seen = HashSet::new();
    for bt in &section.applicable_to {
        if !seen.insert(*bt) {
            return Err(CatalogueError::DuplicateApplicability {
                slug: section.slug,
                business_type: *bt,
            });
        }
    }
    if !section.baseline.is_valid_baseline() {
        return Err(CatalogueError::InvalidBaseline { slug: section.slug });
    }
    Ok(())
}

/// Validate the section list: slugs unique, each section well-formed.
pub fn validate_sections(sections: &[ComplianceSection]) -> Result<(), CatalogueError> {
    let mut seen: HashSet<SectionSlug> = HashSet::new();
    for section in sections {
        if !seen.insert(section.slug) {
            return Err(CatalogueError::DuplicateSection { slug: section.slug });
        }
        validate_section(section)?;
    }
    Ok(())
}
