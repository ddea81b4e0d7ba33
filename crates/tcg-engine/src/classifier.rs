//! # Business-Type Classifier
//!
//! Folds an answer set into a deduplicated set of business types by looking
//! each selected value up in its question's answer-to-business-type table.
//!
//! ```text
//! for (question, answer) in answers:
//!     values  = selected values of answer        (shape must match input kind)
//!     result ∪= ⋃ table[question][v] for v in values   (missing entry = ∅)
//! ```
//!
//! Set union is commutative, so answer order never affects the result. The
//! output is sorted by canonical `BusinessType` order.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use tcg_catalogue::Question;
use tcg_core::{AssessmentError, BusinessType, InputKind};

use crate::answers::{AnswerValue, AssessmentAnswers};

/// What one selected answer value contributed to the classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contribution {
    /// The answered question.
    pub question_id: String,
    /// The selected value (`"true"`/`"false"` for boolean questions).
    pub value: String,
    /// Business types the value implies, in canonical order.
    pub business_types: Vec<BusinessType>,
    /// Whether the value had an entry in the question's table.
    pub mapped: bool,
}

/// Classification result with per-value provenance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    /// Deduplicated business types, in canonical order.
    pub business_types: Vec<BusinessType>,
    /// One entry per selected value, in question-identifier order.
    pub contributions: Vec<Contribution>,
}

/// Infer the business types implied by `answers`.
///
/// # Errors
///
/// - `UnknownQuestion` if an answer names a question not in `questions`.
/// - `MalformedAnswer` if an answer's shape does not match its question's
///   input kind.
pub fn classify(
    questions: &[Question],
    answers: &AssessmentAnswers,
) -> Result<Vec<BusinessType>, AssessmentError> {
    classify_with_trace(questions, answers).map(|c| c.business_types)
}

/// [`classify`], additionally reporting which answer produced which types.
pub fn classify_with_trace(
    questions: &[Question],
    answers: &AssessmentAnswers,
) -> Result<Classification, AssessmentError> {
    let by_id: HashMap<&str, &Question> = questions.iter().map(|q| (q.id.as_str(), q)).collect();

    let mut business_types = BTreeSet::new();
    let mut contributions = Vec::new();

    for (question_id, answer) in answers.iter() {
        let question = by_id
            .get(question_id)
            .ok_or_else(|| AssessmentError::UnknownQuestion {
                question_id: question_id.to_string(),
            })?;

        for value in selected_values(question, answer)? {
            let (implied, mapped) = match question.business_types_for(value) {
                Some(types) => (types.iter().copied().collect::<BTreeSet<_>>(), true),
                None => {
                    tracing::debug!(
                        question_id,
                        value,
                        "answer value has no business-type mapping; contributing nothing"
                    );
                    (BTreeSet::new(), false)
                }
            };
            business_types.extend(implied.iter().copied());
            contributions.push(Contribution {
                question_id: question_id.to_string(),
                value: value.to_string(),
                business_types: implied.into_iter().collect(),
                mapped,
            });
        }
    }

    Ok(Classification {
        business_types: business_types.into_iter().collect(),
        contributions,
    })
}

/// The option values an answer selects, after checking its shape.
fn selected_values<'a>(
    question: &Question,
    answer: &'a AnswerValue,
) -> Result<Vec<&'a str>, AssessmentError> {
    match (question.input, answer) {
        (InputKind::SingleChoice, AnswerValue::Single(value)) => Ok(vec![value.as_str()]),
        (InputKind::MultiChoice, AnswerValue::Multiple(values)) => {
            Ok(values.iter().map(String::as_str).collect())
        }
        (InputKind::Boolean, AnswerValue::Boolean(flag)) => {
            Ok(vec![if *flag { "true" } else { "false" }])
        }
        (expected, other) => Err(AssessmentError::MalformedAnswer {
            question_id: question.id.to_string(),
            expected,
            found: other.shape(),
        }),
    }
}
