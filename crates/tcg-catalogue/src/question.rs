//! # Questions
//!
//! A `Question` is one questionnaire item together with its
//! answer-to-business-type lookup table. The table is data, not code: the
//! classifier only ever looks values up in it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use tcg_core::{BusinessType, InputKind, QuestionId};

/// Option values of a boolean question.
pub const BOOLEAN_VALUES: [&str; 2] = ["true", "false"];

/// A selectable option of a choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnswerOption {
    /// The value stored in `AssessmentAnswers` when this option is chosen.
    pub value: String,
    /// Text shown to the user.
    pub label: String,
}

/// One questionnaire item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Question {
    /// Stable identifier; the key of this question's answer.
    pub id: QuestionId,
    /// Index of the wizard step that presents this question.
    pub step: usize,
    /// Prompt text.
    pub prompt: String,
    /// Optional help text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
    /// Answer cardinality.
    pub input: InputKind,
    /// Ordered options. Required for choice questions; optional labels for
    /// boolean questions.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<AnswerOption>,
    /// Business types implied by each answer value.
    pub answer_to_business_types: BTreeMap<String, Vec<BusinessType>>,
}

impl Question {
    /// The values this question accepts, in declaration order.
    ///
    /// Boolean questions always accept exactly `"true"` and `"false"`; their
    /// declared options only supply labels.
    pub fn option_values(&self) -> Vec<&str> {
        if self.input == InputKind::Boolean {
            return BOOLEAN_VALUES.to_vec();
        }
        self.options.iter().map(|o| o.value.as_str()).collect()
    }

    /// Business types implied by an answer value.
    ///
    /// Returns `None` when the value has no mapping entry. Callers treat that
    /// as "no classification signal", not as an error.
    pub fn business_types_for(&self, value: &str) -> Option<&[BusinessType]> {
        self.answer_to_business_types
            .get(value)
            .map(Vec::as_slice)
    }

    /// Label of an option value, if the question declares one.
    pub fn label_for(&self, value: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|o| o.value == value)
            .map(|o| o.label.as_str())
    }
}
