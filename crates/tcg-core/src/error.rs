//! # Error Types: Structured Error Hierarchy
//!
//! All errors use `thiserror` for derive-based `Display` and `Error`.
//!
//! ## Design
//!
//! - `AssessmentError` is request-time: the caller's answers do not fit the
//!   active questionnaire. Always surfaced, never coerced.
//! - `CatalogueError` is configuration-time: the question or section
//!   catalogue is malformed. Raised while loading, before any evaluation.
//! - Both carry the offending identifier and value as structured fields.

use thiserror::Error;

use crate::business_type::BusinessType;
use crate::input::InputKind;
use crate::section::SectionSlug;

/// Top-level error type for the assessment engine.
#[derive(Error, Debug)]
pub enum TcgError {
    /// The question or section catalogue is invalid.
    #[error("catalogue error: {0}")]
    Catalogue(#[from] CatalogueError),

    /// The supplied answers do not fit the questionnaire.
    #[error("assessment error: {0}")]
    Assessment(#[from] AssessmentError),

    /// Canonicalization failed.
    #[error("canonicalization error: {0}")]
    Canonicalization(#[from] CanonicalizationError),

    /// A tag or identifier string could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Structural-validity failure of an answer set.
///
/// Evaluation fails as a whole when either variant is raised; no partial
/// result is produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssessmentError {
    /// An answer names a question the active questionnaire does not define.
    #[error("unknown question {question_id:?}: not defined in the active questionnaire")]
    UnknownQuestion {
        /// The identifier the caller supplied.
        question_id: String,
    },

    /// An answer's shape does not match the question's input kind.
    #[error("malformed answer for question {question_id:?}: expected {expected} answer, got {found}")]
    MalformedAnswer {
        /// The question being answered.
        question_id: String,
        /// The question's declared input kind.
        expected: InputKind,
        /// Shape of the supplied answer.
        found: &'static str,
    },
}

/// Catalogue authoring error, detected at load time.
#[derive(Error, Debug)]
pub enum CatalogueError {
    /// Question identifier fails the identifier rules.
    #[error("invalid question id {value:?}: {reason}")]
    InvalidQuestionId {
        /// The rejected identifier.
        value: String,
        /// Which rule it broke.
        reason: String,
    },

    /// Two questions share an identifier.
    #[error("duplicate question id {question_id:?}")]
    DuplicateQuestion {
        /// The repeated identifier.
        question_id: String,
    },

    /// A choice question declares no options.
    #[error("question {question_id:?} is choice-based but declares no options")]
    NoOptions {
        /// The question.
        question_id: String,
    },

    /// An option value appears twice in one question.
    #[error("question {question_id:?} declares option {value:?} more than once")]
    DuplicateOption {
        /// The question.
        question_id: String,
        /// The repeated value.
        value: String,
    },

    /// An option has no entry in the answer-to-business-type mapping.
    #[error("question {question_id:?}: option {value:?} has no business-type mapping entry")]
    UnmappedOption {
        /// The question.
        question_id: String,
        /// The option value lacking a mapping entry.
        value: String,
    },

    /// A mapping key does not correspond to any option.
    #[error("question {question_id:?}: mapping key {key:?} is not one of the question's options")]
    StrayMappingKey {
        /// The question.
        question_id: String,
        /// The key with no matching option.
        key: String,
    },

    /// A boolean question declares an option other than `true` or `false`.
    #[error("boolean question {question_id:?} declares option {value:?}; only \"true\" and \"false\" are allowed")]
    InvalidBooleanOption {
        /// The question.
        question_id: String,
        /// The offending value.
        value: String,
    },

    /// A boolean question declares explicit options but not both `true`
    /// and `false`.
    #[error("boolean question {question_id:?} must declare both \"true\" and \"false\" options, or none")]
    IncompleteBooleanOptions {
        /// The question.
        question_id: String,
    },

    /// Step indices are not `0..n` in order.
    #[error("wizard step at position {position} declares index {index}")]
    StepOutOfOrder {
        /// Position of the step in the list.
        position: usize,
        /// Index the step declared.
        index: usize,
    },

    /// A step lists a question that is not defined.
    #[error("wizard step {step} lists undefined question {question_id:?}")]
    UnknownStepQuestion {
        /// The step index.
        step: usize,
        /// The undefined identifier.
        question_id: String,
    },

    /// A question is listed by more than one step, or twice by one step.
    #[error("question {question_id:?} is listed by more than one wizard step")]
    QuestionInMultipleSteps {
        /// The question.
        question_id: String,
    },

    /// A question is not listed by any step.
    #[error("question {question_id:?} is not listed by any wizard step")]
    QuestionWithoutStep {
        /// The question.
        question_id: String,
    },

    /// A question's step index disagrees with the step that lists it.
    #[error("question {question_id:?} declares step {declared} but is listed by step {actual}")]
    StepIndexMismatch {
        /// The question.
        question_id: String,
        /// Step index on the question.
        declared: usize,
        /// Step that lists it.
        actual: usize,
    },

    /// Two sections share a slug.
    #[error("duplicate section slug {slug}")]
    DuplicateSection {
        /// The repeated slug.
        slug: SectionSlug,
    },

    /// A section applies to no business type.
    #[error("section {slug} has an empty applicableTo list")]
    EmptyApplicability {
        /// The section.
        slug: SectionSlug,
    },

    /// A section lists the same business type twice.
    #[error("section {slug} lists business type {business_type} more than once")]
    DuplicateApplicability {
        /// The section.
        slug: SectionSlug,
        /// The repeated type.
        business_type: BusinessType,
    },

    /// A section declares `NOT_APPLICABLE` as its baseline.
    #[error("section {slug} declares NOT_APPLICABLE as its baseline priority")]
    InvalidBaseline {
        /// The section.
        slug: SectionSlug,
    },

    /// The catalogue could not be canonicalized for fingerprinting.
    #[error("failed to fingerprint catalogue: {0}")]
    Fingerprint(#[from] CanonicalizationError),

    /// The catalogue file extension is not `.yaml`, `.yml` or `.json`.
    #[error("unsupported catalogue format for '{path}': expected .yaml, .yml or .json")]
    UnsupportedFormat {
        /// Path of the file.
        path: String,
    },

    /// The catalogue file could not be read.
    #[error("failed to read catalogue '{path}': {source}")]
    Read {
        /// Path of the file.
        path: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The catalogue file could not be parsed.
    #[error("failed to parse catalogue '{path}': {reason}")]
    Parse {
        /// Path of the file.
        path: String,
        /// Parser message.
        reason: String,
    },
}

/// Error during canonical serialization.
#[derive(Error, Debug)]
pub enum CanonicalizationError {
    /// Float values are not permitted in canonical representations.
    #[error("float values are not permitted in canonical representations: {0}")]
    FloatRejected(f64),

    /// JSON serialization failed.
    #[error("serialization failed: {0}")]
    SerializationFailed(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_answer_display() {
        let err = AssessmentError::MalformedAnswer {
            question_id: "services".into(),
            expected: InputKind::MultiChoice,
            found: "single value",
        };
        assert_eq!(
            err.to_string(),
            "malformed answer for question \"services\": expected multi-choice answer, got single value"
        );
    }

    #[test]
    fn test_wraps_into_top_level() {
        let err: TcgError = AssessmentError::UnknownQuestion {
            question_id: "bogus_id".into(),
        }
        .into();
        assert!(matches!(err, TcgError::Assessment(_)));
        assert!(err.to_string().contains("bogus_id"));

        let err: TcgError = CatalogueError::EmptyApplicability {
            slug: SectionSlug::DataRetention,
        }
        .into();
        assert!(err.to_string().contains("data-retention"));
    }
}
