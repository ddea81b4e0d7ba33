//! # Assessment Answers
//!
//! The user's answers, keyed by question identifier. Built by the external
//! wizard and handed to the engine whole; the engine never mutates it.
//!
//! Unanswered questions are absent from the map. Absence is distinct from
//! every answer value, including `false`, `"no"` and an empty set.
//!
//! ## Wire Form
//!
//! A JSON/YAML object whose values are a string (single choice), an array
//! of strings (multi choice) or a boolean. Keys are kept as plain strings so
//! that a key naming no question reaches the classifier and is reported as
//! `UnknownQuestion` rather than failing deserialization.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use tcg_catalogue::QuestionCatalogue;
use tcg_core::QuestionId;

/// One answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    /// Answer to a boolean question.
    Boolean(bool),
    /// Answer to a single-choice question.
    Single(String),
    /// Answer to a multi-choice question. Duplicates collapse.
    Multiple(BTreeSet<String>),
}

impl AnswerValue {
    pub fn single(value: impl Into<String>) -> Self {
        Self::Single(value.into())
    }

    pub fn multiple<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Multiple(values.into_iter().map(Into::into).collect())
    }

    pub fn boolean(value: bool) -> Self {
        Self::Boolean(value)
    }

    /// Description of the answer's shape, used in `MalformedAnswer` errors.
    pub fn shape(&self) -> &'static str {
        match self {
            Self::Boolean(_) => "boolean",
            Self::Single(_) => "single value",
            Self::Multiple(_) => "set of values",
        }
    }
}

/// Answers keyed by question identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssessmentAnswers(BTreeMap<String, AnswerValue>);

impl AssessmentAnswers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer, returning any previous answer to the same question.
    pub fn insert(&mut self, question_id: impl Into<String>, value: AnswerValue) -> Option<AnswerValue> {
        self.0.insert(question_id.into(), value)
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, question_id: impl Into<String>, value: AnswerValue) -> Self {
        self.insert(question_id, value);
        self
    }

    pub fn get(&self, question_id: &str) -> Option<&AnswerValue> {
        self.0.get(question_id)
    }

    pub fn contains(&self, question_id: &str) -> bool {
        self.0.contains_key(question_id)
    }

    /// Answers in question-identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AnswerValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Questions of `catalogue` with no answer, in catalogue order.
    pub fn unanswered<'a>(&self, catalogue: &'a QuestionCatalogue) -> Vec<&'a QuestionId> {
        catalogue
            .questions()
            .iter()
            .map(|q| &q.id)
            .filter(|id| !self.contains(id.as_str()))
            .collect()
    }
}

impl<K: Into<String>> FromIterator<(K, AnswerValue)> for AssessmentAnswers {
    fn from_iter<T: IntoIterator<Item = (K, AnswerValue)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_all_shapes() {
        let json = r#"{"owns_network": false, "resells": "no", "services": ["voip", "voip", "content"]}"#;
        let answers: AssessmentAnswers = serde_json::from_str(json).unwrap();
        assert_eq!(answers.len(), 3);
        assert_eq!(answers.get("owns_network"), Some(&AnswerValue::Boolean(false)));
        assert_eq!(answers.get("resells"), Some(&AnswerValue::single("no")));
        assert_eq!(
            answers.get("services"),
            Some(&AnswerValue::multiple(["content", "voip"]))
        );
    }

    #[test]
    fn test_deserialize_rejects_other_shapes() {
        for json in [
            r#"{"q": 3}"#,
            r#"{"q": null}"#,
            r#"{"q": {"nested": "x"}}"#,
            r#"{"q": [1, 2]}"#,
        ] {
            assert!(
                serde_json::from_str::<AssessmentAnswers>(json).is_err(),
                "{json} should be rejected"
            );
        }
    }

    #[test]
    fn test_falsy_answer_is_not_absence() {
        let answers = AssessmentAnswers::new()
            .with("owns_network", AnswerValue::boolean(false))
            .with("services", AnswerValue::multiple(Vec::<String>::new()));
        assert!(answers.contains("owns_network"));
        assert!(answers.contains("services"));
        assert!(!answers.contains("resells"));
    }

    #[test]
    fn test_serialize_roundtrip_shape() {
        let answers: AssessmentAnswers = [
            ("b", AnswerValue::boolean(true)),
            ("a", AnswerValue::single("yes")),
        ]
        .into_iter()
        .collect();
        let json = serde_json::to_string(&answers).unwrap();
        assert_eq!(json, r#"{"a":"yes","b":true}"#);
    }

    #[test]
    fn test_shape_names() {
        assert_eq!(AnswerValue::boolean(true).shape(), "boolean");
        assert_eq!(AnswerValue::single("x").shape(), "single value");
        assert_eq!(AnswerValue::multiple(["x"]).shape(), "set of values");
    }
}
