//! # Identifier Newtypes
//!
//! `QuestionId` is the stable key that ties a stored answer to a question.
//! Renaming one is a breaking change to every stored `AssessmentAnswers`.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

use crate::error::CatalogueError;

/// Maximum length of a question identifier.
const MAX_QUESTION_ID_LEN: usize = 64;

/// Stable identifier of a questionnaire item.
///
/// Non-empty, at most 64 characters, lowercase ASCII letters, digits,
/// `_` and `-` only. Validated on construction and on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct QuestionId(String);

impl QuestionId {
    /// Create a validated question identifier.
    pub fn new(value: impl Into<String>) -> Result<Self, CatalogueError> {
        let value = value.into();
        let reason = if value.is_empty() {
            Some("must not be empty")
        } else if value.len() > MAX_QUESTION_ID_LEN {
            Some("must be at most 64 characters")
        } else if !value
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_' || b == b'-')
        {
            Some("must contain only lowercase ASCII letters, digits, '_' or '-'")
        } else {
            None
        };
        match reason {
            Some(reason) => Err(CatalogueError::InvalidQuestionId {
                value,
                reason: reason.to_string(),
            }),
            None => Ok(Self(value)),
        }
    }

    /// Borrow the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for QuestionId {
    type Error = CatalogueError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for QuestionId {
    type Error = CatalogueError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<QuestionId> for String {
    fn from(id: QuestionId) -> Self {
        id.0
    }
}

impl Borrow<str> for QuestionId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for QuestionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_ids() {
        for id in ["voip", "resells", "owns_network", "service-mix-2", "a"] {
            assert!(QuestionId::new(id).is_ok(), "{id} should be valid");
        }
    }

    #[test]
    fn test_invalid_ids() {
        for id in ["", "Voip", "has space", "q.1", "ünicode"] {
            assert!(QuestionId::new(id).is_err(), "{id:?} should be rejected");
        }
        assert!(QuestionId::new("x".repeat(65)).is_err());
        assert!(QuestionId::new("x".repeat(64)).is_ok());
    }

    #[test]
    fn test_serde_validates() {
        let id: QuestionId = serde_json::from_str("\"voip\"").unwrap();
        assert_eq!(id.as_str(), "voip");
        assert!(serde_json::from_str::<QuestionId>("\"NOT VALID\"").is_err());
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"voip\"");
    }
}
