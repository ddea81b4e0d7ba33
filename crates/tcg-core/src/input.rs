//! # Input Kind
//!
//! Cardinality of a questionnaire item's answer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How many values a question accepts and of what shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InputKind {
    /// Exactly one option value.
    SingleChoice,
    /// A set of option values.
    MultiChoice,
    /// `true` or `false`.
    Boolean,
}

impl InputKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SingleChoice => "single-choice",
            Self::MultiChoice => "multi-choice",
            Self::Boolean => "boolean",
        }
    }

    /// Whether the question declares an explicit option list.
    pub fn is_choice(self) -> bool {
        matches!(self, Self::SingleChoice | Self::MultiChoice)
    }
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
