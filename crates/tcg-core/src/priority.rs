//! # Priority Level
//!
//! The urgency verdict attached to a compliance section for a given
//! business profile.
//!
//! ```text
//! Ordering (least → most urgent):
//!   NotApplicable < ReviewRecommended < Required < AlwaysRequired
//! ```
//!
//! Each section carries exactly one baseline, so the ordering never resolves
//! contention between sections. It exists so consumers can sort and
//! highlight results by urgency.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TcgError;

/// Resolved priority of a compliance section.
///
/// The derived `Ord` follows declaration order, least urgent first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PriorityLevel {
    /// The section does not apply to any of the business's classifications.
    NotApplicable,
    /// Advisory or cross-cutting material worth reviewing.
    ReviewRecommended,
    /// Obligation conditional on scale or service mix.
    Required,
    /// Mandatory legal obligation for every matching business.
    AlwaysRequired,
}

impl PriorityLevel {
    /// All levels, least urgent first.
    pub fn all() -> &'static [PriorityLevel] {
        &[
            Self::NotApplicable,
            Self::ReviewRecommended,
            Self::Required,
            Self::AlwaysRequired,
        ]
    }

    /// Wire identifier, matching the serde format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotApplicable => "NOT_APPLICABLE",
            Self::ReviewRecommended => "REVIEW_RECOMMENDED",
            Self::Required => "REQUIRED",
            Self::AlwaysRequired => "ALWAYS_REQUIRED",
        }
    }

    /// Display label for rendering.
    pub fn label(&self) -> &'static str {
        match self {
            Self::NotApplicable => "Not applicable",
            Self::ReviewRecommended => "Review recommended",
            Self::Required => "Required",
            Self::AlwaysRequired => "Always required",
        }
    }

    /// Whether the section applies at all.
    pub fn is_applicable(self) -> bool {
        self != Self::NotApplicable
    }

    /// Whether a section may declare this level as its baseline.
    ///
    /// `NotApplicable` is reserved for an empty intersection.
    pub fn is_valid_baseline(self) -> bool {
        self.is_applicable()
    }
}

impl fmt::Display for PriorityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PriorityLevel {
    type Err = TcgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| TcgError::Parse(format!("unknown priority level: {s:?}")))
    }
}
