//! # Questionnaire: Wizard Steps and the Question Catalogue
//!
//! `QuestionCatalogue` is the validated, immutable question catalogue. The
//! only way to build one is through `QuestionCatalogue::new()` (or
//! `TryFrom<QuestionCatalogueDocument>`), which runs every load-time check in
//! [`crate::validation`] and computes the catalogue fingerprint.
//!
//! ## Fingerprint
//!
//! The fingerprint is the SHA-256 digest of the JCS-canonical serialization
//! of the steps and questions. Any change to an id, an option or a mapping
//! changes it, so answers stored against one questionnaire version can be
//! detected when replayed against another.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use tcg_core::{sha256_digest, CanonicalBytes, CatalogueError, ContentDigest, QuestionId};

use crate::question::Question;
use crate::validation;

/// A named, ordered grouping of questions presented as one wizard page.
///
/// Presentation only; has no effect on evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct WizardStep {
    /// Zero-based position of the step.
    pub index: usize,
    /// Step title.
    pub title: String,
    /// Optional lead-in text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Questions on this page, in display order.
    pub questions: Vec<QuestionId>,
}

/// Unvalidated wire form of the question catalogue.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct QuestionCatalogueDocument {
    pub steps: Vec<WizardStep>,
    pub questions: Vec<Question>,
}

/// The validated question catalogue.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionCatalogue {
    steps: Vec<WizardStep>,
    questions: Vec<Question>,
    #[serde(skip)]
    index: HashMap<QuestionId, usize>,
    #[serde(skip)]
    fingerprint: ContentDigest,
}

impl QuestionCatalogue {
    /// Validate and build a question catalogue.
    ///
    /// # Errors
    ///
    /// The first [`CatalogueError`] found by the load-time checks.
    pub fn new(steps: Vec<WizardStep>, questions: Vec<Question>) -> Result<Self, CatalogueError> {
        validation::validate_questions(&questions)?;
        validation::validate_steps(&steps, &questions)?;

        let document = QuestionCatalogueDocument { steps, questions };
        let fingerprint = sha256_digest(&CanonicalBytes::new(&document)?);
        let QuestionCatalogueDocument { steps, questions } = document;

        let index = questions
            .iter()
            .enumerate()
            .map(|(i, q)| (q.id.clone(), i))
            .collect();

        Ok(Self {
            steps,
            questions,
            index,
            fingerprint,
        })
    }

    /// All questions in catalogue order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// All wizard steps in order.
    pub fn steps(&self) -> &[WizardStep] {
        &self.steps
    }

    /// Look up a question by identifier.
    pub fn get(&self, id: &QuestionId) -> Option<&Question> {
        self.index.get(id).map(|&i| &self.questions[i])
    }

    /// Look up a question by raw identifier string.
    pub fn get_str(&self, id: &str) -> Option<&Question> {
        self.index.get(id).map(|&i| &self.questions[i])
    }

    /// Questions of one step, in the step's display order.
    ///
    /// Empty when the step does not exist.
    pub fn questions_for_step(&self, index: usize) -> Vec<&Question> {
        self.steps
            .get(index)
            .map(|step| step.questions.iter().filter_map(|id| self.get(id)).collect())
            .unwrap_or_default()
    }

    /// Content digest identifying this questionnaire version.
    pub fn fingerprint(&self) -> ContentDigest {
        self.fingerprint
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

impl TryFrom<QuestionCatalogueDocument> for QuestionCatalogue {
    type Error = CatalogueError;

    fn try_from(document: QuestionCatalogueDocument) -> Result<Self, Self::Error> {
        Self::new(document.steps, document.questions)
    }
}
