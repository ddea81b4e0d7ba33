//! # Questionnaire API
//!
//! - `GET /v1/questionnaire`: steps with their questions, plus the
//!   questionnaire fingerprint clients echo back when submitting answers.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use tcg_catalogue::Question;

use crate::state::AppState;

/// One wizard step with its questions in display order.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepView {
    pub index: usize,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub questions: Vec<Question>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionnaireResponse {
    /// Hex SHA-256 fingerprint of the question catalogue.
    pub fingerprint: String,
    pub steps: Vec<StepView>,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/v1/questionnaire", get(get_questionnaire))
}

/// GET /v1/questionnaire
async fn get_questionnaire(State(state): State<AppState>) -> Json<QuestionnaireResponse> {
    let catalogue = &state.questions;
    let steps = catalogue
        .steps()
        .iter()
        .map(|step| StepView {
            index: step.index,
            title: step.title.clone(),
            description: step.description.clone(),
            questions: step
                .questions
                .iter()
                .filter_map(|id| catalogue.get(id).cloned())
                .collect(),
        })
        .collect();

    Json(QuestionnaireResponse {
        fingerprint: catalogue.fingerprint().to_hex(),
        steps,
    })
}
