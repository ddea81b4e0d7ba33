//! # Assessment API
//!
//! - `POST /v1/assessments`: classify the submitted answers and resolve
//!   every section's priority.
//!
//! When the request carries a `fingerprint`, it must match the active
//! questionnaire; answers collected against another version are refused
//! with 409 before evaluation.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use tcg_engine::{assess, assess_with_trace, AssessmentAnswers, AssessmentResult, Contribution};

use crate::error::AppError;
use crate::extractors::extract_json;
use crate::state::AppState;

/// Request body for `POST /v1/assessments`.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AssessmentRequest {
    pub answers: AssessmentAnswers,
    /// Fingerprint of the questionnaire the answers were collected against.
    #[serde(default)]
    pub fingerprint: Option<String>,
    /// Include per-answer contributions in the response.
    #[serde(default)]
    pub explain: bool,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResponse {
    #[serde(flatten)]
    pub result: AssessmentResult,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contributions: Option<Vec<Contribution>>,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/v1/assessments", post(create_assessment))
}

/// POST /v1/assessments
async fn create_assessment(
    State(state): State<AppState>,
    body: Result<Json<AssessmentRequest>, JsonRejection>,
) -> Result<Json<AssessmentResponse>, AppError> {
    let request = extract_json(body)?;

    let active = state.questions.fingerprint();
    if let Some(submitted) = &request.fingerprint {
        if !active.matches_hex(submitted) {
            return Err(AppError::FingerprintMismatch(format!(
                "answers were collected against questionnaire {submitted}, active questionnaire is {}",
                active.to_hex()
            )));
        }
    }

    let (result, contributions) = if request.explain {
        let (result, contributions) =
            assess_with_trace(&state.questions, &state.sections, &request.answers)?;
        (result, Some(contributions))
    } else {
        (assess(&state.questions, &state.sections, &request.answers)?, None)
    };

    Ok(Json(AssessmentResponse {
        result,
        contributions,
    }))
}
