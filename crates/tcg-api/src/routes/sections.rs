//! # Section Catalogue API
//!
//! - `GET /v1/sections`: every compliance section, in catalogue order.
//! - `GET /v1/sections/{slug}`: one section; 404 for an unknown slug.

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};

use tcg_catalogue::ComplianceSection;
use tcg_core::SectionSlug;

use crate::error::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/sections", get(list_sections))
        .route("/v1/sections/{slug}", get(get_section))
}

/// GET /v1/sections
async fn list_sections(State(state): State<AppState>) -> Json<Vec<ComplianceSection>> {
    Json(state.sections.sections().to_vec())
}

/// GET /v1/sections/{slug}
async fn get_section(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<ComplianceSection>, AppError> {
    let parsed: SectionSlug = slug
        .parse()
        .map_err(|_| AppError::NotFound(format!("section {slug:?}")))?;
    state
        .sections
        .get(parsed)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("section {slug:?}")))
}
