//! # tcg-api: HTTP Service
//!
//! Stateless JSON service over the assessment engine. The catalogues are
//! loaded once at startup and shared read-only; each request calls the
//! engine inline.
//!
//! ## API Surface
//!
//! | Method | Path                   | Module                        |
//! |--------|------------------------|-------------------------------|
//! | GET    | `/health/liveness`     | here                          |
//! | GET    | `/health/readiness`    | here                          |
//! | GET    | `/v1/questionnaire`    | [`routes::questionnaire`]     |
//! | GET    | `/v1/sections`         | [`routes::sections`]          |
//! | GET    | `/v1/sections/{slug}`  | [`routes::sections`]          |
//! | POST   | `/v1/assessments`      | [`routes::assessments`]       |
//!
//! ## Middleware Stack
//!
//! ```text
//! TraceLayer → DefaultBodyLimit (64 KiB) → Handler
//! ```

pub mod error;
pub mod extractors;
pub mod routes;
pub mod state;

use axum::extract::{DefaultBodyLimit, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

pub use error::AppError;
pub use state::{AppConfig, AppState};

/// Maximum accepted request body.
pub const BODY_LIMIT_BYTES: usize = 64 * 1024;

/// Assemble the application router.
pub fn app(state: AppState) -> Router {
    let api = Router::new()
        .merge(routes::questionnaire::router())
        .merge(routes::sections::router())
        .merge(routes::assessments::router())
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES));

    Router::new()
        .route("/health/liveness", get(liveness))
        .route("/health/readiness", get(readiness))
        .merge(api)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Liveness probe: the process is up.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe: both catalogues are loaded and non-empty.
async fn readiness(State(state): State<AppState>) -> impl IntoResponse {
    if state.questions.is_empty() || state.sections.is_empty() {
        return (StatusCode::SERVICE_UNAVAILABLE, "catalogue empty").into_response();
    }
    (StatusCode::OK, "ready").into_response()
}
