//! # Request Extractors
//!
//! Handlers take `Result<Json<T>, JsonRejection>` and pass it through
//! [`extract_json`] so body errors use the same error envelope as every
//! other failure.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::Json;

use crate::error::AppError;

/// Extract a JSON body, mapping rejections onto [`AppError`].
///
/// Oversized bodies become `PayloadTooLarge`; every other rejection
/// (bad JSON, wrong content type, wrong field types) becomes `BadRequest`.
pub fn extract_json<T>(result: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    result.map(|Json(v)| v).map_err(|err| {
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge(err.body_text())
        } else {
            AppError::BadRequest(err.body_text())
        }
    })
}
