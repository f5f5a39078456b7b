//! # JSON Body Extraction
//!
//! Maps axum's JSON deserialization rejections onto [`AppError::BadRequest`]
//! so a malformed body surfaces as a structured 400 with `errorDetail`
//! instead of axum's plain-text reply.

use axum::extract::rejection::JsonRejection;
use axum::Json;

use crate::error::AppError;

/// Extract a JSON body, mapping deserialization errors to [`AppError::BadRequest`].
pub fn extract_json<T>(result: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    result
        .map(|Json(v)| v)
        .map_err(|err| AppError::BadRequest(err.body_text()))
}
