//! # API Error Types
//!
//! Structured error type implementing `axum::response::IntoResponse`.
//! Maps encoder and coordinator errors to HTTP status codes and a JSON body
//! carrying `errorDetail`. Internal error details are never exposed to
//! clients.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use zkrelay_core::ValidationError;
use zkrelay_relay::RelayError;

/// Structured JSON error response body.
///
/// Every non-200 response uses this shape: a machine-readable code plus the
/// human-readable `errorDetail` the caller acts on.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    /// Machine-readable error code (e.g., "VALIDATION_ERROR").
    pub code: String,
    /// Human-readable detail.
    pub error_detail: String,
}

/// Application-level error type that implements [`IntoResponse`] for Axum.
#[derive(Error, Debug)]
pub enum AppError {
    /// Request body could not be parsed (400).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Bundle failed structural validation (422).
    #[error("validation error: {0}")]
    Validation(String),

    /// The attestation network is unreachable or misbehaving (502).
    #[error("upstream network error: {0}")]
    Upstream(String),

    /// The network did not attest within the deadline (504).
    #[error("attestation timed out: {0}")]
    AttestationTimeout(String),

    /// Internal server error (500). Message is logged but not returned.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// HTTP status and machine-readable code for this error.
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            Self::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            Self::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION_ERROR"),
            Self::Upstream(_) => (StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR"),
            Self::AttestationTimeout(_) => (StatusCode::GATEWAY_TIMEOUT, "ATTESTATION_TIMEOUT"),
            Self::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        // Never expose internal error messages to clients.
        let error_detail = match &self {
            Self::Internal(_) => "An internal error occurred".to_string(),
            other => other.to_string(),
        };

        if matches!(&self, Self::Internal(_)) {
            tracing::error!(error = %self, "internal server error");
        }

        let body = ErrorBody {
            code: code.to_string(),
            error_detail,
        };

        (status, Json(body)).into_response()
    }
}

/// Encoder failures are client errors: the bundle was structurally bad.
impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}

/// Coordinator failures map onto the 5xx surface; an unsupported proof
/// system is the caller's mistake and stays 4xx.
impl From<RelayError> for AppError {
    fn from(err: RelayError) -> Self {
        match &err {
            RelayError::UnsupportedSystem(_) => Self::Validation(err.to_string()),
            RelayError::Network(_) => Self::Upstream(err.to_string()),
            RelayError::AttestationTimeout(_) => Self::AttestationTimeout(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn validation_status_code() {
        let err = AppError::Validation("empty vkey".to_string());
        let (status, code) = err.status_and_code();
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(code, "VALIDATION_ERROR");
    }

    #[test]
    fn bad_request_status_code() {
        let err = AppError::BadRequest("malformed JSON".to_string());
        let (status, code) = err.status_and_code();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(code, "BAD_REQUEST");
    }

    #[test]
    fn upstream_status_code() {
        let err = AppError::Upstream("connection refused".to_string());
        let (status, code) = err.status_and_code();
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(code, "UPSTREAM_ERROR");
    }

    #[test]
    fn timeout_status_code() {
        let err = AppError::AttestationTimeout("60s elapsed".to_string());
        let (status, code) = err.status_and_code();
        assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
        assert_eq!(code, "ATTESTATION_TIMEOUT");
    }

    #[test]
    fn validation_error_converts() {
        let core_err = ValidationError::EmptyField("vkey");
        let app_err = AppError::from(core_err);
        match &app_err {
            AppError::Validation(msg) => assert!(msg.contains("vkey"), "got: {msg}"),
            other => panic!("expected Validation, got: {other:?}"),
        }
    }

    #[test]
    fn relay_timeout_converts_to_gateway_timeout() {
        let app_err = AppError::from(RelayError::AttestationTimeout(Duration::from_secs(60)));
        let (status, _) = app_err.status_and_code();
        assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
    }

    #[test]
    fn unsupported_system_converts_to_validation() {
        let app_err = AppError::from(RelayError::UnsupportedSystem(
            zkrelay_core::ProofSystem::UltraPlonk,
        ));
        let (status, _) = app_err.status_and_code();
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn error_body_serializes_error_detail_key() {
        let body = ErrorBody {
            code: "VALIDATION_ERROR".to_string(),
            error_detail: "field `vkey` is required".to_string(),
        };
        let json = serde_json::to_string(&body).unwrap();
        assert!(json.contains("errorDetail"));
        assert!(json.contains("vkey"));
    }

    // ── into_response tests ──────────────────────────────────────

    use http_body_util::BodyExt;

    /// Extract status and body from a Response.
    async fn response_parts(err: AppError) -> (StatusCode, ErrorBody) {
        let response = err.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: ErrorBody = serde_json::from_slice(&bytes).unwrap();
        (status, body)
    }

    #[tokio::test]
    async fn into_response_validation() {
        let (status, body) = response_parts(AppError::Validation("empty proof".into())).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body.code, "VALIDATION_ERROR");
        assert!(body.error_detail.contains("empty proof"));
    }

    #[tokio::test]
    async fn into_response_internal_hides_details() {
        let (status, body) =
            response_parts(AppError::Internal("session pool exhausted".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.code, "INTERNAL_ERROR");
        assert!(
            !body.error_detail.contains("session pool"),
            "internal error details must not leak: {}",
            body.error_detail
        );
        assert_eq!(body.error_detail, "An internal error occurred");
    }
}
