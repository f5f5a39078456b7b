//! # Proof Verification Endpoint
//!
//! `POST /verify` drives one submission through its full lifecycle:
//! `Received → Encoding → Submitting → (Attested | Failed | TimedOut)`.
//! Encoding failure terminates before anything touches the network; the
//! response is always a terminal state, never `Pending`.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};

use zkrelay_core::{encode, ProofSystem, RawProofBundle, SubmissionResult};

use crate::error::AppError;
use crate::extractors::extract_json;
use crate::state::AppState;

/// Build the verify router.
pub fn router() -> Router<AppState> {
    Router::new().route("/verify", post(verify))
}

/// POST /verify — Submit a proof bundle for attestation.
#[utoipa::path(
    post,
    path = "/verify",
    request_body = RawProofBundle,
    responses(
        (status = 200, description = "Terminal submission result", body = SubmissionResult),
        (status = 400, description = "Malformed JSON body", body = crate::error::ErrorBody),
        (status = 422, description = "Bundle failed structural validation", body = crate::error::ErrorBody),
        (status = 502, description = "Attestation network unreachable", body = crate::error::ErrorBody),
        (status = 504, description = "Attestation deadline expired", body = crate::error::ErrorBody),
    ),
    tag = "verify"
)]
async fn verify(
    State(state): State<AppState>,
    body: Result<Json<RawProofBundle>, JsonRejection>,
) -> Result<Json<SubmissionResult>, AppError> {
    let raw = extract_json(body)?;

    // Encoding: structural validation only, fails before any network call.
    let bundle = encode(&raw)?;

    let result = state
        .coordinator
        .submit(&bundle, ProofSystem::UltraPlonk)
        .await?;
    Ok(Json(result))
}
