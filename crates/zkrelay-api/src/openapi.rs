//! # OpenAPI Specification Assembly
//!
//! Assembles the utoipa-documented routes into a single OpenAPI spec,
//! served at `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

/// Assembled OpenAPI spec for the relay surface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "zkrelay — Proof Submission Relay",
        version = "0.1.0",
        description = "Accepts zero-knowledge proof bundles, submits them to the attestation network, and returns the terminal attestation outcome.",
        license(name = "AGPL-3.0-or-later")
    ),
    paths(crate::routes::verify::verify),
    components(schemas(
        zkrelay_core::RawProofBundle,
        zkrelay_core::SubmissionResult,
        zkrelay_core::SubmissionStatus,
        zkrelay_core::TxReference,
        zkrelay_core::ProofSystem,
        crate::error::ErrorBody,
    )),
    tags(
        (name = "verify", description = "Proof submission and attestation"),
    )
)]
pub struct ApiDoc;

/// Build the OpenAPI router.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}

/// GET /openapi.json — Return the generated OpenAPI specification.
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_documents_verify_path() {
        let spec = ApiDoc::openapi();
        assert!(spec.paths.paths.contains_key("/verify"));
    }
}
