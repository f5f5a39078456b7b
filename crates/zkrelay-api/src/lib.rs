//! # zkrelay-api — Axum HTTP Boundary for the Proof Submission Relay
//!
//! One inbound surface: `POST /verify` accepts a proof bundle, the relay
//! submits it to the attestation network, and the response is the terminal
//! submission result. Cross-origin requests are permitted from any origin,
//! mirroring the gateway this relay replaces.
//!
//! ## API Surface
//!
//! | Route                | Module               | Purpose                      |
//! |----------------------|----------------------|------------------------------|
//! | `POST /verify`       | [`routes::verify`]   | Submit a proof bundle        |
//! | `GET /openapi.json`  | [`openapi`]          | Generated API document       |
//! | `GET /health/*`      | (here)               | Liveness/readiness probes    |
//!
//! ## Middleware Stack (execution order)
//!
//! ```text
//! TraceLayer → CorsLayer → MetricsMiddleware → Handler
//! ```

pub mod error;
pub mod extractors;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

use axum::middleware::from_fn;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::middleware::metrics::ApiMetrics;
use crate::state::AppState;

pub use error::AppError;

/// Assemble the full application router with all routes and middleware.
///
/// Health probes (`/health/*`) are mounted outside the metrics middleware
/// so probe traffic does not pollute request counters. CORS is permissive:
/// the relay fronts browser dApps on arbitrary origins.
pub fn app(state: AppState) -> Router {
    let metrics = ApiMetrics::new();

    let api = Router::new()
        .merge(routes::verify::router())
        .merge(openapi::router())
        .layer(from_fn(middleware::metrics::metrics_middleware))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .layer(axum::Extension(metrics))
        .with_state(state);

    let health = Router::new()
        .route("/health/liveness", axum::routing::get(liveness))
        .route("/health/readiness", axum::routing::get(readiness));

    Router::new().merge(health).merge(api)
}

/// Liveness probe — always returns 200 if the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe — returns 200 when the application is ready to serve.
async fn readiness() -> &'static str {
    "ready"
}
