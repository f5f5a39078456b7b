//! # HTTP Middleware
//!
//! Request metrics. Tracing is applied via `tower_http::trace::TraceLayer`
//! in the router assembly; CORS via `tower_http::cors::CorsLayer`.

pub mod metrics;
