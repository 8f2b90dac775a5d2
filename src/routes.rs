//! Top-level router assembly.
//!
//! # Route Structure
//!
//! - `POST /api/url` - link registration (JSON)
//! - `GET  /{code}`  - short link redirect
//! - `GET  /health`  - health check
//!
//! Request/response logging, CORS, a request body cap, and trailing-slash
//! normalization are applied here.

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use tower::Layer;
use tower_http::cors::CorsLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Request bodies larger than this are rejected before deserialization.
const BODY_LIMIT_BYTES: usize = 16 * 1024;

/// Constructs the application router with all routes and middleware.
///
/// `cors` is built by the caller from configuration; with no configured
/// origin it is a no-op layer.
pub fn app_router(state: AppState, cors: CorsLayer) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/{code}", get(redirect_handler))
        .route("/health", get(health_handler))
        .nest("/api", api::routes::api_routes())
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .with_state(state)
        .layer(cors)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
