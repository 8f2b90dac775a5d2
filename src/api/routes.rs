//! API route configuration.

use crate::api::handlers::register_handler;
use crate::state::AppState;
use axum::{Router, routing::post};

/// Routes served under `/api`.
///
/// # Endpoints
///
/// - `POST /url` - register a target URL and get a short link back
pub fn api_routes() -> Router<AppState> {
    Router::new().route("/url", post(register_handler))
}
