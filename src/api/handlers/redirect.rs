//! Handler for short link redirects.

use axum::{
    extract::{Path, State},
    response::Redirect,
};

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::redirect_url::normalize_redirect_url;

/// Redirects a short code to its stored target, counting the visit.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// The counter is incremented before the redirect is issued, so a resolved
/// visit is recorded even when the target itself is unreachable. The stored
/// target is normalized on the way out: surrounding whitespace is trimmed
/// and `https://` is prepended when no scheme is present.
///
/// # Errors
///
/// Returns 400 Bad Request for a blank code, 404 Not Found for an unknown
/// one, and 500 when the store fails (logged, no redirect issued).
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    let link = state.link_service.visit(&code).await?;

    let target = normalize_redirect_url(&link.original_link);

    Ok(Redirect::temporary(&target))
}
