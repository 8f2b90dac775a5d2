//! Handler for the link registration endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use serde_json::json;

use crate::api::dto::register::{RegisterData, RegisterRequest, RegisterResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for the submitted target URL.
///
/// # Endpoint
///
/// `POST /api/url`
///
/// # Request Body
///
/// ```json
/// { "link": "example.com/some/page" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "status": 201,
///   "data": {
///     "shortned_url": "http://localhost:3000/V1StGX",
///     "click_count": 0
///   },
///   "message": "URL shortened successfully"
/// }
/// ```
///
/// Registering the same target twice creates two independent records with
/// distinct codes.
///
/// # Errors
///
/// Returns 400 Bad Request when the body is not JSON or `link` is missing or
/// blank, and 500 when the store fails.
pub async fn register_handler(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<RegisterResponse>), AppError> {
    let Json(payload) = payload.map_err(|e| {
        AppError::bad_request("Invalid JSON body", json!({ "reason": e.body_text() }))
    })?;

    let link = state.link_service.register(payload.link).await?;

    let shortned_url = state
        .link_service
        .short_url(&state.base_url, &link.short_code);

    let response = RegisterResponse {
        status: StatusCode::CREATED.as_u16(),
        data: RegisterData {
            shortned_url,
            click_count: link.click_count,
        },
        message: "URL shortened successfully".to_string(),
    };

    Ok((StatusCode::CREATED, Json(response)))
}
