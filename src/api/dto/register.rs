//! DTOs for the link registration endpoint.

use serde::{Deserialize, Serialize};

/// Request to shorten a target URL.
///
/// `link` is optional at the type level so an absent field reaches the
/// validation path instead of being rejected by the deserializer.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub link: Option<String>,
}

/// Envelope returned on successful registration.
///
/// The HTTP status is mirrored in the body alongside a human-readable
/// message, matching the error envelope shape.
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub status: u16,
    pub data: RegisterData,
    pub message: String,
}

/// Payload of a successful registration.
#[derive(Debug, Serialize)]
pub struct RegisterData {
    /// Historical field spelling, kept for client compatibility.
    pub shortned_url: String,
    pub click_count: i64,
}
