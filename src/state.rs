//! Shared application state injected into handlers.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::LinkService;
use crate::infrastructure::persistence::PgLinkRepository;

/// State shared by every request handler.
///
/// Constructed once in [`crate::server::run`] after the database connection
/// is established. Link handlers reach the store only through
/// `link_service`; the raw pool is kept for the health check's connectivity
/// probe.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Public base address composed into shortened URLs, without a trailing
    /// slash.
    pub base_url: String,
    pub link_service: Arc<LinkService<PgLinkRepository>>,
}
