//! Repository trait for link record access.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Persistence interface for link records.
///
/// This is the only query surface the rest of the service sees: one insert,
/// one exact-match lookup, one counter increment. No listing, deletion, or
/// target update exists.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL
/// - Test mocks generated with `mockall` under `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new record with `click_count = 0`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if `short_code` already exists and
    /// [`AppError::Internal`] on other database errors.
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Exact-match lookup on `short_code`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Atomically increments `click_count` by 1 and advances `updated_at`.
    ///
    /// The increment is a single statement on the store side, so concurrent
    /// visits to the same code never lose counts.
    ///
    /// Returns the updated record, or `None` when the code matches no row.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn increment_clicks(&self, code: &str) -> Result<Option<Link>, AppError>;
}
