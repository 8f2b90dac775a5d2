//! Link registration and visit resolution service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;

/// Code generation attempts before registration gives up.
const MAX_ATTEMPTS: usize = 5;

/// Service for registering links and resolving visits.
///
/// The repository handle is injected at construction; the service owns no
/// connection state of its own.
pub struct LinkService<L: LinkRepository> {
    repository: Arc<L>,
}

impl<L: LinkRepository> LinkService<L> {
    /// Creates a new link service.
    pub fn new(repository: Arc<L>) -> Self {
        Self { repository }
    }

    /// Registers a target URL and returns the newly created record.
    ///
    /// The target only has to be present and non-blank; no URL syntax
    /// validation is applied, and the trimmed value is stored as given.
    /// A generated code that collides with an existing record is replaced
    /// with a fresh one, up to [`MAX_ATTEMPTS`] times.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when `link` is missing or blank, and
    /// [`AppError::Internal`] when every attempt collided or the store
    /// failed.
    pub async fn register(&self, link: Option<String>) -> Result<Link, AppError> {
        let original_link = link
            .as_deref()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .ok_or_else(|| {
                AppError::bad_request("Please enter a valid url", json!({ "field": "link" }))
            })?
            .to_string();

        for attempt in 0..MAX_ATTEMPTS {
            let new_link = NewLink {
                original_link: original_link.clone(),
                short_code: generate_code(),
            };

            match self.repository.create(new_link).await {
                Ok(link) => return Ok(link),
                Err(AppError::Conflict { .. }) => {
                    tracing::warn!(attempt, "short code collision, retrying");
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::internal(
            "Failed to generate a unique short code",
            json!({ "attempts": MAX_ATTEMPTS }),
        ))
    }

    /// Resolves a short code for a redirect, counting the visit.
    ///
    /// The counter increment happens after the lookup succeeds and strictly
    /// before the caller issues the redirect, so a resolved visit is counted
    /// even when the target itself turns out to be unreachable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when `code` is blank (no store
    /// access), [`AppError::NotFound`] when no record matches (no mutation),
    /// and [`AppError::Internal`] on store errors.
    pub async fn visit(&self, code: &str) -> Result<Link, AppError> {
        let code = code.trim();
        if code.is_empty() {
            return Err(AppError::bad_request(
                "Missing short code",
                json!({ "field": "code" }),
            ));
        }

        let link = self.repository.find_by_code(code).await?.ok_or_else(|| {
            AppError::not_found("No URL found for this code", json!({ "code": code }))
        })?;

        self.repository
            .increment_clicks(&link.short_code)
            .await?
            .ok_or_else(|| {
                AppError::not_found("No URL found for this code", json!({ "code": code }))
            })
    }

    /// Composes the public short URL for a code.
    pub fn short_url(&self, base_url: &str, code: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockLinkRepository;
    use crate::utils::code_generator::CODE_LENGTH;
    use chrono::Utc;
    use mockall::Sequence;

    fn test_link(id: i64, code: &str, url: &str, clicks: i64) -> Link {
        let now = Utc::now();
        Link {
            id,
            original_link: url.to_string(),
            short_code: code.to_string(),
            click_count: clicks,
            created_at: now,
            updated_at: now,
        }
    }

    fn conflict() -> AppError {
        AppError::conflict("Unique constraint violation", json!({}))
    }

    #[tokio::test]
    async fn register_creates_record_with_generated_code() {
        let mut repo = MockLinkRepository::new();
        repo.expect_create()
            .withf(|new_link| {
                new_link.original_link == "example.com/page"
                    && new_link.short_code.len() == CODE_LENGTH
            })
            .times(1)
            .returning(|new_link| {
                Ok(test_link(
                    1,
                    &new_link.short_code,
                    &new_link.original_link,
                    0,
                ))
            });

        let service = LinkService::new(Arc::new(repo));

        let link = service
            .register(Some("example.com/page".to_string()))
            .await
            .unwrap();

        assert_eq!(link.original_link, "example.com/page");
        assert_eq!(link.click_count, 0);
    }

    #[tokio::test]
    async fn register_trims_surrounding_whitespace() {
        let mut repo = MockLinkRepository::new();
        repo.expect_create()
            .withf(|new_link| new_link.original_link == "example.com")
            .times(1)
            .returning(|new_link| {
                Ok(test_link(
                    1,
                    &new_link.short_code,
                    &new_link.original_link,
                    0,
                ))
            });

        let service = LinkService::new(Arc::new(repo));

        let result = service.register(Some("  example.com  ".to_string())).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn register_rejects_missing_link() {
        let mut repo = MockLinkRepository::new();
        repo.expect_create().times(0);

        let service = LinkService::new(Arc::new(repo));

        let err = service.register(None).await.unwrap_err();

        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn register_rejects_blank_link() {
        let mut repo = MockLinkRepository::new();
        repo.expect_create().times(0);

        let service = LinkService::new(Arc::new(repo));

        let err = service.register(Some("   ".to_string())).await.unwrap_err();

        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn register_retries_on_code_collision() {
        let mut repo = MockLinkRepository::new();
        let mut seq = Sequence::new();

        repo.expect_create()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Err(conflict()));
        repo.expect_create()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|new_link| {
                Ok(test_link(
                    2,
                    &new_link.short_code,
                    &new_link.original_link,
                    0,
                ))
            });

        let service = LinkService::new(Arc::new(repo));

        let result = service
            .register(Some("https://example.com".to_string()))
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn register_gives_up_after_max_attempts() {
        let mut repo = MockLinkRepository::new();
        repo.expect_create()
            .times(MAX_ATTEMPTS)
            .returning(|_| Err(conflict()));

        let service = LinkService::new(Arc::new(repo));

        let err = service
            .register(Some("https://example.com".to_string()))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Internal { .. }));
    }

    #[tokio::test]
    async fn register_does_not_retry_other_store_errors() {
        let mut repo = MockLinkRepository::new();
        repo.expect_create()
            .times(1)
            .returning(|_| Err(AppError::internal("Database error", json!({}))));

        let service = LinkService::new(Arc::new(repo));

        let err = service
            .register(Some("https://example.com".to_string()))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Internal { .. }));
    }

    #[tokio::test]
    async fn visit_increments_and_returns_link() {
        let mut repo = MockLinkRepository::new();
        repo.expect_find_by_code()
            .withf(|code| code == "abc123")
            .times(1)
            .returning(|code| Ok(Some(test_link(1, code, "example.com", 0))));
        repo.expect_increment_clicks()
            .withf(|code| code == "abc123")
            .times(1)
            .returning(|code| Ok(Some(test_link(1, code, "example.com", 1))));

        let service = LinkService::new(Arc::new(repo));

        let link = service.visit("abc123").await.unwrap();

        assert_eq!(link.click_count, 1);
    }

    #[tokio::test]
    async fn visit_unknown_code_is_not_found_without_mutation() {
        let mut repo = MockLinkRepository::new();
        repo.expect_find_by_code().times(1).returning(|_| Ok(None));
        repo.expect_increment_clicks().times(0);

        let service = LinkService::new(Arc::new(repo));

        let err = service.visit("doesnotexist").await.unwrap_err();

        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn visit_blank_code_skips_the_store() {
        let mut repo = MockLinkRepository::new();
        repo.expect_find_by_code().times(0);
        repo.expect_increment_clicks().times(0);

        let service = LinkService::new(Arc::new(repo));

        let err = service.visit("   ").await.unwrap_err();

        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[test]
    fn short_url_joins_base_and_code() {
        let service = LinkService::new(Arc::new(MockLinkRepository::new()));

        assert_eq!(
            service.short_url("http://localhost:3000/", "abc123"),
            "http://localhost:3000/abc123"
        );
        assert_eq!(
            service.short_url("https://s.example.com", "abc123"),
            "https://s.example.com/abc123"
        );
    }
}
