#![allow(dead_code)]

use sqlx::PgPool;
use std::sync::Arc;

use minilink::application::services::LinkService;
use minilink::infrastructure::persistence::PgLinkRepository;
use minilink::state::AppState;

pub const BASE_URL: &str = "http://s.test.com";

pub fn create_test_state(pool: PgPool) -> AppState {
    let link_repository = Arc::new(PgLinkRepository::new(Arc::new(pool.clone())));
    let link_service = Arc::new(LinkService::new(link_repository));

    AppState {
        db: pool,
        base_url: BASE_URL.to_string(),
        link_service,
    }
}

pub async fn create_test_link(pool: &PgPool, code: &str, url: &str) {
    sqlx::query("INSERT INTO links (original_link, short_code) VALUES ($1, $2)")
        .bind(url)
        .bind(code)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn click_count(pool: &PgPool, code: &str) -> i64 {
    sqlx::query_scalar("SELECT click_count FROM links WHERE short_code = $1")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_links(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM links")
        .fetch_one(pool)
        .await
        .unwrap()
}
