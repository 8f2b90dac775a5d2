//! Link entity representing a short code to target URL mapping.

use chrono::{DateTime, Utc};

/// A persisted link record.
///
/// `original_link` holds the target exactly as the user supplied it, trimmed
/// of surrounding whitespace. Scheme normalization happens at redirect time,
/// never at storage time, so the stored value stays faithful to the input.
#[derive(Debug, Clone)]
pub struct Link {
    pub id: i64,
    pub original_link: String,
    pub short_code: String,
    pub click_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input data for creating a new link record.
///
/// `click_count` and the timestamps are owned by the store.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub original_link: String,
    pub short_code: String,
}
