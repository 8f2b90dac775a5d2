//! Scheme normalization for stored targets at redirect time.

use regex::Regex;
use std::sync::LazyLock;

/// Matches targets that already carry an explicit scheme.
static SCHEME_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^https?://").unwrap());

/// Prepares a stored target URL for the redirect response.
///
/// Trims surrounding whitespace and prepends `https://` when the target has
/// no case-insensitive `http://`/`https://` prefix. The stored value is never
/// rewritten; normalization happens on every read.
pub fn normalize_redirect_url(stored: &str) -> String {
    let target = stored.trim();

    if SCHEME_REGEX.is_match(target) {
        target.to_string()
    } else {
        format!("https://{target}")
    }
}
