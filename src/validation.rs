//! Input checks for the WordPress connection form.

use url::Url;

/// True only for absolute `http`/`https` URLs. Never panics.
pub fn is_http_url(text: &str) -> bool {
    match Url::parse(text) {
        Ok(url) => matches!(url.scheme(), "http" | "https"),
        Err(_) => false,
    }
}
