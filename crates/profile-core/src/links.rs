//! Hyperlink shape completion. Nothing here checks that a URL is reachable.

use profile_model::{SENTINEL_LINK, is_sentinel};

/// ORCID profile base URL.
pub const ORCID_BASE_URL: &str = "https://orcid.org/";

/// Prefix `https://` unless the link already has an http(s) scheme.
///
/// Empty input and the sentinel both map to the sentinel.
pub fn ensure_protocol(link: &str) -> String {
    if link.is_empty() || is_sentinel(link) {
        return SENTINEL_LINK.to_string();
    }
    if link.starts_with("http://") || link.starts_with("https://") {
        return link.to_string();
    }
    format!("https://{link}")
}

/// Canonical ORCID profile URL for a bare identifier.
pub fn resolve_orcid_link(id: &str) -> String {
    if id.is_empty() {
        return SENTINEL_LINK.to_string();
    }
    if id.starts_with("http") {
        return id.to_string();
    }
    format!("{ORCID_BASE_URL}{id}")
}
