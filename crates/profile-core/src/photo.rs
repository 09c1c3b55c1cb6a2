//! Google Drive share links to embeddable thumbnail URLs.

use std::sync::LazyLock;

use regex::Regex;

const DRIVE_HOST: &str = "drive.google.com";

/// `/d/<id>`, which also covers `/file/d/<id>`. Ids shorter than 25 characters
/// are ignored so unrelated path segments never match.
static DRIVE_PATH_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/d/([a-zA-Z0-9_-]{25,})").expect("Invalid drive path regex"));

/// `?id=<id>` or `&id=<id>`.
static DRIVE_QUERY_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[?&]id=([a-zA-Z0-9_-]{25,})").expect("Invalid drive query regex")
});

/// Drive file id from a share link, preferring the path form.
pub fn drive_file_id(url: &str) -> Option<&str> {
    DRIVE_PATH_ID
        .captures(url)
        .or_else(|| DRIVE_QUERY_ID.captures(url))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

pub fn drive_thumbnail_url(id: &str) -> String {
    format!("https://{DRIVE_HOST}/thumbnail?id={id}&sz=w1000")
}

/// Directly embeddable image URL for a photo link.
///
/// Non-Drive URLs pass through. Drive links without a recognizable id also
/// pass through unchanged.
pub fn resolve_photo_url(url: &str) -> String {
    if url.is_empty() {
        return String::new();
    }
    if url.contains(DRIVE_HOST)
        && let Some(id) = drive_file_id(url)
    {
        return drive_thumbnail_url(id);
    }
    url.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ID: &str = "ABCDEFGHIJKLMNOPQRSTUVWXY";

    #[test]
    fn file_share_link_becomes_thumbnail() {
        let url = format!("https://drive.google.com/file/d/{ID}/view");
        assert_eq!(
            resolve_photo_url(&url),
            format!("https://drive.google.com/thumbnail?id={ID}&sz=w1000")
        );
    }

    #[test]
    fn open_link_with_query_id() {
        let url = format!("https://drive.google.com/open?id={ID}");
        assert_eq!(
            resolve_photo_url(&url),
            format!("https://drive.google.com/thumbnail?id={ID}&sz=w1000")
        );
    }

    #[test]
    fn path_form_preferred_over_query() {
        let other = "ZZZZZZZZZZZZZZZZZZZZZZZZZZZZ";
        let url = format!("https://drive.google.com/uc?export=view&id={other}&x=/d/{ID}");
        assert_eq!(drive_file_id(&url), Some(ID));
    }

    #[test]
    fn non_drive_url_passes_through() {
        let url = "https://example.edu/people/ada.jpg";
        assert_eq!(resolve_photo_url(url), url);
    }

    #[test]
    fn short_id_passes_through() {
        let url = "https://drive.google.com/file/d/ABCDEFGHIJ/view";
        assert_eq!(resolve_photo_url(url), url);
    }

    #[test]
    fn id_length_boundary_is_25() {
        let short = &ID[..24];
        let url = format!("https://drive.google.com/file/d/{short}/view");
        assert_eq!(resolve_photo_url(&url), url);

        let url = format!("https://drive.google.com/open?id={ID}");
        assert_eq!(drive_file_id(&url), Some(ID));
        assert_eq!(ID.len(), 25);
    }

    #[test]
    fn empty_stays_empty() {
        assert_eq!(resolve_photo_url(""), "");
    }
}
