//! URL manipulation utilities.
//!
//! Scraped hrefs arrive in every shape the register's markup produces:
//! absolute, root-relative, relative, `javascript:` handlers. Everything
//! downstream works with validated absolute URLs produced here.

use url::Url;

/// Check if a URL is valid
#[must_use]
pub fn is_valid_url(url: &str) -> bool {
    if url.is_empty() {
        return false;
    }

    // Skip data URLs, javascript URLs, and other non-http schemes
    if url.starts_with("data:") || url.starts_with("javascript:") || url.starts_with("mailto:") {
        return false;
    }

    match Url::parse(url) {
        Ok(parsed) => {
            matches!(parsed.scheme(), "http" | "https")
        }
        Err(_) => false,
    }
}

/// Resolve an href against a base URL, returning an absolute `http(s)` URL.
///
/// Handles absolute hrefs, root-relative paths and page-relative paths the
/// same way a browser would. Returns `None` when the base is unparseable,
/// the href is empty, or the resolved result is not an `http(s)` URL;
/// callers treat that as "no link", never as an error.
#[must_use]
pub fn resolve_href(base: &str, href: &str) -> Option<String> {
    let href = href.trim();
    if href.is_empty() {
        return None;
    }

    let base_url = Url::parse(base).ok()?;
    let resolved = base_url.join(href).ok()?;

    if !matches!(resolved.scheme(), "http" | "https") {
        return None;
    }

    Some(resolved.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_relative_against_base() {
        assert_eq!(
            resolve_href("https://bills.parliament.nz/bills-proposed-laws", "/v/123/some-bill"),
            Some("https://bills.parliament.nz/v/123/some-bill".to_string())
        );
    }

    #[test]
    fn keeps_absolute_hrefs() {
        assert_eq!(
            resolve_href("https://bills.parliament.nz/", "https://legislation.govt.nz/bill/x"),
            Some("https://legislation.govt.nz/bill/x".to_string())
        );
    }

    #[test]
    fn rejects_non_http_results() {
        assert_eq!(resolve_href("https://example.com/", "javascript:void(0)"), None);
        assert_eq!(resolve_href("https://example.com/", ""), None);
        assert_eq!(resolve_href("not a url", "/x"), None);
    }

    #[test]
    fn validates_schemes() {
        assert!(is_valid_url("https://bills.parliament.nz"));
        assert!(!is_valid_url("mailto:clerk@parliament.govt.nz"));
        assert!(!is_valid_url(""));
    }
}
