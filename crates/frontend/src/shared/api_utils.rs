//! API utilities for frontend-backend communication
//!
//! The base URL is fixed at build time through `ATELIER_API_URL`; when the
//! variable is absent every request goes to the same-origin `/api` prefix.

const DEFAULT_API_BASE: &str = "/api";

/// Get the base URL for API requests, without a trailing slash.
///
/// # Example
/// ```rust
/// # use frontend::shared::api_utils::api_url;
/// let url = api_url("/articles/42");
/// ```
pub fn api_base() -> String {
    normalize_base(option_env!("ATELIER_API_URL").unwrap_or(DEFAULT_API_BASE))
}

/// Build a full API URL from a path relative to the API root
/// (e.g. `/articles`, `options/seasons`).
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

/// Percent-encode a single path segment (ids, option categories).
pub fn encode_segment(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}

fn normalize_base(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE.to_string()
    } else {
        trimmed.to_string()
    }
}

fn join_url(base: &str, path: &str) -> String {
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        base.to_string()
    } else {
        format!("{}/{}", base, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base() {
        assert_eq!(normalize_base("https://erp.example.com/api/"), "https://erp.example.com/api");
        assert_eq!(normalize_base("  "), "/api");
        assert_eq!(normalize_base("/api"), "/api");
    }

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("/api", "/articles"), "/api/articles");
        assert_eq!(join_url("/api", "options/seasons"), "/api/options/seasons");
        assert_eq!(join_url("/api", ""), "/api");
    }

    #[test]
    fn test_encode_segment() {
        assert_eq!(encode_segment("Summer 24"), "Summer%2024");
        assert_eq!(encode_segment("a/b"), "a%2Fb");
    }
}
