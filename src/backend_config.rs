use url::Url;

/// Normalizes a backend base URL for use as a rewrite prefix: parses it,
/// drops any trailing slash, and falls back to the default on invalid input.
pub(crate) fn normalize_backend_url(raw: &str, default: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return default.trim_end_matches('/').to_string();
    }

    match Url::parse(trimmed) {
        Ok(parsed) => parsed.to_string().trim_end_matches('/').to_string(),
        Err(_) => default.trim_end_matches('/').to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::normalize_backend_url;
    use crate::DEFAULT_BACKEND_URL;

    #[test]
    fn normalize_backend_url_keeps_valid_urls_without_trailing_slash() {
        assert_eq!(
            normalize_backend_url("http://localhost:8080", DEFAULT_BACKEND_URL),
            "http://localhost:8080"
        );
        assert_eq!(
            normalize_backend_url("http://example:9090/", DEFAULT_BACKEND_URL),
            "http://example:9090"
        );
    }

    #[test]
    fn normalize_backend_url_falls_back_on_empty_or_invalid_input() {
        assert_eq!(
            normalize_backend_url("", DEFAULT_BACKEND_URL),
            "http://localhost:8080"
        );
        assert_eq!(
            normalize_backend_url("not a url", DEFAULT_BACKEND_URL),
            "http://localhost:8080"
        );
    }
}
