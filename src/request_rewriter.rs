use crate::API_PATH_PREFIX;

/// Rewrites a relative `/api/...` target to an absolute address on the
/// backend endpoint. Anything else is left alone. The base is expected
/// without a trailing slash (see `backend_config::normalize_backend_url`).
pub(crate) fn rewrite_api_target(base_url: &str, target: &str) -> Option<String> {
    if !target.starts_with(API_PATH_PREFIX) {
        return None;
    }
    Some(format!("{}{}", base_url.trim_end_matches('/'), target))
}

/// Builds the fetch interceptor installed before any content code runs.
/// Only the target address changes; method, headers, and body pass through
/// untouched (Request rewrites reuse the original Request object).
pub(crate) fn rewriter_init_script(base_url: &str) -> String {
    let base_literal = serde_json::to_string(base_url.trim_end_matches('/'))
        .unwrap_or_else(|_| format!("\"{}\"", crate::DEFAULT_BACKEND_URL));

    format!(
        r#"(() => {{
  if (window.__pcMonitorRewriterInstalled) {{
    return;
  }}
  window.__pcMonitorRewriterInstalled = true;
  const base = {base_literal};
  const prefix = '{prefix}';
  const originalFetch = window.fetch.bind(window);
  window.fetch = (input, init) => {{
    if (typeof input === 'string' && input.startsWith(prefix)) {{
      return originalFetch(base + input, init);
    }}
    if (input instanceof Request) {{
      const url = new URL(input.url, window.location.href);
      if (url.origin === window.location.origin && url.pathname.startsWith(prefix)) {{
        return originalFetch(new Request(base + url.pathname + url.search, input), init);
      }}
    }}
    return originalFetch(input, init);
  }};
}})();"#,
        prefix = API_PATH_PREFIX,
    )
}

#[cfg(test)]
mod tests {
    use super::{rewrite_api_target, rewriter_init_script};
    use crate::DEFAULT_BACKEND_URL;

    #[test]
    fn api_requests_are_rewritten_to_the_default_endpoint() {
        assert_eq!(
            rewrite_api_target(DEFAULT_BACKEND_URL, "/api/status"),
            Some("http://localhost:8080/api/status".to_string())
        );
    }

    #[test]
    fn non_api_requests_are_never_rewritten() {
        assert_eq!(rewrite_api_target(DEFAULT_BACKEND_URL, "/other/path"), None);
        assert_eq!(rewrite_api_target(DEFAULT_BACKEND_URL, "/api"), None);
        assert_eq!(
            rewrite_api_target(DEFAULT_BACKEND_URL, "https://example.com/api/x"),
            None
        );
    }

    #[test]
    fn override_base_url_is_honored() {
        assert_eq!(
            rewrite_api_target("http://example:9090", "/api/x"),
            Some("http://example:9090/api/x".to_string())
        );
        assert_eq!(
            rewrite_api_target("http://example:9090/", "/api/x"),
            Some("http://example:9090/api/x".to_string())
        );
    }

    #[test]
    fn rewriter_script_embeds_base_and_prefix() {
        let script = rewriter_init_script("http://example:9090/");
        assert!(script.contains("const base = \"http://example:9090\";"));
        assert!(script.contains("const prefix = '/api/';"));
        assert!(script.contains("window.fetch ="));
    }
}
