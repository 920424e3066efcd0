use tauri::{webview::Webview, Manager};

use crate::{
    append_desktop_log, request_rewriter, BackendState, ThemeState, THEME_CHANGED_EVENT,
};

pub(crate) fn bridge_platform() -> &'static str {
    std::env::consts::OS
}

/// Builds the script that defines `window.desktopBridge`, the only sanctioned
/// surface between host and content: a platform string, the current theme
/// value, and a one-way theme subscription. The guard keeps re-injection on
/// page reloads idempotent.
pub(crate) fn bridge_init_script(platform: &str, is_dark: bool) -> String {
    let platform_literal =
        serde_json::to_string(platform).unwrap_or_else(|_| "\"unknown\"".to_string());

    format!(
        r#"(() => {{
  if (window.desktopBridge) {{
    return;
  }}
  const tauri = window.__TAURI__;
  if (!tauri || !tauri.event) {{
    return;
  }}
  const listen = tauri.event.listen;
  let isDark = {is_dark};
  const handlers = [];
  listen('{theme_event}', (event) => {{
    isDark = !!event.payload;
    for (const handler of handlers) {{
      handler(isDark);
    }}
  }});
  Object.defineProperty(window, 'desktopBridge', {{
    value: Object.freeze({{
      platform: {platform_literal},
      get isDarkTheme() {{
        return isDark;
      }},
      onThemeChange(handler) {{
        if (typeof handler === 'function') {{
          handlers.push(handler);
        }}
      }},
    }}),
    writable: false,
    configurable: false,
  }});
}})();"#,
        theme_event = THEME_CHANGED_EVENT,
    )
}

/// Re-installs the rewriter and the bridge into a loading page. Both scripts
/// are also registered as initialization scripts at window creation; this
/// covers reloads, and the guards make the second run a no-op.
pub(crate) fn inject_bridge(webview: &Webview) {
    let app_handle = webview.app_handle();
    let backend = app_handle.state::<BackendState>();
    let theme = app_handle.state::<ThemeState>();

    let rewriter = request_rewriter::rewriter_init_script(&backend.backend_url);
    let bridge = bridge_init_script(bridge_platform(), theme.is_dark());

    if let Err(error) = webview.eval(rewriter.as_str()) {
        append_desktop_log(&format!("failed to install request rewriter: {error}"));
    }
    if let Err(error) = webview.eval(bridge.as_str()) {
        append_desktop_log(&format!("failed to install desktop bridge: {error}"));
    }
}
