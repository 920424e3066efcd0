use tauri::{AppHandle, Manager, WebviewUrl, WebviewWindowBuilder};

use crate::{
    append_desktop_log, desktop_bridge, request_rewriter, BackendState, ThemeState,
    DASHBOARD_PAGE, MAIN_WINDOW_HEIGHT, MAIN_WINDOW_LABEL, MAIN_WINDOW_MIN_HEIGHT,
    MAIN_WINDOW_MIN_WIDTH, MAIN_WINDOW_TITLE, MAIN_WINDOW_WIDTH,
};

/// Creates the primary window loading the static dashboard page. The
/// rewriter and bridge scripts are registered before any content code runs.
/// A second primary window is never created; failure aborts this attempt
/// only and the shell keeps running.
pub(crate) fn create_main_window(app_handle: &AppHandle) -> Result<(), String> {
    if app_handle.get_webview_window(MAIN_WINDOW_LABEL).is_some() {
        append_desktop_log("create_main_window skipped: main window already exists");
        return Ok(());
    }

    let backend = app_handle.state::<BackendState>();
    let theme = app_handle.state::<ThemeState>();
    let rewriter_script = request_rewriter::rewriter_init_script(&backend.backend_url);
    let bridge_script =
        desktop_bridge::bridge_init_script(desktop_bridge::bridge_platform(), theme.is_dark());

    let builder = WebviewWindowBuilder::new(
        app_handle,
        MAIN_WINDOW_LABEL,
        WebviewUrl::App(DASHBOARD_PAGE.into()),
    )
    .title(MAIN_WINDOW_TITLE)
    .inner_size(MAIN_WINDOW_WIDTH, MAIN_WINDOW_HEIGHT)
    .min_inner_size(MAIN_WINDOW_MIN_WIDTH, MAIN_WINDOW_MIN_HEIGHT)
    .initialization_script(rewriter_script.as_str())
    .initialization_script(bridge_script.as_str());

    let builder = match app_handle.default_window_icon() {
        Some(icon) => builder
            .icon(icon.clone())
            .map_err(|error| format!("Failed to set window icon: {error}"))?,
        None => builder,
    };

    #[cfg(target_os = "macos")]
    let builder = builder
        .title_bar_style(tauri::TitleBarStyle::Overlay)
        .hidden_title(true);

    builder
        .build()
        .map_err(|error| format!("Failed to create main window: {error}"))?;
    append_desktop_log("main window created");
    Ok(())
}

/// Dock/taskbar reactivation with zero open windows brings the dashboard
/// back; with any window still alive this does nothing.
pub(crate) fn handle_reactivate(app_handle: &AppHandle) {
    if !app_handle.webview_windows().is_empty() {
        return;
    }

    append_desktop_log("reactivated with no windows; recreating main window");
    if let Err(error) = create_main_window(app_handle) {
        append_desktop_log(&format!("failed to recreate main window: {error}"));
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use crate::runtime_paths;

    #[test]
    fn window_icon_is_bundled_and_is_a_png() {
        let icon_path = runtime_paths::workspace_root_dir()
            .join("icons")
            .join("icon.png");
        let bytes = fs::read(&icon_path).expect("bundled window icon");
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }
}
