use tauri::{AppHandle, Emitter, Manager, Theme, Window};

use crate::{
    append_desktop_log, theme_overlay, ThemeState, MAIN_WINDOW_LABEL, THEME_CHANGED_EVENT,
};

/// Sole publisher for theme changes: recomputes the window overlay and
/// pushes the new value through the bridge's subscription event. Values that
/// match the last observation are dropped so subscribers fire exactly once
/// per flip.
pub(crate) fn handle_theme_changed(app_handle: &AppHandle, is_dark: bool) {
    let theme_state = app_handle.state::<ThemeState>();
    if !theme_state.record(is_dark) {
        return;
    }

    append_desktop_log(&format!("host theme changed: dark={is_dark}"));
    theme_overlay::apply_theme_overlay(app_handle, is_dark);
    publish_theme(app_handle, is_dark);
}

/// Reads the live window theme once the page is up: the overlay is always
/// re-applied to the fresh document, but subscribers only hear actual flips.
pub(crate) fn sync_window_theme(app_handle: &AppHandle, window: &Window) {
    let is_dark = match window.theme() {
        Ok(theme) => theme == Theme::Dark,
        Err(error) => {
            append_desktop_log(&format!("failed to read window theme: {error}"));
            return;
        }
    };

    let changed = app_handle.state::<ThemeState>().record(is_dark);
    theme_overlay::apply_theme_overlay(app_handle, is_dark);
    if changed {
        append_desktop_log(&format!("host theme observed at load: dark={is_dark}"));
        publish_theme(app_handle, is_dark);
    }
}

fn publish_theme(app_handle: &AppHandle, is_dark: bool) {
    if let Err(error) = app_handle.emit_to(MAIN_WINDOW_LABEL, THEME_CHANGED_EVENT, is_dark) {
        append_desktop_log(&format!("failed to publish theme change: {error}"));
    }
}
