use tauri::{AppHandle, Manager};

use crate::{
    append_desktop_log, MAIN_WINDOW_LABEL, TITLEBAR_OVERLAY_COLOR, TITLEBAR_OVERLAY_HEIGHT,
    TITLEBAR_SYMBOL_COLOR_DARK, TITLEBAR_SYMBOL_COLOR_LIGHT,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct OverlayStyle {
    pub(crate) color: &'static str,
    pub(crate) symbol_color: &'static str,
    pub(crate) height: u32,
}

pub(crate) fn overlay_for_theme(is_dark: bool) -> OverlayStyle {
    OverlayStyle {
        color: TITLEBAR_OVERLAY_COLOR,
        symbol_color: if is_dark {
            TITLEBAR_SYMBOL_COLOR_DARK
        } else {
            TITLEBAR_SYMBOL_COLOR_LIGHT
        },
        height: TITLEBAR_OVERLAY_HEIGHT,
    }
}

/// The chrome overlay contract with the content: CSS custom properties on
/// the document root, updated in place without recreating the window.
pub(crate) fn overlay_style_script(style: &OverlayStyle) -> String {
    format!(
        r#"(() => {{
  const root = document.documentElement;
  root.style.setProperty('--titlebar-overlay-color', '{color}');
  root.style.setProperty('--titlebar-symbol-color', '{symbol_color}');
  root.style.setProperty('--titlebar-overlay-height', '{height}px');
}})();"#,
        color = style.color,
        symbol_color = style.symbol_color,
        height = style.height,
    )
}

pub(crate) fn apply_theme_overlay(app_handle: &AppHandle, is_dark: bool) {
    let Some(window) = app_handle.get_webview_window(MAIN_WINDOW_LABEL) else {
        append_desktop_log("apply_theme_overlay skipped: main window not found");
        return;
    };

    let style = overlay_for_theme(is_dark);
    if let Err(error) = window.eval(&overlay_style_script(&style)) {
        append_desktop_log(&format!("failed to apply theme overlay: {error}"));
    }
}

#[cfg(test)]
mod tests {
    use super::{overlay_for_theme, overlay_style_script};

    #[test]
    fn overlay_symbol_color_tracks_the_theme() {
        let dark = overlay_for_theme(true);
        let light = overlay_for_theme(false);

        assert_eq!(dark.symbol_color, "#b0b0b0");
        assert_eq!(light.symbol_color, "#4a4a4a");
        assert_ne!(dark.symbol_color, light.symbol_color);
    }

    #[test]
    fn overlay_background_is_always_fully_transparent() {
        assert_eq!(overlay_for_theme(true).color, "#00000000");
        assert_eq!(overlay_for_theme(false).color, "#00000000");
    }

    #[test]
    fn overlay_script_sets_every_overlay_property() {
        let script = overlay_style_script(&overlay_for_theme(true));
        assert!(script.contains("--titlebar-overlay-color"));
        assert!(script.contains("--titlebar-symbol-color"));
        assert!(script.contains("'#b0b0b0'"));
        assert!(script.contains("'36px'"));
    }
}
