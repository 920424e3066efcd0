use tauri::{webview::PageLoadEvent, Manager, RunEvent, Theme, WindowEvent};

use crate::{
    append_desktop_log, append_startup_log, backend_launch, desktop_bridge, exit_events,
    main_window, theme_monitor, BackendState, ThemeState, DESKTOP_LOG_FILE, MAIN_WINDOW_LABEL,
};

pub(crate) fn run() {
    append_startup_log("desktop process starting");
    append_startup_log(&format!(
        "desktop log path: {}",
        crate::logging::resolve_desktop_log_path(
            crate::runtime_paths::default_packaged_root_dir(),
            DESKTOP_LOG_FILE,
        )
        .display()
    ));

    tauri::Builder::default()
        .manage(BackendState::default())
        .manage(ThemeState::default())
        .on_window_event(|window, event| {
            if window.label() != MAIN_WINDOW_LABEL {
                return;
            }

            match event {
                WindowEvent::ThemeChanged(theme) => {
                    theme_monitor::handle_theme_changed(
                        window.app_handle(),
                        *theme == Theme::Dark,
                    );
                }
                WindowEvent::Destroyed => {
                    append_desktop_log("main window destroyed");
                }
                _ => {}
            }
        })
        .on_page_load(|webview, payload| match payload.event() {
            PageLoadEvent::Started => {
                append_desktop_log(&format!("page-load started: {}", payload.url()));
                desktop_bridge::inject_bridge(&webview);
            }
            PageLoadEvent::Finished => {
                append_desktop_log(&format!("page-load finished: {}", payload.url()));
                theme_monitor::sync_window_theme(webview.app_handle(), &webview.window());
            }
        })
        .setup(|app| {
            let app_handle = app.handle().clone();

            if let Err(error) = backend_launch::start_backend(&app_handle) {
                // Non-fatal: the window still opens, backend calls fail at
                // the network layer.
                append_startup_log(&format!("backend start failed: {error}"));
            }

            if let Err(error) = main_window::create_main_window(&app_handle) {
                append_startup_log(&format!("window creation failed: {error}"));
            }

            Ok(())
        })
        .build(tauri::generate_context!())
        .expect("error while building tauri application")
        .run(|app_handle, event| match event {
            RunEvent::ExitRequested { .. } => {
                exit_events::handle_exit_requested(app_handle);
            }
            RunEvent::Exit => {
                exit_events::handle_exit_event(app_handle);
            }
            #[cfg(target_os = "macos")]
            RunEvent::Reopen { .. } => {
                main_window::handle_reactivate(app_handle);
            }
            _ => {}
        });
}
