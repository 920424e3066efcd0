use tauri::{AppHandle, Manager};

use crate::{append_shutdown_log, backend_process_lifecycle, BackendState};

pub(crate) fn handle_exit_requested(app_handle: &AppHandle) {
    run_exit_cleanup(app_handle, "exit requested");
}

pub(crate) fn handle_exit_event(app_handle: &AppHandle) {
    run_exit_cleanup(app_handle, "exit");
}

/// The backend must be asked to stop before the host process exits, on every
/// exit path, and at most once per backend process.
fn run_exit_cleanup(app_handle: &AppHandle, trigger: &str) {
    let state = app_handle.state::<BackendState>();

    let first_cleanup = state
        .exit_state
        .lock()
        .map(|mut machine| machine.try_begin_shutdown())
        // A poisoned lock still shuts the backend down; stop is idempotent.
        .unwrap_or(true);
    if !first_cleanup {
        return;
    }

    let backend_running = state
        .lifecycle
        .lock()
        .map(|lifecycle| lifecycle.is_running())
        .unwrap_or(false);
    append_shutdown_log(&format!(
        "shutting down backend ({trigger}); backend running: {backend_running}"
    ));
    backend_process_lifecycle::stop_backend(&state);
}
