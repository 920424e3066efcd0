use std::process::Child;

use tauri::{AppHandle, Emitter, Manager};

use crate::{
    append_desktop_log, process_control, BackendExitPayload, BackendLifecycle, BackendState,
    BACKEND_EXITED_EVENT, MAIN_WINDOW_LABEL,
};

/// Blocks on the child's exit from a dedicated thread and reports the
/// terminal state back through the supervisor, exactly once per process.
pub(crate) fn watch_backend_exit(app_handle: AppHandle, pid: u32, mut child: Child) {
    std::thread::spawn(move || {
        let status = child.wait();
        let code = status.ok().and_then(|status| status.code());
        handle_backend_exit(&app_handle, pid, code);
    });
}

fn handle_backend_exit(app_handle: &AppHandle, pid: u32, code: Option<i32>) {
    let state = app_handle.state::<BackendState>();

    if !record_backend_exit(&state, pid, code) {
        append_desktop_log(&format!(
            "stale backend watcher reaped pid {pid} (code {code:?}); a newer backend is running"
        ));
        return;
    }

    append_desktop_log(&format!("backend (pid {pid}) exited with code {code:?}"));
    if let Err(error) = app_handle.emit_to(
        MAIN_WINDOW_LABEL,
        BACKEND_EXITED_EVENT,
        BackendExitPayload { code },
    ) {
        append_desktop_log(&format!("failed to publish backend exit: {error}"));
    }
}

/// Records the terminal state for the watched process. The owned reference
/// may already be gone (`stop_backend` takes it without waiting for the
/// exit); that watcher still records its own terminal state. A stale watcher
/// whose process was replaced by a newer owned one must leave both the
/// reference and the lifecycle untouched, and gets `false` back.
pub(crate) fn record_backend_exit(state: &BackendState, pid: u32, code: Option<i32>) -> bool {
    match state.pid.lock() {
        Ok(mut guard) => match *guard {
            Some(owned) if owned == pid => *guard = None,
            Some(_) => return false,
            None => {}
        },
        Err(_) => return false,
    }

    if let Ok(mut lifecycle) = state.lifecycle.lock() {
        *lifecycle = BackendLifecycle::Exited { code };
    }
    true
}

/// Sends a termination signal to the owned backend process, if any, and
/// clears the owned reference without waiting for the exit to be observed.
/// Safe to call repeatedly and with no process running.
pub(crate) fn stop_backend(state: &BackendState) {
    let pid = match state.pid.lock() {
        Ok(mut guard) => guard.take(),
        Err(_) => None,
    };

    if let Some(pid) = pid {
        append_desktop_log(&format!("stopping backend (pid {pid})"));
        process_control::terminate_process(pid);
    }
}

#[cfg(test)]
mod tests {
    use super::{record_backend_exit, stop_backend};
    use crate::{BackendLifecycle, BackendState};

    #[test]
    fn stop_backend_without_a_process_is_a_no_op() {
        let state = BackendState::default();
        stop_backend(&state);
        stop_backend(&state);
        assert!(state.pid.lock().expect("pid lock").is_none());
    }

    #[test]
    fn stop_backend_clears_the_owned_reference() {
        let state = BackendState::default();
        // A pid nothing can own; the termination signal goes nowhere.
        *state.pid.lock().expect("pid lock") = Some(999_999_999);
        stop_backend(&state);
        assert!(state.pid.lock().expect("pid lock").is_none());
    }

    #[test]
    fn current_watcher_clears_the_reference_and_records_the_exit() {
        let state = BackendState::default();
        *state.pid.lock().expect("pid lock") = Some(7);
        *state.lifecycle.lock().expect("lifecycle lock") = BackendLifecycle::Running { pid: 7 };

        assert!(record_backend_exit(&state, 7, Some(2)));
        assert!(state.pid.lock().expect("pid lock").is_none());
        assert_eq!(
            *state.lifecycle.lock().expect("lifecycle lock"),
            BackendLifecycle::Exited { code: Some(2) }
        );
    }

    #[test]
    fn stale_watcher_leaves_a_newer_running_backend_untouched() {
        let state = BackendState::default();
        // First backend was stopped and replaced before its watcher fired.
        *state.pid.lock().expect("pid lock") = Some(7);
        *state.lifecycle.lock().expect("lifecycle lock") = BackendLifecycle::Running { pid: 7 };

        assert!(!record_backend_exit(&state, 3, Some(0)));
        assert_eq!(*state.pid.lock().expect("pid lock"), Some(7));
        assert_eq!(
            *state.lifecycle.lock().expect("lifecycle lock"),
            BackendLifecycle::Running { pid: 7 }
        );
    }

    #[test]
    fn watcher_of_a_stopped_backend_still_records_its_exit() {
        let state = BackendState::default();
        // stop_backend already took the reference; the exit is still ours.
        *state.lifecycle.lock().expect("lifecycle lock") = BackendLifecycle::Running { pid: 7 };

        assert!(record_backend_exit(&state, 7, None));
        assert!(state.pid.lock().expect("pid lock").is_none());
        assert_eq!(
            *state.lifecycle.lock().expect("lifecycle lock"),
            BackendLifecycle::Exited { code: None }
        );
    }
}
