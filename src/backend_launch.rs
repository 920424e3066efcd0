use std::{
    path::Path,
    process::{Command, Stdio},
};

use tauri::{AppHandle, Manager};

use crate::{
    append_startup_log, backend_path, backend_process_lifecycle, BackendLifecycle, BackendState,
    BACKEND_PORT_FLAG, BACKEND_WORKER_FLAG,
};

#[cfg(target_os = "windows")]
const CREATE_NO_WINDOW: u32 = 0x0800_0000;

/// Spawns the backend in headless worker mode. Errors if a backend process
/// is already owned; spawn failure is recorded and reported to the caller,
/// but the shell keeps running without a backend.
pub(crate) fn start_backend(app_handle: &AppHandle) -> Result<(), String> {
    let state = app_handle.state::<BackendState>();

    {
        let guard = state
            .pid
            .lock()
            .map_err(|_| "Backend process lock poisoned.".to_string())?;
        if guard.is_some() {
            return Err("Backend process is already running.".to_string());
        }
    }

    if let Ok(lifecycle) = state.lifecycle.lock() {
        if lifecycle.is_terminal() {
            append_startup_log("previous backend instance is terminal; starting a fresh one");
        }
    }

    let location = backend_path::resolve_backend_location(app_handle);
    let executable = location.executable_path();
    append_startup_log(&format!(
        "starting backend: {} ({:?})",
        executable.display(),
        location
    ));

    let mut command = build_backend_command(&executable, state.port);
    match command.spawn() {
        Ok(child) => {
            let pid = child.id();
            *state
                .pid
                .lock()
                .map_err(|_| "Backend process lock poisoned.".to_string())? = Some(pid);
            if let Ok(mut lifecycle) = state.lifecycle.lock() {
                *lifecycle = BackendLifecycle::Running { pid };
            }
            append_startup_log(&format!("backend running (pid {pid})"));
            backend_process_lifecycle::watch_backend_exit(app_handle.clone(), pid, child);
            Ok(())
        }
        Err(error) => {
            let reason = format!(
                "Failed to spawn backend {}: {}",
                executable.display(),
                error
            );
            if let Ok(mut lifecycle) = state.lifecycle.lock() {
                *lifecycle = BackendLifecycle::FailedToStart {
                    reason: reason.clone(),
                };
            }
            Err(reason)
        }
    }
}

/// Fixed invocation: `<executable> -w -p <port>`, all stdio discarded, no
/// console window on Windows.
pub(crate) fn build_backend_command(executable: &Path, port: u16) -> Command {
    let mut command = Command::new(executable);
    command
        .arg(BACKEND_WORKER_FLAG)
        .arg(BACKEND_PORT_FLAG)
        .arg(port.to_string())
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    #[cfg(target_os = "windows")]
    {
        use std::os::windows::process::CommandExt;
        command.creation_flags(CREATE_NO_WINDOW);
    }

    command
}

#[cfg(test)]
mod tests {
    use std::{ffi::OsString, path::Path};

    use super::build_backend_command;

    #[test]
    fn backend_command_carries_worker_flag_and_port() {
        let command = build_backend_command(Path::new("/opt/backend/pc_monitor"), 8080);
        let args: Vec<OsString> = command.get_args().map(OsString::from).collect();
        assert_eq!(args, ["-w", "-p", "8080"]);
    }

    #[test]
    fn backend_command_targets_the_resolved_executable() {
        let command = build_backend_command(Path::new("/opt/backend/pc_monitor"), 9090);
        assert_eq!(command.get_program(), "/opt/backend/pc_monitor");
        let args: Vec<OsString> = command.get_args().map(OsString::from).collect();
        assert_eq!(args.last(), Some(&OsString::from("9090")));
    }
}
