//! Fire-and-forget termination of the backend process. The exit watcher
//! thread reaps the child and records the final lifecycle state.

#[cfg(target_os = "windows")]
pub(crate) fn terminate_process(pid: u32) {
    use std::process::{Command, Stdio};

    let _ = Command::new("taskkill")
        .args(["/pid", &pid.to_string(), "/t", "/f"])
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();
}

#[cfg(not(target_os = "windows"))]
pub(crate) fn terminate_process(pid: u32) {
    unsafe {
        libc::kill(pid as i32, libc::SIGTERM);
    }
}
