use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};

use chrono::Local;

use crate::{runtime_paths, DESKTOP_LOG_FILE};

/// Resolves the desktop log path under the packaged root directory, falling
/// back to the OS temp directory when no home directory is available.
pub(crate) fn resolve_desktop_log_path(
    packaged_root_dir: Option<PathBuf>,
    file_name: &str,
) -> PathBuf {
    packaged_root_dir
        .map(|root| root.join("logs").join(file_name))
        .unwrap_or_else(|| std::env::temp_dir().join(file_name))
}

pub(crate) fn append_startup_log(message: &str) {
    append_tagged_log("startup", message);
}

pub(crate) fn append_desktop_log(message: &str) {
    append_tagged_log("desktop", message);
}

pub(crate) fn append_shutdown_log(message: &str) {
    append_tagged_log("shutdown", message);
}

fn append_tagged_log(tag: &str, message: &str) {
    let path = resolve_desktop_log_path(
        runtime_paths::default_packaged_root_dir(),
        DESKTOP_LOG_FILE,
    );
    let line = format!(
        "[{}] [{tag}] {message}",
        Local::now().format("%Y-%m-%d %H:%M:%S%.3f")
    );
    append_log_line(&path, &line);
}

// Logging is best-effort; a failure to write must never fail the caller.
fn append_log_line(path: &Path, line: &str) {
    if let Some(parent) = path.parent() {
        if fs::create_dir_all(parent).is_err() {
            return;
        }
    }
    if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(path) {
        let _ = writeln!(file, "{line}");
    }
}

#[cfg(test)]
mod tests {
    use std::{fs, path::PathBuf};

    use super::{append_log_line, resolve_desktop_log_path};

    #[test]
    fn resolve_desktop_log_path_nests_under_packaged_root() {
        let path = resolve_desktop_log_path(Some(PathBuf::from("/opt/pc-monitor")), "desktop.log");
        assert_eq!(path, PathBuf::from("/opt/pc-monitor/logs/desktop.log"));
    }

    #[test]
    fn resolve_desktop_log_path_falls_back_to_temp_dir() {
        let path = resolve_desktop_log_path(None, "desktop.log");
        assert_eq!(path, std::env::temp_dir().join("desktop.log"));
    }

    #[test]
    fn append_log_line_creates_parent_directories_and_appends() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("logs").join("desktop.log");

        append_log_line(&path, "first line");
        append_log_line(&path, "second line");

        let contents = fs::read_to_string(&path).expect("log file");
        assert_eq!(contents, "first line\nsecond line\n");
    }
}
