use std::path::PathBuf;

use tauri::{path::BaseDirectory, AppHandle, Manager};

pub(crate) fn default_packaged_root_dir() -> Option<PathBuf> {
    home::home_dir().map(|home| home.join(".pc-monitor"))
}

/// Root of the development tree, used to locate local backend build output.
pub(crate) fn workspace_root_dir() -> PathBuf {
    let candidate = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    candidate.canonicalize().unwrap_or(candidate)
}

pub(crate) fn resolve_resource_path(app_handle: &AppHandle, relative_path: &str) -> Option<PathBuf> {
    app_handle
        .path()
        .resolve(relative_path, BaseDirectory::Resource)
        .ok()
}
