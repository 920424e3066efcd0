use std::path::{Path, PathBuf};

use tauri::AppHandle;

use crate::runtime_paths;

/// Where the backend executable lives, resolved once at startup. Packaged
/// installs carry the backend next to the bundled resources; development
/// trees use the local CMake build output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum BackendLocation {
    Packaged { backend_dir: PathBuf },
    Development { build_dir: PathBuf },
}

impl BackendLocation {
    /// Pure path resolution; existence is the spawn attempt's problem.
    pub(crate) fn executable_path(&self) -> PathBuf {
        match self {
            BackendLocation::Packaged { backend_dir } => {
                backend_dir.join(backend_executable_name())
            }
            BackendLocation::Development { build_dir } => build_dir.join(backend_executable_name()),
        }
    }
}

pub(crate) fn backend_executable_name() -> &'static str {
    if cfg!(target_os = "windows") {
        "pc_monitor.exe"
    } else {
        "pc_monitor"
    }
}

pub(crate) fn dev_build_dir(workspace_root: &Path) -> PathBuf {
    workspace_root.join("build").join("bin").join("Release")
}

pub(crate) fn resolve_backend_location(app_handle: &AppHandle) -> BackendLocation {
    if let Some(backend_dir) = runtime_paths::resolve_resource_path(app_handle, "backend")
        .filter(|dir| dir.join(backend_executable_name()).is_file())
    {
        return BackendLocation::Packaged { backend_dir };
    }

    BackendLocation::Development {
        build_dir: dev_build_dir(&runtime_paths::workspace_root_dir()),
    }
}
