#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app_constants;
mod app_runtime;
mod app_types;
mod backend_config;
mod backend_launch;
mod backend_path;
mod backend_process_lifecycle;
mod desktop_bridge;
mod exit_events;
mod exit_state;
mod logging;
mod main_window;
mod process_control;
mod request_rewriter;
mod runtime_paths;
mod theme_monitor;
mod theme_overlay;

pub(crate) use app_constants::*;
pub(crate) use app_types::{BackendExitPayload, BackendLifecycle, BackendState, ThemeState};
pub(crate) use logging::{append_desktop_log, append_shutdown_log, append_startup_log};

fn main() {
    app_runtime::run();
}
