pub(crate) const MAIN_WINDOW_LABEL: &str = "main";
pub(crate) const MAIN_WINDOW_TITLE: &str = "PC Monitor Pro";
pub(crate) const MAIN_WINDOW_WIDTH: f64 = 1200.0;
pub(crate) const MAIN_WINDOW_HEIGHT: f64 = 800.0;
pub(crate) const MAIN_WINDOW_MIN_WIDTH: f64 = 800.0;
pub(crate) const MAIN_WINDOW_MIN_HEIGHT: f64 = 600.0;
pub(crate) const DASHBOARD_PAGE: &str = "dashboard.html";

pub(crate) const DEFAULT_BACKEND_URL: &str = "http://localhost:8080";
pub(crate) const BACKEND_URL_ENV: &str = "PC_MONITOR_BACKEND_URL";
pub(crate) const DEFAULT_BACKEND_PORT: u16 = 8080;
pub(crate) const BACKEND_WORKER_FLAG: &str = "-w";
pub(crate) const BACKEND_PORT_FLAG: &str = "-p";
pub(crate) const API_PATH_PREFIX: &str = "/api/";

pub(crate) const THEME_CHANGED_EVENT: &str = "theme-changed";
pub(crate) const BACKEND_EXITED_EVENT: &str = "backend-exited";

pub(crate) const TITLEBAR_OVERLAY_COLOR: &str = "#00000000";
pub(crate) const TITLEBAR_SYMBOL_COLOR_DARK: &str = "#b0b0b0";
pub(crate) const TITLEBAR_SYMBOL_COLOR_LIGHT: &str = "#4a4a4a";
pub(crate) const TITLEBAR_OVERLAY_HEIGHT: u32 = 36;

pub(crate) const DESKTOP_LOG_FILE: &str = "desktop.log";
