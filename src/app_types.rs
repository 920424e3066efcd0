use std::{
    env,
    sync::Mutex,
};

use crate::{backend_config, exit_state, BACKEND_URL_ENV, DEFAULT_BACKEND_PORT, DEFAULT_BACKEND_URL};

/// Lifecycle of the supervised backend process. A terminal state is never
/// reused; a later spawn replaces it with a fresh `Running` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum BackendLifecycle {
    NotStarted,
    Running { pid: u32 },
    Exited { code: Option<i32> },
    FailedToStart { reason: String },
}

impl BackendLifecycle {
    pub(crate) fn is_running(&self) -> bool {
        matches!(self, BackendLifecycle::Running { .. })
    }

    pub(crate) fn is_terminal(&self) -> bool {
        matches!(
            self,
            BackendLifecycle::Exited { .. } | BackendLifecycle::FailedToStart { .. }
        )
    }
}

#[derive(Debug)]
pub(crate) struct BackendState {
    /// Owned reference to the live backend process. Taken by `stop_backend`
    /// or cleared by the exit watcher, whichever comes first.
    pub(crate) pid: Mutex<Option<u32>>,
    pub(crate) lifecycle: Mutex<BackendLifecycle>,
    pub(crate) backend_url: String,
    pub(crate) port: u16,
    pub(crate) exit_state: Mutex<exit_state::ExitStateMachine>,
}

impl Default for BackendState {
    fn default() -> Self {
        Self {
            pid: Mutex::new(None),
            lifecycle: Mutex::new(BackendLifecycle::NotStarted),
            backend_url: backend_config::normalize_backend_url(
                &env::var(BACKEND_URL_ENV).unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string()),
                DEFAULT_BACKEND_URL,
            ),
            port: DEFAULT_BACKEND_PORT,
            exit_state: Mutex::new(exit_state::ExitStateMachine::default()),
        }
    }
}

/// Last theme value observed from the host, used as the injection snapshot
/// for windows created after startup.
#[derive(Debug, Default)]
pub(crate) struct ThemeState {
    is_dark: Mutex<bool>,
}

impl ThemeState {
    pub(crate) fn is_dark(&self) -> bool {
        self.is_dark.lock().map(|guard| *guard).unwrap_or(false)
    }

    /// Records the observed value and reports whether it actually changed.
    pub(crate) fn record(&self, is_dark: bool) -> bool {
        match self.is_dark.lock() {
            Ok(mut guard) => {
                let changed = *guard != is_dark;
                *guard = is_dark;
                changed
            }
            Err(_) => false,
        }
    }
}

#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BackendExitPayload {
    pub(crate) code: Option<i32>,
}
