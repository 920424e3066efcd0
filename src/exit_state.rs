/// Tracks shutdown cleanup across the exit paths (quit, last window closed,
/// forced exit). Several run events can race to clean up; only the first
/// caller wins.
#[derive(Debug, Default)]
pub(crate) struct ExitStateMachine {
    shutdown_started: bool,
}

impl ExitStateMachine {
    /// Returns true exactly once, for the caller that must run cleanup.
    pub(crate) fn try_begin_shutdown(&mut self) -> bool {
        if self.shutdown_started {
            return false;
        }
        self.shutdown_started = true;
        true
    }
}
