// State module - per-run reporter state
// Tracks which compiler version the output last announced

use tracing::debug;

/// Compiler version bookkeeping for one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReporterState {
    current_compiler_version: Option<String>,
    last_shown_compiler_version: Option<String>,
}

impl ReporterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget everything seen so far (run start)
    pub fn reset(&mut self) {
        self.current_compiler_version = None;
        self.last_shown_compiler_version = None;
    }

    /// Record the version the project now uses.
    ///
    /// Returns `true` when it differs from the last announced version, in
    /// which case the caller prints a header and then calls
    /// [`ReporterState::mark_version_shown`].
    pub fn use_compiler_version(&mut self, version: &str) -> bool {
        self.current_compiler_version = Some(version.to_string());
        let changed = self.last_shown_compiler_version.as_deref() != Some(version);
        debug!(version, changed, "project uses compiler");
        changed
    }

    pub fn mark_version_shown(&mut self) {
        self.last_shown_compiler_version = self.current_compiler_version.clone();
    }

    pub fn current_compiler_version(&self) -> Option<&str> {
        self.current_compiler_version.as_deref()
    }

    pub fn last_shown_compiler_version(&self) -> Option<&str> {
        self.last_shown_compiler_version.as_deref()
    }
}
