// Behavior shared by every reporter: version headers and error blocks

use tracing::{debug, warn};

use crate::diagnostics::format_diagnostic;
use crate::error::Result;
use crate::events::{ErrorReport, EventKind, ProjectUses};
use crate::render::{Printer, Sink};
use crate::state::ReporterState;

const VERSION_HEADER_LEVEL: usize = 1;

/// Printer, sink and run state owned by one reporter instance
pub struct ReporterBase {
    pub(crate) printer: Printer,
    pub(crate) sink: Sink,
    state: ReporterState,
}

impl ReporterBase {
    pub fn new(printer: Printer, sink: Sink) -> Self {
        Self {
            printer,
            sink,
            state: ReporterState::new(),
        }
    }

    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Print the compiler version header when the version changed.
    ///
    /// `before_header` runs right before the header is written and only then;
    /// reporters use it to close any partially written line.
    pub fn announce_compiler_version<F>(
        &mut self,
        payload: &ProjectUses,
        before_header: F,
    ) -> Result<()>
    where
        F: FnOnce(&mut Sink) -> std::io::Result<()>,
    {
        if !self.state.use_compiler_version(&payload.compiler_version) {
            return Ok(());
        }

        before_header(&mut self.sink)?;

        let header = self
            .printer
            .header(&version_header_text(payload), VERSION_HEADER_LEVEL);
        self.sink.line(&header)?;
        self.state.mark_version_shown();

        Ok(())
    }

    /// Write each diagnostic of an error event to the error stream
    pub fn print_error_report(&mut self, kind: EventKind, report: &ErrorReport) -> Result<()> {
        if report.diagnostics.is_empty() {
            warn!(kind = %kind, "error event without diagnostics");
            return Ok(());
        }

        debug!(kind = %kind, count = report.diagnostics.len(), "printing diagnostics");

        for diagnostic in &report.diagnostics {
            let text = format_diagnostic(diagnostic);
            let text = match self.printer.colorizer() {
                Some(colorizer) => colorizer.red(&text),
                None => text,
            };
            self.sink.error_line(&text)?;
            self.sink.error_line("")?;
        }

        Ok(())
    }
}

pub(crate) fn version_header_text(payload: &ProjectUses) -> String {
    match &payload.project_config_file_path {
        Some(path) => format!("uses TypeScript {} with {}", payload.compiler_version, path),
        None => format!("uses TypeScript {}", payload.compiler_version),
    }
}
