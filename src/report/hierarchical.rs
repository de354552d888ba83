// Hierarchical reporter - headings for describe blocks, one line per test

use crate::error::Result;
use crate::events::{DescribeStart, ErrorReport, EventKind, FileStart, ProjectUses, TestOutcome};
use crate::render::{Printer, Sink};

use super::{EventHandler, HierarchyTracker, ReporterBase};

const TOP_LEVEL_HEADING: usize = 2;
const NESTED_HEADING: usize = 3;

pub struct HierarchicalReporter {
    base: ReporterBase,
    scopes: HierarchyTracker,
}

impl HierarchicalReporter {
    pub fn new(printer: Printer, sink: Sink) -> Self {
        Self {
            base: ReporterBase::new(printer, sink),
            scopes: HierarchyTracker::new(),
        }
    }

    pub fn scopes(&self) -> &HierarchyTracker {
        &self.scopes
    }

    fn print_test(&mut self, name: &str, passed: bool) -> Result<()> {
        let line = test_line(&self.base.printer, name, passed, self.scopes.depth());
        self.base.sink.line(&line)?;
        Ok(())
    }
}

/// Render one test result at the given scope depth
pub fn test_line(printer: &Printer, name: &str, passed: bool, depth: usize) -> String {
    let symbols = printer.symbols();
    let mark = if passed { symbols.success } else { symbols.error };
    let text = format!("{} {}", mark, name);

    let text = match printer.colorizer() {
        Some(colorizer) if passed => colorizer.gray(&text),
        Some(colorizer) => colorizer.red(&text),
        None => text,
    };

    if printer.whitespace_safe() {
        text
    } else {
        printer.indent(&text, depth)
    }
}

impl EventHandler for HierarchicalReporter {
    fn on_run_start(&mut self) -> Result<()> {
        self.base.reset();
        self.scopes.clear();
        Ok(())
    }

    fn on_project_uses(&mut self, payload: &ProjectUses) -> Result<()> {
        self.base.announce_compiler_version(payload, |_| Ok(()))
    }

    fn on_file_start(&mut self, _payload: &FileStart) -> Result<()> {
        self.scopes.clear();
        Ok(())
    }

    fn on_describe_start(&mut self, payload: &DescribeStart) -> Result<()> {
        let depth = self.scopes.push(payload.name());
        let level = if depth == 1 {
            TOP_LEVEL_HEADING
        } else {
            NESTED_HEADING
        };

        let printer = &self.base.printer;
        let heading = printer.header(payload.name(), level);
        let heading = if printer.whitespace_safe() {
            heading
        } else {
            printer.indent(&heading, depth - 1)
        };

        self.base.sink.line(&heading)?;
        Ok(())
    }

    fn on_describe_end(&mut self) -> Result<()> {
        self.scopes.pop();
        Ok(())
    }

    fn on_test_pass(&mut self, payload: &TestOutcome) -> Result<()> {
        self.print_test(payload.name(), true)
    }

    fn on_test_fail(&mut self, payload: &TestOutcome) -> Result<()> {
        self.print_test(payload.name(), false)
    }

    fn on_run_end(&mut self) -> Result<()> {
        self.base.sink.blank_line()?;
        Ok(())
    }

    fn on_error(&mut self, kind: EventKind, report: &ErrorReport) -> Result<()> {
        self.base.print_error_report(kind, report)
    }
}
