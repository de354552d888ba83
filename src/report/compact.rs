// Compact reporter - one mark per test, wrapped into fixed-width lines

use crate::error::Result;
use crate::events::{DescribeStart, ErrorReport, EventKind, FileStart, ProjectUses, TestOutcome};
use crate::render::{Printer, Sink};

use super::{DotBuffer, EventHandler, ReporterBase};

pub struct CompactReporter {
    base: ReporterBase,
    dots: DotBuffer,
}

impl CompactReporter {
    pub fn new(printer: Printer, sink: Sink) -> Self {
        Self {
            base: ReporterBase::new(printer, sink),
            dots: DotBuffer::new(),
        }
    }

    pub fn dots(&self) -> &DotBuffer {
        &self.dots
    }

    fn print_mark(&mut self, passed: bool) -> Result<()> {
        let printer = &self.base.printer;
        let symbols = printer.symbols();
        let mark = match (printer.colorizer(), passed) {
            (Some(colorizer), true) => colorizer.gray(symbols.success),
            (Some(colorizer), false) => colorizer.red(symbols.error),
            (None, true) => symbols.success.to_string(),
            (None, false) => symbols.error.to_string(),
        };

        self.dots.write(&mut self.base.sink, &mark)?;
        Ok(())
    }
}

impl EventHandler for CompactReporter {
    fn on_run_start(&mut self) -> Result<()> {
        self.base.reset();
        self.dots.reset();
        Ok(())
    }

    fn on_project_uses(&mut self, payload: &ProjectUses) -> Result<()> {
        let dots = &mut self.dots;
        self.base.announce_compiler_version(payload, |sink| dots.flush(sink))
    }

    fn on_file_start(&mut self, _payload: &FileStart) -> Result<()> {
        Ok(())
    }

    fn on_describe_start(&mut self, _payload: &DescribeStart) -> Result<()> {
        Ok(())
    }

    fn on_describe_end(&mut self) -> Result<()> {
        Ok(())
    }

    fn on_test_pass(&mut self, _payload: &TestOutcome) -> Result<()> {
        self.print_mark(true)
    }

    fn on_test_fail(&mut self, _payload: &TestOutcome) -> Result<()> {
        self.print_mark(false)
    }

    fn on_run_end(&mut self) -> Result<()> {
        self.dots.flush(&mut self.base.sink)?;
        self.base.sink.blank_line()?;
        self.base.sink.blank_line()?;
        Ok(())
    }

    fn on_error(&mut self, kind: EventKind, report: &ErrorReport) -> Result<()> {
        self.dots.flush(&mut self.base.sink)?;
        self.base.print_error_report(kind, report)
    }
}
