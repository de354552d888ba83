// Report module - event routing and the streaming reporters

pub mod base;
pub mod compact;
pub mod dots;
pub mod hierarchical;
pub mod hierarchy;

pub use base::ReporterBase;
pub use compact::CompactReporter;
pub use dots::{DotBuffer, DOT_LINE_WIDTH};
pub use hierarchical::HierarchicalReporter;
pub use hierarchy::{DescribeEntry, HierarchyTracker};

use std::str::FromStr;

use tracing::trace;

use crate::error::Result;
use crate::events::{
    DescribeStart, ErrorReport, Event, EventKind, FileStart, ProjectUses, TestOutcome,
};
use crate::render::{Printer, Sink};

/// Handler slots for runner events.
///
/// Every slot with a dedicated meaning is required, so a reporter cannot be
/// built with one missing. Kinds without a dedicated slot land in
/// [`EventHandler::on_unimplemented`], which ignores them unless overridden.
pub trait EventHandler {
    fn on_run_start(&mut self) -> Result<()>;

    fn on_project_uses(&mut self, payload: &ProjectUses) -> Result<()>;

    fn on_file_start(&mut self, payload: &FileStart) -> Result<()>;

    fn on_describe_start(&mut self, payload: &DescribeStart) -> Result<()>;

    fn on_describe_end(&mut self) -> Result<()>;

    fn on_test_pass(&mut self, payload: &TestOutcome) -> Result<()>;

    fn on_test_fail(&mut self, payload: &TestOutcome) -> Result<()>;

    fn on_run_end(&mut self) -> Result<()>;

    /// Called for every error kind, with the kind that carried the report
    fn on_error(&mut self, kind: EventKind, report: &ErrorReport) -> Result<()>;

    fn on_unimplemented(&mut self, _event: &Event) -> Result<()> {
        Ok(())
    }
}

/// Route one event to exactly one handler slot
pub fn dispatch<H>(handler: &mut H, event: &Event) -> Result<()>
where
    H: EventHandler + ?Sized,
{
    trace!(kind = %event.kind(), "dispatch event");

    match event {
        Event::RunStart(_) => handler.on_run_start(),
        Event::ProjectUses(payload) => handler.on_project_uses(payload),
        Event::FileStart(payload) => handler.on_file_start(payload),
        Event::DescribeStart(payload) => handler.on_describe_start(payload),
        Event::DescribeEnd(_) => handler.on_describe_end(),
        Event::TestPass(payload) => handler.on_test_pass(payload),
        Event::TestFail(payload) => handler.on_test_fail(payload),
        Event::RunEnd(_) => handler.on_run_end(),

        Event::StoreError(report)
        | Event::ProjectError(report)
        | Event::FileError(report)
        | Event::DirectiveError(report)
        | Event::CollectError(report)
        | Event::TestError(report)
        | Event::ExpectError(report)
        | Event::SuppressedError(report)
        | Event::WatchError(report) => handler.on_error(event.kind(), report),

        Event::StoreAdds(_)
        | Event::TargetStart(_)
        | Event::TargetEnd(_)
        | Event::FileEnd(_)
        | Event::DirectiveStart(_)
        | Event::DirectiveEnd(_)
        | Event::CollectStart(_)
        | Event::CollectNode(_)
        | Event::CollectEnd(_)
        | Event::TestStart(_)
        | Event::TestSkip(_)
        | Event::TestFixme(_)
        | Event::TestTodo(_)
        | Event::ExpectStart(_)
        | Event::ExpectFail(_)
        | Event::ExpectPass(_)
        | Event::ExpectSkip(_)
        | Event::ExpectFixme(_)
        | Event::SuppressedStart(_)
        | Event::SuppressedMatch(_)
        | Event::SuppressedIgnore(_)
        | Event::SuppressedEnd(_) => handler.on_unimplemented(event),
    }
}

/// Available reporter styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReporterKind {
    /// Headings per describe block, one line per test
    #[default]
    Hierarchical,
    /// One mark per test, wrapped at a fixed width
    Dots,
}

impl ReporterKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReporterKind::Hierarchical => "hierarchical",
            ReporterKind::Dots => "dots",
        }
    }
}

impl FromStr for ReporterKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hierarchical" | "list" => Ok(Self::Hierarchical),
            "dots" | "compact" => Ok(Self::Dots),
            other => Err(format!(
                "unknown reporter '{}' (expected hierarchical or dots)",
                other
            )),
        }
    }
}

/// Build a boxed reporter for the requested style
pub fn build_reporter(kind: ReporterKind, printer: Printer, sink: Sink) -> Box<dyn EventHandler> {
    match kind {
        ReporterKind::Hierarchical => Box::new(HierarchicalReporter::new(printer, sink)),
        ReporterKind::Dots => Box::new(CompactReporter::new(printer, sink)),
    }
}
