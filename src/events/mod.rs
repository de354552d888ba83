// Runner events - one variant per wire kind

pub mod kind;
pub mod payload;

pub use kind::EventKind;
pub use payload::{
    DescribeStart, ErrorReport, FileStart, Opaque, ProjectUses, TestOutcome,
    DEFAULT_DESCRIBE_NAME, DEFAULT_TEST_NAME,
};

use serde::{Deserialize, Serialize};

/// A single event from the runner.
///
/// Serialized as `{"event": "<kind>", "payload": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "payload")]
pub enum Event {
    #[serde(rename = "run:start")]
    RunStart(Opaque),
    #[serde(rename = "run:end")]
    RunEnd(Opaque),
    #[serde(rename = "store:adds")]
    StoreAdds(Opaque),
    #[serde(rename = "store:error")]
    StoreError(ErrorReport),
    #[serde(rename = "target:start")]
    TargetStart(Opaque),
    #[serde(rename = "target:end")]
    TargetEnd(Opaque),
    #[serde(rename = "project:uses")]
    ProjectUses(ProjectUses),
    #[serde(rename = "project:error")]
    ProjectError(ErrorReport),
    #[serde(rename = "file:start")]
    FileStart(FileStart),
    #[serde(rename = "file:error")]
    FileError(ErrorReport),
    #[serde(rename = "file:end")]
    FileEnd(Opaque),
    #[serde(rename = "directive:start")]
    DirectiveStart(Opaque),
    #[serde(rename = "directive:error")]
    DirectiveError(ErrorReport),
    #[serde(rename = "directive:end")]
    DirectiveEnd(Opaque),
    #[serde(rename = "collect:start")]
    CollectStart(Opaque),
    #[serde(rename = "collect:error")]
    CollectError(ErrorReport),
    #[serde(rename = "collect:node")]
    CollectNode(Opaque),
    #[serde(rename = "collect:end")]
    CollectEnd(Opaque),
    #[serde(rename = "describe:start")]
    DescribeStart(DescribeStart),
    #[serde(rename = "describe:end")]
    DescribeEnd(Opaque),
    #[serde(rename = "test:start")]
    TestStart(Opaque),
    #[serde(rename = "test:error")]
    TestError(ErrorReport),
    #[serde(rename = "test:fail")]
    TestFail(TestOutcome),
    #[serde(rename = "test:pass")]
    TestPass(TestOutcome),
    #[serde(rename = "test:skip")]
    TestSkip(Opaque),
    #[serde(rename = "test:fixme")]
    TestFixme(Opaque),
    #[serde(rename = "test:todo")]
    TestTodo(Opaque),
    #[serde(rename = "expect:start")]
    ExpectStart(Opaque),
    #[serde(rename = "expect:error")]
    ExpectError(ErrorReport),
    #[serde(rename = "expect:fail")]
    ExpectFail(Opaque),
    #[serde(rename = "expect:pass")]
    ExpectPass(Opaque),
    #[serde(rename = "expect:skip")]
    ExpectSkip(Opaque),
    #[serde(rename = "expect:fixme")]
    ExpectFixme(Opaque),
    #[serde(rename = "suppressed:start")]
    SuppressedStart(Opaque),
    #[serde(rename = "suppressed:error")]
    SuppressedError(ErrorReport),
    #[serde(rename = "suppressed:match")]
    SuppressedMatch(Opaque),
    #[serde(rename = "suppressed:ignore")]
    SuppressedIgnore(Opaque),
    #[serde(rename = "suppressed:end")]
    SuppressedEnd(Opaque),
    #[serde(rename = "watch:error")]
    WatchError(ErrorReport),
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self {
            Event::RunStart(_) => EventKind::RunStart,
            Event::RunEnd(_) => EventKind::RunEnd,
            Event::StoreAdds(_) => EventKind::StoreAdds,
            Event::StoreError(_) => EventKind::StoreError,
            Event::TargetStart(_) => EventKind::TargetStart,
            Event::TargetEnd(_) => EventKind::TargetEnd,
            Event::ProjectUses(_) => EventKind::ProjectUses,
            Event::ProjectError(_) => EventKind::ProjectError,
            Event::FileStart(_) => EventKind::FileStart,
            Event::FileError(_) => EventKind::FileError,
            Event::FileEnd(_) => EventKind::FileEnd,
            Event::DirectiveStart(_) => EventKind::DirectiveStart,
            Event::DirectiveError(_) => EventKind::DirectiveError,
            Event::DirectiveEnd(_) => EventKind::DirectiveEnd,
            Event::CollectStart(_) => EventKind::CollectStart,
            Event::CollectError(_) => EventKind::CollectError,
            Event::CollectNode(_) => EventKind::CollectNode,
            Event::CollectEnd(_) => EventKind::CollectEnd,
            Event::DescribeStart(_) => EventKind::DescribeStart,
            Event::DescribeEnd(_) => EventKind::DescribeEnd,
            Event::TestStart(_) => EventKind::TestStart,
            Event::TestError(_) => EventKind::TestError,
            Event::TestFail(_) => EventKind::TestFail,
            Event::TestPass(_) => EventKind::TestPass,
            Event::TestSkip(_) => EventKind::TestSkip,
            Event::TestFixme(_) => EventKind::TestFixme,
            Event::TestTodo(_) => EventKind::TestTodo,
            Event::ExpectStart(_) => EventKind::ExpectStart,
            Event::ExpectError(_) => EventKind::ExpectError,
            Event::ExpectFail(_) => EventKind::ExpectFail,
            Event::ExpectPass(_) => EventKind::ExpectPass,
            Event::ExpectSkip(_) => EventKind::ExpectSkip,
            Event::ExpectFixme(_) => EventKind::ExpectFixme,
            Event::SuppressedStart(_) => EventKind::SuppressedStart,
            Event::SuppressedError(_) => EventKind::SuppressedError,
            Event::SuppressedMatch(_) => EventKind::SuppressedMatch,
            Event::SuppressedIgnore(_) => EventKind::SuppressedIgnore,
            Event::SuppressedEnd(_) => EventKind::SuppressedEnd,
            Event::WatchError(_) => EventKind::WatchError,
        }
    }

    /// Shorthand constructors used by tests and embedders
    pub fn project_uses(version: impl Into<String>) -> Self {
        Event::ProjectUses(ProjectUses {
            compiler_version: version.into(),
            project_config_file_path: None,
        })
    }

    pub fn describe_start(name: impl Into<String>) -> Self {
        Event::DescribeStart(DescribeStart {
            name: Some(name.into()),
        })
    }

    pub fn test_pass(name: impl Into<String>) -> Self {
        Event::TestPass(TestOutcome {
            name: Some(name.into()),
        })
    }

    pub fn test_fail(name: impl Into<String>) -> Self {
        Event::TestFail(TestOutcome {
            name: Some(name.into()),
        })
    }
}
