// Closed set of event kinds emitted by the test runner

use std::fmt;
use std::str::FromStr;

/// Every event kind the runner can emit, by its `noun:verb` wire name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    RunStart,
    RunEnd,
    StoreAdds,
    StoreError,
    TargetStart,
    TargetEnd,
    ProjectUses,
    ProjectError,
    FileStart,
    FileError,
    FileEnd,
    DirectiveStart,
    DirectiveError,
    DirectiveEnd,
    CollectStart,
    CollectError,
    CollectNode,
    CollectEnd,
    DescribeStart,
    DescribeEnd,
    TestStart,
    TestError,
    TestFail,
    TestPass,
    TestSkip,
    TestFixme,
    TestTodo,
    ExpectStart,
    ExpectError,
    ExpectFail,
    ExpectPass,
    ExpectSkip,
    ExpectFixme,
    SuppressedStart,
    SuppressedError,
    SuppressedMatch,
    SuppressedIgnore,
    SuppressedEnd,
    WatchError,
}

impl EventKind {
    pub const ALL: [EventKind; 39] = [
        EventKind::RunStart,
        EventKind::RunEnd,
        EventKind::StoreAdds,
        EventKind::StoreError,
        EventKind::TargetStart,
        EventKind::TargetEnd,
        EventKind::ProjectUses,
        EventKind::ProjectError,
        EventKind::FileStart,
        EventKind::FileError,
        EventKind::FileEnd,
        EventKind::DirectiveStart,
        EventKind::DirectiveError,
        EventKind::DirectiveEnd,
        EventKind::CollectStart,
        EventKind::CollectError,
        EventKind::CollectNode,
        EventKind::CollectEnd,
        EventKind::DescribeStart,
        EventKind::DescribeEnd,
        EventKind::TestStart,
        EventKind::TestError,
        EventKind::TestFail,
        EventKind::TestPass,
        EventKind::TestSkip,
        EventKind::TestFixme,
        EventKind::TestTodo,
        EventKind::ExpectStart,
        EventKind::ExpectError,
        EventKind::ExpectFail,
        EventKind::ExpectPass,
        EventKind::ExpectSkip,
        EventKind::ExpectFixme,
        EventKind::SuppressedStart,
        EventKind::SuppressedError,
        EventKind::SuppressedMatch,
        EventKind::SuppressedIgnore,
        EventKind::SuppressedEnd,
        EventKind::WatchError,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::RunStart => "run:start",
            EventKind::RunEnd => "run:end",
            EventKind::StoreAdds => "store:adds",
            EventKind::StoreError => "store:error",
            EventKind::TargetStart => "target:start",
            EventKind::TargetEnd => "target:end",
            EventKind::ProjectUses => "project:uses",
            EventKind::ProjectError => "project:error",
            EventKind::FileStart => "file:start",
            EventKind::FileError => "file:error",
            EventKind::FileEnd => "file:end",
            EventKind::DirectiveStart => "directive:start",
            EventKind::DirectiveError => "directive:error",
            EventKind::DirectiveEnd => "directive:end",
            EventKind::CollectStart => "collect:start",
            EventKind::CollectError => "collect:error",
            EventKind::CollectNode => "collect:node",
            EventKind::CollectEnd => "collect:end",
            EventKind::DescribeStart => "describe:start",
            EventKind::DescribeEnd => "describe:end",
            EventKind::TestStart => "test:start",
            EventKind::TestError => "test:error",
            EventKind::TestFail => "test:fail",
            EventKind::TestPass => "test:pass",
            EventKind::TestSkip => "test:skip",
            EventKind::TestFixme => "test:fixme",
            EventKind::TestTodo => "test:todo",
            EventKind::ExpectStart => "expect:start",
            EventKind::ExpectError => "expect:error",
            EventKind::ExpectFail => "expect:fail",
            EventKind::ExpectPass => "expect:pass",
            EventKind::ExpectSkip => "expect:skip",
            EventKind::ExpectFixme => "expect:fixme",
            EventKind::SuppressedStart => "suppressed:start",
            EventKind::SuppressedError => "suppressed:error",
            EventKind::SuppressedMatch => "suppressed:match",
            EventKind::SuppressedIgnore => "suppressed:ignore",
            EventKind::SuppressedEnd => "suppressed:end",
            EventKind::WatchError => "watch:error",
        }
    }

    /// Whether events of this kind carry producer diagnostics
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            EventKind::StoreError
                | EventKind::ProjectError
                | EventKind::FileError
                | EventKind::DirectiveError
                | EventKind::CollectError
                | EventKind::TestError
                | EventKind::ExpectError
                | EventKind::SuppressedError
                | EventKind::WatchError
        )
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}
