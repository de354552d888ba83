// Tests for event routing - every kind reaches exactly one handler slot

use serde_json::json;
use typestream::events::{
    DescribeStart, ErrorReport, Event, EventKind, FileStart, ProjectUses, TestOutcome,
};
use typestream::report::{EventHandler, dispatch};
use typestream::Result;

#[derive(Default)]
struct RecordingHandler {
    calls: Vec<String>,
}

impl EventHandler for RecordingHandler {
    fn on_run_start(&mut self) -> Result<()> {
        self.calls.push("run_start".to_string());
        Ok(())
    }

    fn on_project_uses(&mut self, payload: &ProjectUses) -> Result<()> {
        self.calls
            .push(format!("project_uses:{}", payload.compiler_version));
        Ok(())
    }

    fn on_file_start(&mut self, _payload: &FileStart) -> Result<()> {
        self.calls.push("file_start".to_string());
        Ok(())
    }

    fn on_describe_start(&mut self, payload: &DescribeStart) -> Result<()> {
        self.calls.push(format!("describe_start:{}", payload.name()));
        Ok(())
    }

    fn on_describe_end(&mut self) -> Result<()> {
        self.calls.push("describe_end".to_string());
        Ok(())
    }

    fn on_test_pass(&mut self, payload: &TestOutcome) -> Result<()> {
        self.calls.push(format!("test_pass:{}", payload.name()));
        Ok(())
    }

    fn on_test_fail(&mut self, payload: &TestOutcome) -> Result<()> {
        self.calls.push(format!("test_fail:{}", payload.name()));
        Ok(())
    }

    fn on_run_end(&mut self) -> Result<()> {
        self.calls.push("run_end".to_string());
        Ok(())
    }

    fn on_error(&mut self, kind: EventKind, report: &ErrorReport) -> Result<()> {
        self.calls
            .push(format!("error:{}:{}", kind, report.diagnostics.len()));
        Ok(())
    }
}

/// Overrides the default no-op to observe which kinds fall through
#[derive(Default)]
struct CatchAllHandler {
    inner: RecordingHandler,
    unimplemented: Vec<EventKind>,
}

impl EventHandler for CatchAllHandler {
    fn on_run_start(&mut self) -> Result<()> {
        self.inner.on_run_start()
    }

    fn on_project_uses(&mut self, payload: &ProjectUses) -> Result<()> {
        self.inner.on_project_uses(payload)
    }

    fn on_file_start(&mut self, payload: &FileStart) -> Result<()> {
        self.inner.on_file_start(payload)
    }

    fn on_describe_start(&mut self, payload: &DescribeStart) -> Result<()> {
        self.inner.on_describe_start(payload)
    }

    fn on_describe_end(&mut self) -> Result<()> {
        self.inner.on_describe_end()
    }

    fn on_test_pass(&mut self, payload: &TestOutcome) -> Result<()> {
        self.inner.on_test_pass(payload)
    }

    fn on_test_fail(&mut self, payload: &TestOutcome) -> Result<()> {
        self.inner.on_test_fail(payload)
    }

    fn on_run_end(&mut self) -> Result<()> {
        self.inner.on_run_end()
    }

    fn on_error(&mut self, kind: EventKind, report: &ErrorReport) -> Result<()> {
        self.inner.on_error(kind, report)
    }

    fn on_unimplemented(&mut self, event: &Event) -> Result<()> {
        self.unimplemented.push(event.kind());
        Ok(())
    }
}

fn event_of(kind: EventKind) -> Event {
    let payload = if kind == EventKind::ProjectUses {
        json!({"compilerVersion": "5.4"})
    } else {
        json!({})
    };
    serde_json::from_value(json!({"event": kind.as_str(), "payload": payload}))
        .expect("event should deserialize")
}

#[test]
fn test_lifecycle_kinds_route_to_dedicated_slots() {
    // Arrange
    let mut handler = RecordingHandler::default();
    let events = vec![
        event_of(EventKind::RunStart),
        Event::project_uses("5.4"),
        event_of(EventKind::FileStart),
        Event::describe_start("A"),
        Event::test_pass("x"),
        Event::test_fail("y"),
        event_of(EventKind::DescribeEnd),
        event_of(EventKind::RunEnd),
    ];

    // Act
    for event in &events {
        dispatch(&mut handler, event).unwrap();
    }

    // Assert
    assert_eq!(
        handler.calls,
        vec![
            "run_start",
            "project_uses:5.4",
            "file_start",
            "describe_start:A",
            "test_pass:x",
            "test_fail:y",
            "describe_end",
            "run_end",
        ]
    );
}

#[test]
fn test_error_kinds_route_to_error_slot() {
    // Arrange
    let mut handler = RecordingHandler::default();
    let error_kinds: Vec<EventKind> = EventKind::ALL
        .iter()
        .copied()
        .filter(EventKind::is_error)
        .collect();

    // Act
    for kind in &error_kinds {
        dispatch(&mut handler, &event_of(*kind)).unwrap();
    }

    // Assert
    let expected: Vec<String> = error_kinds
        .iter()
        .map(|kind| format!("error:{}:0", kind))
        .collect();
    assert_eq!(handler.calls, expected);
    assert!(handler.calls.iter().any(|c| c == "error:watch:error:0"));
    assert!(handler.calls.iter().any(|c| c == "error:store:error:0"));
}

#[test]
fn test_remaining_kinds_are_ignored_by_default() {
    // Arrange
    let mut handler = RecordingHandler::default();

    // Act
    for kind in [
        EventKind::TestStart,
        EventKind::TestSkip,
        EventKind::ExpectPass,
        EventKind::CollectNode,
        EventKind::SuppressedEnd,
    ] {
        dispatch(&mut handler, &event_of(kind)).unwrap();
    }

    // Assert
    assert!(handler.calls.is_empty());
}

#[test]
fn test_every_kind_reaches_exactly_one_slot() {
    // Arrange
    let mut handler = CatchAllHandler::default();

    // Act
    for kind in EventKind::ALL {
        dispatch(&mut handler, &event_of(kind)).unwrap();
    }

    // Assert
    let handled = handler.inner.calls.len() + handler.unimplemented.len();
    assert_eq!(handled, EventKind::ALL.len());
    assert_eq!(handler.inner.calls.len(), 8 + 9);
    assert_eq!(handler.unimplemented.len(), 22);
    assert!(handler.unimplemented.contains(&EventKind::StoreAdds));
    assert!(!handler.unimplemented.contains(&EventKind::TestFail));
}

#[test]
fn test_dispatch_through_trait_object() {
    // Arrange
    let mut handler: Box<dyn EventHandler> = Box::new(RecordingHandler::default());

    // Act
    let result = dispatch(handler.as_mut(), &Event::test_pass("x"));

    // Assert
    assert!(result.is_ok());
}
