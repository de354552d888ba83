// Tests for the NDJSON event stream driver

use typestream::render::{CaptureBuffer, Printer, Sink};
use typestream::report::{CompactReporter, HierarchicalReporter};
use typestream::{ReporterError, run_stream};

const RUN: &str = concat!(
    r#"{"event": "run:start", "payload": {}}"#,
    "\n",
    r#"{"event": "project:uses", "payload": {"compilerVersion": "5.4.5", "#,
    r#""projectConfigFilePath": "./tsconfig.json"}}"#,
    "\n",
    r#"{"event": "file:start", "payload": {"file": "typetests/a.tst.ts"}}"#,
    "\n",
    r#"{"event": "describe:start", "payload": {"name": "toBeString"}}"#,
    "\n",
    r#"{"event": "test:start", "payload": {"name": "is string"}}"#,
    "\n",
    r#"{"event": "test:pass", "payload": {"name": "is string"}}"#,
    "\n",
    r#"{"event": "test:start", "payload": {"name": "is number"}}"#,
    "\n",
    r#"{"event": "expect:error", "payload": {"diagnostics": [{"#,
    r#""text": ["Type 'number' is not assignable", "to type 'string'."], "#,
    r#""code": 2322, "category": "error"}]}}"#,
    "\n",
    r#"{"event": "test:fail", "payload": {"name": "is number"}}"#,
    "\n",
    r#"{"event": "describe:end"}"#,
    "\n",
    r#"{"event": "file:end", "payload": {}}"#,
    "\n",
    r#"{"event": "run:end", "payload": {}}"#,
    "\n",
);

#[test]
fn test_run_stream_hierarchical() {
    // Arrange
    let buffer = CaptureBuffer::new();
    let mut reporter = HierarchicalReporter::new(Printer::terminal(false), Sink::captured(&buffer));

    // Act
    let dispatched = run_stream(RUN.as_bytes(), &mut reporter).expect("stream should succeed");

    // Assert
    assert_eq!(dispatched, 12);
    assert_eq!(
        buffer.lines(),
        vec![
            "uses TypeScript 5.4.5 with ./tsconfig.json",
            "toBeString",
            "  ✔ is string",
            "Type 'number' is not assignable (2322)",
            "to type 'string'. [error]",
            "",
            "  ✖ is number",
            "",
        ]
    );
}

#[test]
fn test_run_stream_compact_markdown() {
    // Arrange
    let buffer = CaptureBuffer::new();
    let mut reporter = CompactReporter::new(Printer::markdown(), Sink::captured(&buffer));

    // Act
    run_stream(RUN.as_bytes(), &mut reporter).expect("stream should succeed");

    // Assert
    assert_eq!(
        buffer.contents(),
        concat!(
            "# uses TypeScript 5.4.5 with ./tsconfig.json\n",
            "✅\n",
            "Type 'number' is not assignable (2322)\n",
            "to type 'string'. [error]\n",
            "\n",
            "❌\n",
            "\n\n",
        )
    );
}

#[test]
fn test_unknown_kind_halts_stream() {
    // Arrange
    let input = r#"{"event": "run:start"}
{"event": "test:pass", "payload": {"name": "a"}}
{"event": "test:retry", "payload": {"name": "a"}}
{"event": "test:pass", "payload": {"name": "b"}}
"#;
    let buffer = CaptureBuffer::new();
    let mut reporter = HierarchicalReporter::new(Printer::terminal(false), Sink::captured(&buffer));

    // Act
    let result = run_stream(input.as_bytes(), &mut reporter);

    // Assert
    match result {
        Err(ReporterError::UnknownEventKind { line, kind }) => {
            assert_eq!(line, 3);
            assert_eq!(kind, "test:retry");
        }
        other => panic!("expected unknown kind error, got {:?}", other),
    }
    assert_eq!(buffer.lines(), vec!["✔ a"]);
}

#[test]
fn test_malformed_line_halts_stream() {
    // Arrange
    let input = "{\"event\": \"run:start\"}\nnot json\n";
    let buffer = CaptureBuffer::new();
    let mut reporter = CompactReporter::new(Printer::terminal(false), Sink::captured(&buffer));

    // Act
    let result = run_stream(input.as_bytes(), &mut reporter);

    // Assert
    assert!(matches!(result, Err(ReporterError::Decode { line: 2, .. })));
}

#[test]
fn test_empty_stream() {
    // Arrange
    let buffer = CaptureBuffer::new();
    let mut reporter = CompactReporter::new(Printer::terminal(false), Sink::captured(&buffer));

    // Act
    let dispatched = run_stream("\n\n".as_bytes(), &mut reporter).unwrap();

    // Assert
    assert_eq!(dispatched, 0);
    assert_eq!(buffer.contents(), "");
}
