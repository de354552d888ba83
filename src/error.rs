// Error types for the event pipeline

use thiserror::Error;

/// Errors raised while decoding or rendering an event stream.
///
/// Producer-reported diagnostics are not errors here: they arrive as regular
/// events and are rendered. Everything in this enum halts the stream.
#[derive(Debug, Error)]
pub enum ReporterError {
    #[error("failed to write report output: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed event on line {line}: {source}")]
    Decode {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("unknown event kind '{kind}' on line {line}")]
    UnknownEventKind { line: usize, kind: String },

    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ReporterError>;
