// Event stream - lazy NDJSON decoding and the dispatch loop

use std::io::BufRead;

use serde_json::{Map, Value};
use tracing::{debug, error};

use crate::error::{ReporterError, Result};
use crate::events::{Event, EventKind};
use crate::report::{EventHandler, dispatch};

/// Decode one line of the stream.
///
/// A kind outside the known set is reported as
/// [`ReporterError::UnknownEventKind`] rather than a generic decode error.
/// A missing or null payload is read as `{}`.
pub fn decode_event(line: &str, line_number: usize) -> Result<Event> {
    let decode_error = |source: serde_json::Error| ReporterError::Decode {
        line: line_number,
        source,
    };

    let mut value: Value = serde_json::from_str(line).map_err(decode_error)?;

    let Some(object) = value.as_object_mut() else {
        return Err(decode_error(serde::de::Error::custom(
            "event must be a JSON object",
        )));
    };

    let kind = match object.get("event") {
        Some(Value::String(kind)) => kind,
        _ => return Err(decode_error(serde::de::Error::missing_field("event"))),
    };

    if kind.parse::<EventKind>().is_err() {
        return Err(ReporterError::UnknownEventKind {
            line: line_number,
            kind: kind.clone(),
        });
    }

    let payload = object.entry("payload").or_insert(Value::Null);
    if payload.is_null() {
        *payload = Value::Object(Map::new());
    }

    serde_json::from_value(value).map_err(decode_error)
}

/// Iterator over the events of a newline-delimited JSON stream.
///
/// Reads one line at a time; blank lines are skipped.
pub struct EventReader<R> {
    reader: R,
    line_number: usize,
    buffer: String,
}

impl<R: BufRead> EventReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_number: 0,
            buffer: String::new(),
        }
    }

    /// Line number of the most recently read line (1-based)
    pub fn line_number(&self) -> usize {
        self.line_number
    }
}

impl<R: BufRead> Iterator for EventReader<R> {
    type Item = Result<Event>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.buffer.clear();
            match self.reader.read_line(&mut self.buffer) {
                Ok(0) => return None,
                Ok(_) => {
                    self.line_number += 1;
                    let line = self.buffer.trim();
                    if line.is_empty() {
                        continue;
                    }
                    return Some(decode_event(line, self.line_number));
                }
                Err(e) => return Some(Err(ReporterError::Io(e))),
            }
        }
    }
}

/// Feed every event of `reader` to `handler`, in order.
///
/// Stops at the first failure; an unknown kind means producer and consumer
/// disagree on the protocol and nothing after it can be trusted.
/// Returns the number of events dispatched.
pub fn run_stream<R, H>(reader: R, handler: &mut H) -> Result<usize>
where
    R: BufRead,
    H: EventHandler + ?Sized,
{
    let mut dispatched = 0;

    for event in EventReader::new(reader) {
        let event = event.inspect_err(|e| error!("halting event stream: {}", e))?;
        dispatch(handler, &event)?;
        dispatched += 1;
    }

    debug!(dispatched, "event stream finished");
    Ok(dispatched)
}
