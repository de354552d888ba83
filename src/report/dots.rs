// Fixed-width line of one-character test marks

use std::io;

use tracing::trace;

use crate::render::Sink;

/// Marks per line before wrapping
pub const DOT_LINE_WIDTH: usize = 80;

/// Tracks the column of the unterminated line of marks.
///
/// Call [`DotBuffer::flush`] before writing anything else to the sink so
/// other output never starts in the middle of a line of marks.
#[derive(Debug, Clone)]
pub struct DotBuffer {
    column: usize,
    width: usize,
}

impl Default for DotBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl DotBuffer {
    pub fn new() -> Self {
        Self::with_width(DOT_LINE_WIDTH)
    }

    pub fn with_width(width: usize) -> Self {
        Self {
            column: 0,
            width: width.max(1),
        }
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn is_line_open(&self) -> bool {
        self.column > 0
    }

    /// Write one mark; terminates the line once it is full
    pub fn write(&mut self, sink: &mut Sink, mark: &str) -> io::Result<()> {
        sink.write(mark)?;
        self.column += 1;

        if self.column >= self.width {
            trace!(width = self.width, "wrapping dot line");
            sink.write("\n")?;
            self.column = 0;
        }

        Ok(())
    }

    /// Terminate the current line if it has any marks
    pub fn flush(&mut self, sink: &mut Sink) -> io::Result<()> {
        if self.column > 0 {
            sink.write("\n")?;
            self.column = 0;
        }
        Ok(())
    }

    /// Forget the column without writing (run start)
    pub fn reset(&mut self) {
        self.column = 0;
    }
}
