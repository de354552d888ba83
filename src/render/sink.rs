// Output sink - progress stream plus error stream, flushed on every write

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

/// Where reporters write. Lines are flushed immediately and never reordered.
pub struct Sink {
    out: Box<dyn Write>,
    err: Box<dyn Write>,
}

impl Sink {
    pub fn new(out: impl Write + 'static, err: impl Write + 'static) -> Self {
        Self {
            out: Box::new(out),
            err: Box::new(err),
        }
    }

    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }

    /// Both streams go to the same buffer, preserving interleaving
    pub fn captured(buffer: &CaptureBuffer) -> Self {
        Self::new(buffer.clone(), buffer.clone())
    }

    /// Write to the progress stream without a line terminator
    pub fn write(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes())?;
        self.out.flush()
    }

    pub fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", text)?;
        self.out.flush()
    }

    pub fn blank_line(&mut self) -> io::Result<()> {
        self.line("")
    }

    pub fn error_line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.err, "{}", text)?;
        self.err.flush()
    }
}

/// Cloneable in-memory writer for capturing rendered output
#[derive(Debug, Clone, Default)]
pub struct CaptureBuffer {
    bytes: Rc<RefCell<Vec<u8>>>,
}

impl CaptureBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.bytes.borrow()).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }
}

impl Write for CaptureBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
