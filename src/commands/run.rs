// Run command - render an event stream

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::info;

use crate::cli::OutputSettings;
use crate::render::{Printer, Sink};
use crate::report::build_reporter;
use crate::stream::run_stream;

/// Render events from `input` (stdin when `None`) to stdout/stderr
pub fn run_report(input: Option<&Path>, settings: OutputSettings, ci_detected: bool) -> Result<()> {
    let markdown = settings.markdown.resolve(ci_detected);
    info!(
        reporter = settings.reporter.as_str(),
        markdown,
        color = settings.color,
        "rendering event stream"
    );

    let printer = Printer::new(markdown, settings.color);
    let mut reporter = build_reporter(settings.reporter, printer, Sink::stdio());

    let reader: Box<dyn BufRead> = match input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("failed to open {}", path.display()))?,
        )),
        None => Box::new(io::stdin().lock()),
    };

    let dispatched = run_stream(reader, reporter.as_mut()).context("event stream aborted")?;
    info!(dispatched, "done");

    Ok(())
}
