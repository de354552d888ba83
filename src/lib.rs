pub mod cli;
pub mod commands;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod events;
pub mod logging;
pub mod render;
pub mod report;
pub mod state;
pub mod stream;

pub use diagnostics::{Diagnostic, format_diagnostic};
pub use error::{ReporterError, Result};
pub use events::{Event, EventKind};
pub use report::{EventHandler, dispatch};
pub use stream::run_stream;
