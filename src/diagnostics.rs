// Diagnostic records reported by the test runner and their text rendering

pub mod format;
pub mod types;

pub use format::format_diagnostic;
pub use types::*;
