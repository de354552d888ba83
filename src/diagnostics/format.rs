// Plain-text rendering of diagnostic trees

use std::fmt;

use super::types::Diagnostic;

const RELATED_INDENT: &str = "  ";

/// Format a diagnostic and its related entries as display text.
///
/// The code goes after the first line, the category after the last one.
/// Related entries follow on their own lines, indented two spaces per level.
pub fn format_diagnostic(diagnostic: &Diagnostic) -> String {
    let mut lines: Vec<String> = diagnostic
        .text
        .lines()
        .into_iter()
        .map(str::to_string)
        .collect();

    if let (Some(code), Some(first)) = (&diagnostic.code, lines.first_mut()) {
        first.push_str(&format!(" ({})", code));
    }

    let mut output = lines.join("\n");

    if let Some(category) = &diagnostic.category {
        output.push_str(&format!(" [{}]", category));
    }

    for related in &diagnostic.related {
        output.push('\n');
        output.push_str(&indent_block(&format_diagnostic(related)));
    }

    output
}

fn indent_block(text: &str) -> String {
    text.split('\n')
        .map(|line| format!("{}{}", RELATED_INDENT, line))
        .collect::<Vec<_>>()
        .join("\n")
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_diagnostic(self))
    }
}
