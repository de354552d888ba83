// Render module - dual-mode text primitive (terminal or markdown)
// Reporters only talk to the terminal through `Printer`

pub mod sink;

pub use sink::{CaptureBuffer, Sink};

use console::Style;

const INDENT_UNIT: &str = "  ";

/// Environment variables whose presence marks a CI job
const CI_MARKERS: &[&str] = &[
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "BUILDKITE",
    "TF_BUILD",
    "JENKINS_URL",
];

/// Requested output mode: forced on, forced off, or left to CI detection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarkdownSetting {
    Enabled,
    Disabled,
    #[default]
    Auto,
}

impl MarkdownSetting {
    pub fn from_flag(flag: Option<bool>) -> Self {
        match flag {
            Some(true) => MarkdownSetting::Enabled,
            Some(false) => MarkdownSetting::Disabled,
            None => MarkdownSetting::Auto,
        }
    }

    /// Resolve to a concrete choice; `ci_detected` only matters for `Auto`
    pub fn resolve(self, ci_detected: bool) -> bool {
        match self {
            MarkdownSetting::Enabled => true,
            MarkdownSetting::Disabled => false,
            MarkdownSetting::Auto => ci_detected,
        }
    }
}

/// Detect a CI environment through an injected variable lookup
pub fn detect_ci<F>(lookup: F) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(value) = lookup("CI") {
        let value = value.trim().to_ascii_lowercase();
        if !value.is_empty() && value != "false" && value != "0" {
            return true;
        }
    }

    CI_MARKERS.iter().any(|name| lookup(name).is_some())
}

/// Pass/fail marks for the active mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogSymbols {
    pub success: &'static str,
    pub error: &'static str,
}

const CLI_SYMBOLS: LogSymbols = LogSymbols {
    success: "✔",
    error: "✖",
};

const MARKDOWN_SYMBOLS: LogSymbols = LogSymbols {
    success: "✅",
    error: "❌",
};

/// ANSI colorizer, only present in colored terminal mode.
///
/// Styles are forced on: whether the terminal supports color is decided once
/// by the caller and passed to [`Printer::new`].
#[derive(Debug, Clone)]
pub struct Colorizer {
    gray: Style,
    red: Style,
    bold: Style,
    underline: Style,
}

impl Colorizer {
    fn new() -> Self {
        Self {
            gray: Style::new().black().bright().force_styling(true),
            red: Style::new().red().force_styling(true),
            bold: Style::new().bold().force_styling(true),
            underline: Style::new().bold().underlined().force_styling(true),
        }
    }

    pub fn gray(&self, text: &str) -> String {
        self.gray.apply_to(text).to_string()
    }

    pub fn red(&self, text: &str) -> String {
        self.red.apply_to(text).to_string()
    }

    pub fn bold(&self, text: &str) -> String {
        self.bold.apply_to(text).to_string()
    }

    fn underline(&self, text: &str) -> String {
        self.underline.apply_to(text).to_string()
    }
}

/// Text rendering primitive shared by all reporters.
///
/// Markdown mode never colors and never indents test lines, since leading
/// whitespace would turn them into a code block. Color and whitespace safety
/// are separate flags: a terminal without color still gets indentation.
#[derive(Debug, Clone)]
pub struct Printer {
    markdown: bool,
    colorizer: Option<Colorizer>,
}

impl Printer {
    /// `color` must already account for the output stream's capabilities
    pub fn new(markdown: bool, color: bool) -> Self {
        Self {
            markdown,
            colorizer: (color && !markdown).then(Colorizer::new),
        }
    }

    pub fn markdown() -> Self {
        Self::new(true, false)
    }

    pub fn terminal(color: bool) -> Self {
        Self::new(false, color)
    }

    /// Leading whitespace must not be emitted
    pub fn whitespace_safe(&self) -> bool {
        self.markdown
    }

    pub fn colorizer(&self) -> Option<&Colorizer> {
        self.colorizer.as_ref()
    }

    pub fn symbols(&self) -> &LogSymbols {
        if self.markdown {
            &MARKDOWN_SYMBOLS
        } else {
            &CLI_SYMBOLS
        }
    }

    /// Heading text; level 1 is the largest
    pub fn header(&self, text: &str, level: usize) -> String {
        let level = level.max(1);
        if self.markdown {
            return format!("{} {}", "#".repeat(level), text);
        }

        match (&self.colorizer, level) {
            (Some(colorizer), 1) => colorizer.underline(text),
            (Some(colorizer), 2) => colorizer.bold(text),
            _ => text.to_string(),
        }
    }

    /// Prefix every line of `text` with `depth` indentation units
    pub fn indent(&self, text: &str, depth: usize) -> String {
        if depth == 0 {
            return text.to_string();
        }

        let prefix = INDENT_UNIT.repeat(depth);
        text.split('\n')
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_markdown_setting_resolution() {
        assert!(MarkdownSetting::Enabled.resolve(false));
        assert!(!MarkdownSetting::Disabled.resolve(true));
        assert!(MarkdownSetting::Auto.resolve(true));
        assert!(!MarkdownSetting::Auto.resolve(false));
    }

    #[test]
    fn test_markdown_setting_from_flag() {
        assert_eq!(MarkdownSetting::from_flag(Some(true)), MarkdownSetting::Enabled);
        assert_eq!(MarkdownSetting::from_flag(Some(false)), MarkdownSetting::Disabled);
        assert_eq!(MarkdownSetting::from_flag(None), MarkdownSetting::Auto);
    }

    #[test]
    fn test_detect_ci() {
        assert!(detect_ci(env(&[("CI", "true")])));
        assert!(detect_ci(env(&[("GITHUB_ACTIONS", "true")])));
        assert!(!detect_ci(env(&[("CI", "false")])));
        assert!(!detect_ci(env(&[("CI", "")])));
        assert!(!detect_ci(env(&[])));
    }

    #[test]
    fn test_markdown_header_levels() {
        let printer = Printer::markdown();
        assert_eq!(printer.header("A", 2), "## A");
        assert_eq!(printer.header("B", 3), "### B");
        assert_eq!(printer.header("C", 0), "# C");
    }

    #[test]
    fn test_plain_terminal_header_is_unstyled() {
        let printer = Printer::terminal(false);
        assert_eq!(printer.header("A", 2), "A");
    }

    #[test]
    fn test_colored_header_contains_text() {
        let printer = Printer::terminal(true);
        let header = printer.header("A", 2);
        assert!(header.contains('A'));
        assert!(header.contains("\u{1b}["));
    }

    #[test]
    fn test_markdown_has_no_colorizer() {
        assert!(Printer::new(true, true).colorizer().is_none());
        assert!(Printer::terminal(true).colorizer().is_some());
        assert!(Printer::terminal(false).colorizer().is_none());
    }

    #[test]
    fn test_indent_every_line() {
        let printer = Printer::terminal(false);
        assert_eq!(printer.indent("a\nb", 2), "    a\n    b");
        assert_eq!(printer.indent("a", 0), "a");
    }

    #[test]
    fn test_symbols_per_mode() {
        assert_eq!(Printer::terminal(false).symbols().success, "✔");
        assert_eq!(Printer::markdown().symbols().error, "❌");
    }
}
