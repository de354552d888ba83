// Diagnostic types reported by the type checker

use serde::{Deserialize, Deserializer, Serialize};

/// Message text of a diagnostic: a single line or an ordered list of lines
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DiagnosticText {
    Line(String),
    Lines(Vec<String>),
}

impl DiagnosticText {
    /// Normalize to an ordered sequence of lines
    pub fn lines(&self) -> Vec<&str> {
        match self {
            DiagnosticText::Line(line) => vec![line.as_str()],
            DiagnosticText::Lines(lines) => lines.iter().map(String::as_str).collect(),
        }
    }
}

impl Default for DiagnosticText {
    fn default() -> Self {
        DiagnosticText::Line(String::new())
    }
}

impl From<&str> for DiagnosticText {
    fn from(text: &str) -> Self {
        DiagnosticText::Line(text.to_string())
    }
}

impl From<String> for DiagnosticText {
    fn from(text: String) -> Self {
        DiagnosticText::Line(text)
    }
}

impl From<Vec<String>> for DiagnosticText {
    fn from(lines: Vec<String>) -> Self {
        DiagnosticText::Lines(lines)
    }
}

/// A producer-supplied error or warning record.
///
/// `related` entries are owned by their parent, so a diagnostic is always a
/// tree and rendering it terminates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    #[serde(default)]
    pub text: DiagnosticText,

    #[serde(
        default,
        deserialize_with = "deserialize_code",
        skip_serializing_if = "Option::is_none"
    )]
    pub code: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub related: Vec<Diagnostic>,
}

impl Diagnostic {
    pub fn new(text: impl Into<DiagnosticText>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_related(mut self, related: Diagnostic) -> Self {
        self.related.push(related);
        self
    }
}

/// Codes come either as identifiers (`"E1"`) or as bare numbers (`2322`)
fn deserialize_code<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Code {
        Number(i64),
        Text(String),
    }

    Ok(Option::<Code>::deserialize(deserializer)?.map(|code| match code {
        Code::Number(n) => n.to_string(),
        Code::Text(s) => s,
    }))
}
