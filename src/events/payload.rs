// Payload shapes carried by runner events

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::diagnostics::Diagnostic;

pub const DEFAULT_DESCRIBE_NAME: &str = "describe";
pub const DEFAULT_TEST_NAME: &str = "test";

/// Payload of kinds this crate does not interpret
pub type Opaque = Value;

/// The project switched to (or first reported) a compiler version
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectUses {
    #[serde(alias = "version", alias = "v")]
    pub compiler_version: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_config_file_path: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileStart {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescribeStart {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl DescribeStart {
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or(DEFAULT_DESCRIBE_NAME)
    }
}

/// Outcome of a single test, shared by `test:pass` and `test:fail`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestOutcome {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl TestOutcome {
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or(DEFAULT_TEST_NAME)
    }
}

/// Diagnostics attached to any error kind
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    #[serde(default)]
    pub diagnostics: Vec<Diagnostic>,
}
