// Configuration file handling

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::error::{ReporterError, Result};
use crate::report::ReporterKind;

pub const CONFIG_FILE_NAME: &str = ".typestreamrc.toml";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// Reporter style (hierarchical, dots)
    #[serde(default = "default_reporter")]
    pub reporter: String,

    /// Enable colored output in terminal mode
    #[serde(default = "default_color")]
    pub color: bool,

    /// Force markdown (true) or terminal (false) output; unset means detect CI
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub markdown: Option<bool>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            reporter: default_reporter(),
            color: default_color(),
            markdown: None,
        }
    }
}

fn default_reporter() -> String {
    ReporterKind::default().as_str().to_string()
}

fn default_color() -> bool {
    true
}

impl OutputConfig {
    pub fn reporter_kind(&self) -> Result<ReporterKind> {
        self.reporter.parse().map_err(ReporterError::Config)
    }
}

impl Config {
    /// Candidate locations, in lookup order
    pub fn search_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Ok(cwd) = std::env::current_dir() {
            paths.push(cwd.join(CONFIG_FILE_NAME));
        }
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(CONFIG_FILE_NAME));
        }
        paths
    }

    /// Load the first configuration file found in the default locations
    pub fn load() -> Result<Option<(Self, PathBuf)>> {
        Self::load_first(&Self::search_paths())
    }

    /// Load the first existing file of `paths`, if any
    pub fn load_first(paths: &[PathBuf]) -> Result<Option<(Self, PathBuf)>> {
        for path in paths {
            if path.exists() {
                let config = Self::load_from_file(path)?;
                return Ok(Some((config, path.clone())));
            }
        }
        Ok(None)
    }

    /// Like [`Config::load_first`], but an unreadable or invalid file is
    /// logged and replaced by the defaults
    pub fn load_or_default(paths: &[PathBuf]) -> Self {
        match Self::load_first(paths) {
            Ok(Some((config, _))) => config,
            Ok(None) => Self::default(),
            Err(e) => {
                warn!("ignoring configuration file: {}", e);
                Self::default()
            }
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
            .map_err(|e| ReporterError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Parse configuration from TOML string
    pub fn parse(content: &str) -> std::result::Result<Self, String> {
        let config: Self = toml::from_str(content).map_err(|e| e.to_string())?;
        config.output.reporter_kind().map_err(|e| e.to_string())?;
        Ok(config)
    }

    /// Generate configuration as TOML
    pub fn to_toml(&self) -> String {
        toml::to_string_pretty(self).unwrap_or_default()
    }
}
