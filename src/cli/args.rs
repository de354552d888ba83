// CLI argument definitions using Clap

use clap::Parser;
use std::path::PathBuf;

use crate::config::OutputConfig;
use crate::error::{ReporterError, Result};
use crate::render::MarkdownSetting;
use crate::report::ReporterKind;

/// Render type-test runner events as progress output
#[derive(Parser, Debug)]
#[command(name = "typestream")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(
    about = "Render a stream of type-test events as terminal or markdown progress",
    long_about = None
)]
pub struct Cli {
    /// Newline-delimited JSON events to read (defaults to stdin)
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Reporter style (hierarchical, dots)
    #[arg(short = 'r', long, value_name = "STYLE")]
    pub reporter: Option<String>,

    /// Force markdown output, as used for CI logs
    #[arg(long, conflicts_with = "no_markdown")]
    pub markdown: bool,

    /// Force terminal output even when running in CI
    #[arg(long)]
    pub no_markdown: bool,

    /// Disable colored output
    #[arg(short = 'c', long, default_value_t = false)]
    pub no_color: bool,

    /// Enable verbose debug output
    #[arg(short = 'v', long, default_value_t = false)]
    pub verbose: bool,

    /// Show current configuration and exit
    #[arg(long, default_value_t = false)]
    pub config: bool,

    /// Create default configuration file
    #[arg(long, value_name = "CONFIG_FILE")]
    pub init_config: Option<PathBuf>,

    /// Install shell completion (bash, zsh, fish, elvish, powershell)
    #[arg(
        long,
        value_name = "SHELL_TYPE",
        value_parser = ["bash", "zsh", "fish", "elvish", "powershell"]
    )]
    pub completion: Option<String>,
}

/// Output settings after merging flags over the configuration file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputSettings {
    pub reporter: ReporterKind,
    pub markdown: MarkdownSetting,
    pub color: bool,
}

impl Cli {
    /// Tri-state markdown flag; `None` when neither flag was given
    pub fn markdown_flag(&self) -> Option<bool> {
        match (self.markdown, self.no_markdown) {
            (true, _) => Some(true),
            (false, true) => Some(false),
            (false, false) => None,
        }
    }

    /// Merge flags over the configuration file; flags win.
    ///
    /// `colors_supported` is the output stream's capability (TTY, `NO_COLOR`,
    /// `CLICOLOR_FORCE`); color is only enabled when it holds.
    pub fn output_settings(
        &self,
        config: &OutputConfig,
        colors_supported: bool,
    ) -> Result<OutputSettings> {
        let reporter = match &self.reporter {
            Some(name) => name.parse().map_err(ReporterError::Config)?,
            None => config.reporter_kind()?,
        };

        Ok(OutputSettings {
            reporter,
            markdown: MarkdownSetting::from_flag(self.markdown_flag().or(config.markdown)),
            color: config.color && !self.no_color && colors_supported,
        })
    }
}
