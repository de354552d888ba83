// Commands module - handles CLI command execution

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub mod run;

pub use run::run_report;

use crate::config::{self, Config};

/// Handle shell completion
pub fn handle_completion(shell_type: &str) -> Result<()> {
    use clap::CommandFactory;
    use clap_complete::{Shell, generate};

    let shell = match shell_type.to_lowercase().as_str() {
        "bash" => Shell::Bash,
        "zsh" => Shell::Zsh,
        "fish" => Shell::Fish,
        "elvish" => Shell::Elvish,
        "powershell" => Shell::PowerShell,
        _ => {
            anyhow::bail!(
                "Unsupported shell: {}. Supported: bash, zsh, fish, elvish, powershell",
                shell_type
            );
        }
    };

    let mut cmd = crate::cli::Cli::command();
    let name = cmd.get_name().to_string();
    let mut stdout = std::io::stdout();

    generate(shell, &mut cmd, name, &mut stdout);

    Ok(())
}

/// Print the configuration in effect
pub fn handle_show_config(loaded: &crate::Result<Option<(Config, PathBuf)>>) {
    println!("Current configuration:");
    match loaded {
        Ok(Some((cfg, path))) => {
            println!("\n  Configuration file loaded: {}", path.display());
            println!("    Reporter: {}", cfg.output.reporter);
            println!(
                "    Color: {}",
                if cfg.output.color { "enabled" } else { "disabled" }
            );
            match cfg.output.markdown {
                Some(true) => println!("    Markdown: forced on"),
                Some(false) => println!("    Markdown: forced off"),
                None => println!("    Markdown: auto (CI detection)"),
            }
        }
        Ok(None) => {
            println!("\n  No configuration file loaded");
            println!(
                "  Create one with: typestream --init-config {}",
                config::CONFIG_FILE_NAME
            );
        }
        Err(e) => {
            println!("\n  Configuration file rejected, using defaults");
            println!("    {}", e);
        }
    }

    println!("\nConfiguration precedence:");
    println!("  1. Command-line arguments (highest)");
    println!("  2. Configuration file");
    println!("  3. CI detection and built-in defaults (lowest)");
}

/// Write the default configuration to `path`
pub fn handle_init_config(path: &Path) -> Result<()> {
    let toml_content = Config::default().to_toml();
    std::fs::write(path, toml_content)
        .with_context(|| format!("failed to write {}", path.display()))?;
    println!("Configuration file created: {}", path.display());
    println!("\nYou can now edit the file to customize your settings.");
    Ok(())
}
