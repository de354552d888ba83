// Main entry point for typestream

use anyhow::Result;
use clap::Parser;
use tracing::info;

use typestream::cli::Cli;
use typestream::commands;
use typestream::config::Config;
use typestream::logging;
use typestream::render::detect_ci;

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose);

    if cli.verbose {
        info!("Starting typestream v{}", env!("CARGO_PKG_VERSION"));
    }

    // Neither command reads the configuration, so a broken file cannot block them
    if let Some(path) = &cli.init_config {
        return commands::handle_init_config(path);
    }

    if let Some(shell_type) = &cli.completion {
        return commands::handle_completion(shell_type);
    }

    if cli.config {
        commands::handle_show_config(&Config::load());
        return Ok(());
    }

    let output_config = Config::load_or_default(&Config::search_paths()).output;
    let settings = cli.output_settings(&output_config, console::colors_enabled())?;
    let ci_detected = detect_ci(|name| std::env::var(name).ok());

    commands::run_report(cli.input.as_deref(), settings, ci_detected)
}
