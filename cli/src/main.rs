//! CLI entrypoint for transcripty
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use transcripty_application::{ExportChatInput, ExportChatUseCase};
use transcripty_infrastructure::{ConfigLoader, LocalDocumentStore};
use transcripty_presentation::{Cli, ConsoleReporter};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("Failed to load configuration: {e}"))?
    };

    for issue in config.validate() {
        warn!("{}", issue);
    }

    if !config.output.color {
        colored::control::set_override(false);
    }

    // clap enforces the input unless --show-config was given
    let input_path = cli
        .input
        .clone()
        .context("An HTML file path is required")?;

    info!("Exporting chat log from {}", input_path.display());

    let settings = config
        .to_export_settings()
        .with_targets_override(cli.targets_override());
    let input =
        ExportChatInput::from_settings(input_path, &settings).with_base_path(cli.output.clone());

    // === Dependency Injection ===
    let use_case = ExportChatUseCase::new(Arc::new(LocalDocumentStore::new()));
    let reporter = ConsoleReporter::new().with_quiet(cli.quiet);

    let output = use_case.execute_with_progress(input, &reporter).await?;

    info!(
        "Wrote {} file(s) for {} chat entries",
        output.written.len(),
        output.entry_count
    );

    Ok(())
}
