//! CLI entrypoint for bigfive
//!
//! Wires the layers together: config loading, catalog source selection,
//! the questionnaire TUI, and the final score printout.

use anyhow::{anyhow, Context, Result};
use bigfive_application::LoadCatalogUseCase;
use bigfive_domain::{Assessment, Catalog};
use bigfive_infrastructure::{
    ConfigLoader, EmbeddedCatalogSource, FileOutputFormat, TomlCatalogSource,
};
use bigfive_presentation::{Cli, ConsoleFormatter, OutputFormat, TuiApp};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level; stderr keeps the
    // alternate screen clean
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

    info!("Starting bigfive");

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("failed to load configuration: {e}"))?
    };

    // Catalog load is the only fallible startup step: an unknown domain or
    // facet label is a configuration defect and aborts here
    let catalog_path = cli.catalog.clone().or_else(|| config.catalog.path.clone());
    let catalog: Catalog = match catalog_path {
        Some(path) => LoadCatalogUseCase::new(TomlCatalogSource::new(path))
            .execute()
            .context("failed to load item catalog")?,
        None => LoadCatalogUseCase::new(EmbeddedCatalogSource)
            .execute()
            .context("failed to load embedded item catalog")?,
    };

    let assessment = Assessment::new(catalog);
    let summary = TuiApp::new(assessment).run().await?;

    // The user only gets a printout if they finished the questionnaire
    if let Some(summary) = summary {
        let format = cli.output.unwrap_or(match config.output.format {
            FileOutputFormat::Full => OutputFormat::Full,
            FileOutputFormat::Domains => OutputFormat::Domains,
            FileOutputFormat::Json => OutputFormat::Json,
        });
        let output = match format {
            OutputFormat::Full => ConsoleFormatter::format(&summary),
            OutputFormat::Domains => ConsoleFormatter::format_domains_only(&summary),
            OutputFormat::Json => ConsoleFormatter::format_json(&summary),
        };
        println!("{output}");
    } else {
        info!("questionnaire abandoned before the result screen");
    }

    Ok(())
}
