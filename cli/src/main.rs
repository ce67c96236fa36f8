//! CLI entrypoint for Country Atlas
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use atlas_application::{
    BrowseCountriesInput, BrowseCountriesUseCase, CountryDetailError, CountryDetailInput,
    CountryDetailUseCase, NoProgress, ProgressNotifier,
};
use atlas_domain::{CountryCode, FilterQuery, OutputFormat};
use atlas_infrastructure::{ConfigLoader, RestCountriesSource};
use atlas_presentation::{Cli, ConsoleFormatter, ProgressReporter, SimpleProgress};
use clap::Parser;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode> {
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
        .init();

    info!("Starting Country Atlas");

    // Show config sources and exit
    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(ExitCode::SUCCESS);
    }

    // Load configuration
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };

    if !config.output.color {
        colored::control::set_override(false);
    }

    // CLI flag wins over the config file, config over the built-in default
    let format = cli
        .output
        .map(OutputFormat::from)
        .or(config.output.format)
        .unwrap_or_default();

    // === Dependency Injection ===
    // Create the infrastructure adapter (REST Countries source)
    let source = Arc::new(RestCountriesSource::with_base_url(
        &config.source.base_url,
        config.source.timeout(),
    )?);

    // Progress reporting: bars by default, plain lines under -v (bars and
    // log output fight over the terminal), none when quiet
    let show_progress = !cli.quiet && config.browse.show_progress;
    let progress: Box<dyn ProgressNotifier> = if !show_progress {
        Box::new(NoProgress)
    } else if cli.verbose > 0 {
        Box::new(SimpleProgress)
    } else {
        Box::new(ProgressReporter::new())
    };

    match cli.code {
        Some(raw_code) => {
            let code: CountryCode = raw_code
                .parse()
                .with_context(|| format!("'{raw_code}' is not a usable country code"))?;
            show_detail(source, code, format, progress.as_ref()).await
        }
        None => {
            let query = FilterQuery::new(cli.search, cli.region);
            browse(source, query, format, progress.as_ref()).await
        }
    }
}

/// Run the browse flow and print the listing.
async fn browse(
    source: Arc<RestCountriesSource>,
    query: FilterQuery,
    format: OutputFormat,
    progress: &dyn ProgressNotifier,
) -> Result<ExitCode> {
    let use_case = BrowseCountriesUseCase::new(source);
    let countries = use_case
        .execute(BrowseCountriesInput::new(query.clone()), progress)
        .await?;

    let output = match format {
        OutputFormat::Full => ConsoleFormatter::format_listing(&countries, &query),
        OutputFormat::Compact => ConsoleFormatter::format_listing_compact(&countries),
        OutputFormat::Json => ConsoleFormatter::format_listing_json(&countries),
    };
    println!("{}", output);

    Ok(ExitCode::SUCCESS)
}

/// Run the detail flow and print one country with its neighbors.
async fn show_detail(
    source: Arc<RestCountriesSource>,
    code: CountryCode,
    format: OutputFormat,
    progress: &dyn ProgressNotifier,
) -> Result<ExitCode> {
    let use_case = CountryDetailUseCase::new(source);

    match use_case.execute(CountryDetailInput::new(code), progress).await {
        Ok(detail) => {
            let output = match format {
                OutputFormat::Full => ConsoleFormatter::format_detail(&detail),
                OutputFormat::Compact => ConsoleFormatter::format_detail_compact(&detail),
                OutputFormat::Json => ConsoleFormatter::format_detail_json(&detail),
            };
            println!("{}", output);
            Ok(ExitCode::SUCCESS)
        }
        // Not-found is a terminal outcome, distinct from a fatal source error
        Err(CountryDetailError::NotFound(code)) => {
            println!("No country found for code {code}.");
            Ok(ExitCode::FAILURE)
        }
    }
}
