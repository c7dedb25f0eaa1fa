//! Buteco-Mapa main entry point
//!
//! Command-line interface for the listing scraper: loads config and the
//! geocoding credential, runs the pipeline, and writes the CSV dataset.

use clap::Parser;
use std::path::{Path, PathBuf};

use buteco_mapa::config::{load_api_key, load_config_with_hash};
use buteco_mapa::geocode::GOOGLE_GEOCODE_ENDPOINT;
use buteco_mapa::output::write_csv;
use buteco_mapa::scrape::scrape;
use tracing_subscriber::EnvFilter;

/// Buteco-Mapa: scraper and geocoder for the Comida di Buteco listing
///
/// Fetches the venue listing page, extracts one record per venue, resolves
/// each address through the Google Geocoding API, and writes the dataset to
/// CSV for the map frontend.
#[derive(Parser, Debug)]
#[command(name = "buteco-mapa")]
#[command(version = "1.0.0")]
#[command(about = "Scrapes a venue listing and geocodes every address", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be scraped without fetching anything
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // A local .env file may carry the geocoding credential
    dotenvy::dotenv().ok();

    // Load and validate configuration
    tracing::info!("Loading configuration from: {}", cli.config.display());
    let (config, _config_hash) = match load_config_with_hash(&cli.config) {
        Ok((cfg, hash)) => {
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            (cfg, hash)
        }
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    // The credential is required before any pipeline activity; a missing
    // key aborts here, never mid-scrape
    let api_key = load_api_key()?;

    let venues = scrape(&config, &api_key).await?;
    write_csv(Path::new(&config.output.csv_path), &venues)?;

    tracing::info!(
        "Scrape finished: {} venues written to {}",
        venues.len(),
        config.output.csv_path
    );

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("buteco_mapa=info,warn"),
            1 => EnvFilter::new("buteco_mapa=debug,info"),
            2 => EnvFilter::new("buteco_mapa=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: validates config and shows the scrape plan
fn handle_dry_run(config: &buteco_mapa::Config) {
    println!("=== Buteco-Mapa Dry Run ===\n");

    println!("Listing:");
    println!("  URL: {}", config.listing.url);
    println!("  Request timeout: {}s", config.listing.request_timeout);

    println!("\nGeocoding:");
    println!("  Locality suffix: {}", config.geocode.locality_suffix);
    match &config.geocode.endpoint {
        Some(endpoint) => println!("  Endpoint: {}", endpoint),
        None => println!("  Endpoint: {} (default)", GOOGLE_GEOCODE_ENDPOINT),
    }

    println!("\nOutput:");
    println!("  CSV: {}", config.output.csv_path);

    println!("\n✓ Configuration is valid");
}
