//! Buteco-Mapa: scraper and geocoder for the Comida di Buteco listing
//!
//! This crate fetches the venue listing page, extracts one record per venue
//! item, resolves each address to coordinates through the Google Geocoding
//! API, and writes the aggregated dataset to CSV for the map frontend.

pub mod config;
pub mod geocode;
pub mod output;
pub mod scrape;
pub mod venue;

use thiserror::Error;

/// Main error type for Buteco-Mapa operations
#[derive(Debug, Error)]
pub enum ButecoError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Geocoding error: {0}")]
    Geocode(#[from] GeocodeError),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),

    #[error("GOOGLE_MAPS_API_KEY is not set; export it or add it to a .env file")]
    MissingApiKey,
}

/// Errors raised while fetching the listing page. One attempt per page, no
/// retries; the pipeline absorbs these into an empty page result.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP status {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("Request failed for {url}: {source}")]
    Request { url: String, source: reqwest::Error },
}

/// Errors raised by the geocoding service. The pipeline absorbs these per
/// record; the owning venue is retained without coordinates.
#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("Geocoding request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Geocoding service returned HTTP status {0}")]
    HttpStatus(u16),

    #[error("Geocoding service rejected the request: {0}")]
    Service(String),
}

/// Result type alias for Buteco-Mapa operations
pub type Result<T> = std::result::Result<T, ButecoError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use geocode::GeocodeClient;
pub use scrape::Pipeline;
pub use venue::{Coordinate, Venue, VenueDetails};
