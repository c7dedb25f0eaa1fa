use serde::Deserialize;

/// Main configuration structure for Buteco-Mapa
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub listing: ListingConfig,
    pub geocode: GeocodeConfig,
    pub output: OutputConfig,
}

/// Listing page configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ListingConfig {
    /// URL of the listing page to scrape
    pub url: String,

    /// Per-request timeout in seconds
    #[serde(rename = "request-timeout", default = "default_request_timeout")]
    pub request_timeout: u64,
}

fn default_request_timeout() -> u64 {
    10
}

/// Geocoding configuration
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeConfig {
    /// Suffix appended to every address before the geocode query, to
    /// disambiguate within the metropolitan area (e.g. "Belo Horizonte, MG")
    #[serde(rename = "locality-suffix")]
    pub locality_suffix: String,

    /// Override for the geocoding endpoint; defaults to the Google API
    #[serde(default)]
    pub endpoint: Option<String>,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path to the CSV dataset consumed by the map frontend
    #[serde(rename = "csv-path")]
    pub csv_path: String,
}
