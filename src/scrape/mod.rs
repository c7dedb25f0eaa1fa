//! Scrape module: fetch, extract, geocode, aggregate
//!
//! This module contains the extraction-and-geocoding pipeline:
//! - HTTP fetching of the listing page
//! - Per-item record extraction with the name/address validity gate
//! - Per-record geocoding through the injected client
//! - Order-preserving aggregation into the output dataset

mod coordinator;
mod extractor;
mod fetcher;

pub use coordinator::Pipeline;
pub use extractor::{extract_item, extract_venues, ItemRejection};
pub use fetcher::{build_http_client, fetch_page, BROWSER_USER_AGENT};

use std::time::Duration;

use crate::config::Config;
use crate::geocode::GeocodeClient;
use crate::venue::Venue;

/// Runs a complete scrape of the configured listing page
///
/// Wires the HTTP client, the geocoding client (honoring the optional
/// endpoint override), and the pipeline, then returns the retained venues.
///
/// # Arguments
///
/// * `config` - The scraper configuration
/// * `api_key` - The geocoding credential loaded at startup
pub async fn scrape(config: &Config, api_key: &str) -> crate::Result<Vec<Venue>> {
    let client = build_http_client(Duration::from_secs(config.listing.request_timeout))?;

    let geocoder = match &config.geocode.endpoint {
        Some(endpoint) => GeocodeClient::with_endpoint(client.clone(), api_key, endpoint.as_str()),
        None => GeocodeClient::new(client.clone(), api_key),
    };

    let pipeline = Pipeline::new(client, geocoder, config.geocode.locality_suffix.clone());
    Ok(pipeline.run(&config.listing.url).await)
}
