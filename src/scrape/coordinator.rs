//! Pipeline coordinator
//!
//! Drives fetch, extraction, and geocoding for one listing page and
//! aggregates the retained venues in document order. All failure handling
//! policy lives here: a failed fetch empties the page, a rejected item or a
//! failed geocode call only affects its own record.

use reqwest::Client;

use crate::geocode::GeocodeClient;
use crate::scrape::extractor::extract_venues;
use crate::scrape::fetcher::fetch_page;
use crate::venue::Venue;

/// Scrape pipeline for listing pages.
///
/// Both clients are explicit dependencies so tests can point them at mock
/// servers. The pipeline keeps no state between runs; each [`Pipeline::run`]
/// is independent.
pub struct Pipeline {
    client: Client,
    geocoder: GeocodeClient,
    locality_suffix: String,
}

impl Pipeline {
    pub fn new(
        client: Client,
        geocoder: GeocodeClient,
        locality_suffix: impl Into<String>,
    ) -> Self {
        Self {
            client,
            geocoder,
            locality_suffix: locality_suffix.into(),
        }
    }

    /// Scrapes one listing page.
    ///
    /// Returns the retained venues in the order their items appear in the
    /// document. A venue is retained iff its name and address extracted;
    /// geocoding failure leaves the coordinates absent but keeps the record.
    /// A failed page fetch yields an empty vector, never an error.
    pub async fn run(&self, url: &str) -> Vec<Venue> {
        let body = match fetch_page(&self.client, url).await {
            Ok(body) => body,
            Err(e) => {
                tracing::error!("Failed to fetch listing page {}: {}", url, e);
                return Vec::new();
            }
        };

        let mut venues = Vec::new();
        for (index, outcome) in extract_venues(&body).into_iter().enumerate() {
            let details = match outcome {
                Ok(details) => details,
                Err(rejection) => {
                    tracing::warn!("Skipping item {}: {}", index, rejection);
                    continue;
                }
            };

            // Geocode calls run one at a time, in document order
            let query = format!("{}, {}", details.address, self.locality_suffix);
            let coordinate = match self.geocoder.resolve(&query).await {
                Ok(Some(coordinate)) => Some(coordinate),
                Ok(None) => {
                    tracing::warn!("No geocoding match for address: {}", query);
                    None
                }
                Err(e) => {
                    tracing::error!("Failed to geocode address {}: {}", query, e);
                    None
                }
            };

            venues.push(Venue::from_details(details, coordinate));
        }

        tracing::info!("{} venues retained from {}", venues.len(), url);
        venues
    }
}
