//! Geocoding module
//!
//! Resolves free-text addresses to coordinates through the Google Geocoding
//! API. One synchronous-in-spirit call per record: no caching, no retries,
//! no rate limiting.

mod client;
mod types;

pub use client::{GeocodeClient, GOOGLE_GEOCODE_ENDPOINT};
pub use types::{GeocodeCandidate, GeocodeResponse, Geometry, LatLng};
