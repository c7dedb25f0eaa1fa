use crate::venue::Coordinate;
use serde::Deserialize;

/// Top-level Google Geocoding API response.
///
/// Only the fields the pipeline consumes are modeled; everything else in the
/// provider's payload is ignored during deserialization.
#[derive(Debug, Deserialize)]
pub struct GeocodeResponse {
    /// Provider status string ("OK", "ZERO_RESULTS", "REQUEST_DENIED", ...)
    pub status: String,

    /// Ranked candidate list; only candidate 0 is ever used
    #[serde(default)]
    pub results: Vec<GeocodeCandidate>,

    /// Human-readable detail the provider attaches to non-OK statuses
    #[serde(default)]
    pub error_message: Option<String>,
}

/// One geocoding candidate
#[derive(Debug, Deserialize)]
pub struct GeocodeCandidate {
    pub geometry: Geometry,

    #[serde(default)]
    pub formatted_address: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Geometry {
    pub location: LatLng,
}

/// Coordinate pair as the provider spells it
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl From<LatLng> for Coordinate {
    fn from(value: LatLng) -> Self {
        Coordinate {
            latitude: value.lat,
            longitude: value.lng,
        }
    }
}
