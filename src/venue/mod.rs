//! Data model for scraped venues
//!
//! A venue exists in the pipeline output iff both its name and address were
//! extracted; everything else is optional. Missing fields are `None`, never
//! sentinel text.

use serde::Serialize;

/// Fields extracted from one listing item, before geocoding.
#[derive(Debug, Clone, PartialEq)]
pub struct VenueDetails {
    pub name: String,
    pub address: String,
    pub image_url: Option<String>,
    pub details_url: Option<String>,
    pub map_url: Option<String>,
}

/// A latitude/longitude pair from a successful geocoding response.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// One row of the output dataset. Field order is the CSV column order the
/// map frontend expects.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Venue {
    pub name: String,
    pub address: String,
    pub image_url: Option<String>,
    pub details_url: Option<String>,
    pub map_url: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl Venue {
    /// Assembles the final record from the extracted fields and the geocode
    /// result. Built once; never mutated afterwards.
    pub fn from_details(details: VenueDetails, coordinate: Option<Coordinate>) -> Self {
        Self {
            name: details.name,
            address: details.address,
            image_url: details.image_url,
            details_url: details.details_url,
            map_url: details.map_url,
            latitude: coordinate.map(|c| c.latitude),
            longitude: coordinate.map(|c| c.longitude),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details() -> VenueDetails {
        VenueDetails {
            name: "Bar do Zé".to_string(),
            address: "Rua A, 123".to_string(),
            image_url: Some("https://example.com/foto.jpg".to_string()),
            details_url: None,
            map_url: None,
        }
    }

    #[test]
    fn test_from_details_with_coordinate() {
        let venue = Venue::from_details(
            details(),
            Some(Coordinate {
                latitude: -19.92,
                longitude: -43.93,
            }),
        );

        assert_eq!(venue.name, "Bar do Zé");
        assert_eq!(venue.latitude, Some(-19.92));
        assert_eq!(venue.longitude, Some(-43.93));
    }

    #[test]
    fn test_from_details_without_coordinate() {
        let venue = Venue::from_details(details(), None);

        assert_eq!(venue.address, "Rua A, 123");
        assert_eq!(venue.latitude, None);
        assert_eq!(venue.longitude, None);
    }
}
