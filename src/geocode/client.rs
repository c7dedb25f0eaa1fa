//! Geocoding client
//!
//! Thin wrapper over the Google Geocoding API. The client is an explicit
//! value constructed by the caller and passed into the pipeline, so tests
//! can point it at a mock server through `with_endpoint`.

use reqwest::Client;

use crate::geocode::types::GeocodeResponse;
use crate::venue::Coordinate;
use crate::GeocodeError;

/// Production geocoding endpoint
pub const GOOGLE_GEOCODE_ENDPOINT: &str = "https://maps.googleapis.com/maps/api/geocode/json";

/// Handle to the geocoding service
#[derive(Debug, Clone)]
pub struct GeocodeClient {
    http: Client,
    api_key: String,
    endpoint: String,
}

impl GeocodeClient {
    /// Creates a client against the Google endpoint
    pub fn new(http: Client, api_key: impl Into<String>) -> Self {
        Self::with_endpoint(http, api_key, GOOGLE_GEOCODE_ENDPOINT)
    }

    /// Creates a client against an arbitrary endpoint (tests, staging)
    pub fn with_endpoint(
        http: Client,
        api_key: impl Into<String>,
        endpoint: impl Into<String>,
    ) -> Self {
        Self {
            http,
            api_key: api_key.into(),
            endpoint: endpoint.into(),
        }
    }

    /// Resolves a free-text address to a coordinate pair.
    ///
    /// The caller passes the address exactly as it should be queried (the
    /// locality suffix is already appended). Only the first candidate the
    /// provider returns is used.
    ///
    /// * `Ok(Some(_))` - at least one candidate; candidate 0's location
    /// * `Ok(None)` - the provider had no match for the address
    /// * `Err(_)` - transport failure, non-2xx response, or a non-OK
    ///   provider status such as REQUEST_DENIED
    pub async fn resolve(&self, address: &str) -> Result<Option<Coordinate>, GeocodeError> {
        let response = self
            .http
            .get(&self.endpoint)
            .query(&[("address", address), ("key", self.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GeocodeError::HttpStatus(status.as_u16()));
        }

        let body: GeocodeResponse = response.json().await?;
        match body.status.as_str() {
            "OK" => match body.results.into_iter().next() {
                Some(candidate) => {
                    let coordinate = Coordinate::from(candidate.geometry.location);
                    tracing::debug!(
                        "Geocoded '{}' -> lat {}, lng {}",
                        address,
                        coordinate.latitude,
                        coordinate.longitude
                    );
                    Ok(Some(coordinate))
                }
                None => Ok(None),
            },
            "ZERO_RESULTS" => Ok(None),
            other => {
                let mut reason = other.to_string();
                if let Some(message) = body.error_message {
                    reason = format!("{}: {}", reason, message);
                }
                Err(GeocodeError::Service(reason))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn ok_body() -> serde_json::Value {
        serde_json::json!({
            "status": "OK",
            "results": [
                {
                    "formatted_address": "Rua A, 123 - Centro, Belo Horizonte - MG",
                    "geometry": { "location": { "lat": -19.92, "lng": -43.93 } }
                },
                {
                    "geometry": { "location": { "lat": 1.0, "lng": 2.0 } }
                }
            ]
        })
    }

    fn test_client(server: &MockServer) -> GeocodeClient {
        GeocodeClient::with_endpoint(
            Client::new(),
            "test-key",
            format!("{}/geocode", server.uri()),
        )
    }

    #[tokio::test]
    async fn test_resolve_uses_first_candidate_only() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/geocode"))
            .and(query_param("address", "Rua A, 123, Belo Horizonte, MG"))
            .and(query_param("key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(ok_body()))
            .mount(&server)
            .await;

        let geocoder = test_client(&server);
        let coordinate = geocoder
            .resolve("Rua A, 123, Belo Horizonte, MG")
            .await
            .unwrap()
            .unwrap();

        assert_eq!(coordinate.latitude, -19.92);
        assert_eq!(coordinate.longitude, -43.93);
    }

    #[tokio::test]
    async fn test_resolve_zero_results_is_absent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/geocode"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "status": "ZERO_RESULTS",
                "results": []
            })))
            .mount(&server)
            .await;

        let geocoder = test_client(&server);
        let result = geocoder.resolve("Rua Inexistente, 0").await.unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_resolve_denied_is_service_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/geocode"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "status": "REQUEST_DENIED",
                "results": [],
                "error_message": "The provided API key is invalid."
            })))
            .mount(&server)
            .await;

        let geocoder = test_client(&server);
        let err = geocoder.resolve("Rua A, 123").await.unwrap_err();

        match err {
            GeocodeError::Service(reason) => {
                assert!(reason.contains("REQUEST_DENIED"));
                assert!(reason.contains("invalid"));
            }
            other => panic!("expected Service error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_resolve_http_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/geocode"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let geocoder = test_client(&server);
        let err = geocoder.resolve("Rua A, 123").await.unwrap_err();

        assert!(matches!(err, GeocodeError::HttpStatus(500)));
    }
}
