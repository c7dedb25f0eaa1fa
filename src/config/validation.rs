use crate::config::types::{Config, GeocodeConfig, ListingConfig, OutputConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_listing_config(&config.listing)?;
    validate_geocode_config(&config.geocode)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates listing configuration
fn validate_listing_config(config: &ListingConfig) -> Result<(), ConfigError> {
    validate_http_url("listing.url", &config.url)?;

    if config.request_timeout < 1 || config.request_timeout > 300 {
        return Err(ConfigError::Validation(format!(
            "listing.request-timeout must be between 1 and 300 seconds, got {}",
            config.request_timeout
        )));
    }

    Ok(())
}

/// Validates geocoding configuration
fn validate_geocode_config(config: &GeocodeConfig) -> Result<(), ConfigError> {
    if config.locality_suffix.trim().is_empty() {
        return Err(ConfigError::Validation(
            "geocode.locality-suffix must not be empty".to_string(),
        ));
    }

    if let Some(endpoint) = &config.endpoint {
        validate_http_url("geocode.endpoint", endpoint)?;
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.csv_path.trim().is_empty() {
        return Err(ConfigError::Validation(
            "output.csv-path must not be empty".to_string(),
        ));
    }

    Ok(())
}

/// Checks that a config value parses as an http(s) URL
fn validate_http_url(field: &str, value: &str) -> Result<(), ConfigError> {
    match Url::parse(value) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => Ok(()),
        Ok(url) => Err(ConfigError::InvalidUrl(format!(
            "{} must use http or https, got scheme '{}'",
            field,
            url.scheme()
        ))),
        Err(e) => Err(ConfigError::InvalidUrl(format!("{}: {}", field, e))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> Config {
        Config {
            listing: ListingConfig {
                url: "https://comidadibuteco.com.br/butecos/belo-horizonte/".to_string(),
                request_timeout: 10,
            },
            geocode: GeocodeConfig {
                locality_suffix: "Belo Horizonte, MG".to_string(),
                endpoint: None,
            },
            output: OutputConfig {
                csv_path: "./data/butecos.csv".to_string(),
            },
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(validate(&valid_config()).is_ok());
    }

    #[test]
    fn test_rejects_non_http_listing_url() {
        let mut config = valid_config();
        config.listing.url = "ftp://example.com/listing".to_string();

        let result = validate(&config);
        assert!(matches!(result, Err(ConfigError::InvalidUrl(_))));
    }

    #[test]
    fn test_rejects_unparseable_listing_url() {
        let mut config = valid_config();
        config.listing.url = "not a url".to_string();

        assert!(matches!(validate(&config), Err(ConfigError::InvalidUrl(_))));
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let mut config = valid_config();
        config.listing.request_timeout = 0;

        assert!(matches!(validate(&config), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_rejects_excessive_timeout() {
        let mut config = valid_config();
        config.listing.request_timeout = 301;

        assert!(matches!(validate(&config), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_rejects_empty_locality_suffix() {
        let mut config = valid_config();
        config.geocode.locality_suffix = "   ".to_string();

        assert!(matches!(validate(&config), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_rejects_bad_geocode_endpoint() {
        let mut config = valid_config();
        config.geocode.endpoint = Some("not-a-url".to_string());

        assert!(matches!(validate(&config), Err(ConfigError::InvalidUrl(_))));
    }

    #[test]
    fn test_accepts_http_geocode_endpoint() {
        let mut config = valid_config();
        config.geocode.endpoint = Some("http://127.0.0.1:9099/geocode".to_string());

        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_rejects_empty_csv_path() {
        let mut config = valid_config();
        config.output.csv_path = String::new();

        assert!(matches!(validate(&config), Err(ConfigError::Validation(_))));
    }
}
