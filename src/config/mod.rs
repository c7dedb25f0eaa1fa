//! Configuration module for Buteco-Mapa
//!
//! Handles loading, parsing, and validating TOML configuration files, plus
//! the one-time geocoding credential lookup at process start.

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, GeocodeConfig, ListingConfig, OutputConfig};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};

use crate::ConfigError;

/// Environment variable carrying the Google Geocoding API key
pub const API_KEY_ENV: &str = "GOOGLE_MAPS_API_KEY";

/// Reads the geocoding credential from the environment.
///
/// Called once at startup, before any pipeline activity; a missing or empty
/// key is fatal, never a per-call error.
pub fn load_api_key() -> Result<String, ConfigError> {
    match std::env::var(API_KEY_ENV) {
        Ok(key) if !key.trim().is_empty() => Ok(key),
        _ => Err(ConfigError::MissingApiKey),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_api_key_roundtrip() {
        // Set and unset sequentially in one test; other tests never touch
        // this variable, so there is no cross-test interference.
        std::env::set_var(API_KEY_ENV, "test-key");
        assert_eq!(load_api_key().unwrap(), "test-key");

        std::env::set_var(API_KEY_ENV, "   ");
        assert!(matches!(load_api_key(), Err(ConfigError::MissingApiKey)));

        std::env::remove_var(API_KEY_ENV);
        assert!(matches!(load_api_key(), Err(ConfigError::MissingApiKey)));
    }
}
