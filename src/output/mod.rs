//! Output module
//!
//! Persists the scraped dataset as CSV for the map frontend. Not part of
//! the pipeline proper; the pipeline hands over a finished `Vec<Venue>`.

mod csv_output;

pub use csv_output::write_csv;

use thiserror::Error;

/// Errors that can occur while writing the dataset
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to write CSV output: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;
