//! Error types for the REST Countries adapter

use thiserror::Error;

/// Errors raised while constructing the REST Countries adapter
///
/// Request-time failures never surface through this type: collection
/// fetches map onto the source port's error and single lookups resolve
/// to an absent record.
#[derive(Error, Debug)]
pub enum RestCountriesError {
    #[error("Invalid base URL: {0}")]
    BaseUrl(String),

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),
}
