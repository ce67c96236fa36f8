//! Infrastructure layer for country-atlas
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod rest_countries;

// Re-export commonly used types
pub use config::{ConfigLoader, FileBrowseConfig, FileConfig, FileOutputConfig, FileSourceConfig};
pub use rest_countries::{
    DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, RestCountriesError, RestCountriesSource,
};
