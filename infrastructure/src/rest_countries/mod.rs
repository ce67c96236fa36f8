//! REST Countries adapter
//!
//! HTTP implementation of the [`CountrySource`] port against the public
//! REST Countries v3.1 API.
//!
//! [`CountrySource`]: atlas_application::ports::country_source::CountrySource

mod error;
mod source;

pub use error::RestCountriesError;
pub use source::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, RestCountriesSource};
