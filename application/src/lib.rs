//! Application layer for country-atlas
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    country_source::{CountrySource, SourceError},
    progress::{NoProgress, Phase, ProgressNotifier},
};
pub use use_cases::browse_countries::{
    BrowseCountriesError, BrowseCountriesInput, BrowseCountriesUseCase,
};
pub use use_cases::country_detail::{
    CountryDetailError, CountryDetailInput, CountryDetailOutput, CountryDetailUseCase,
};
pub use use_cases::resolve_borders::ResolveBordersUseCase;
