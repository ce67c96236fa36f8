//! Browse Countries use case.
//!
//! Executes the browse flow: fetch the full collection, keep the records
//! matching the filter, and sort what remains by common name.
//!
//! Filtering and sorting are pure domain functions; this use case owns
//! the one fallible step (the collection fetch) and the order in which
//! the shaping runs.

use crate::ports::country_source::{CountrySource, SourceError};
use crate::ports::progress::{Phase, ProgressNotifier};
use atlas_domain::{Country, FilterQuery, filter_countries, sort_countries};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while browsing.
#[derive(Error, Debug)]
pub enum BrowseCountriesError {
    /// The collection fetch failed. Nothing can be rendered without it,
    /// so the error carries straight through to the caller.
    #[error("Country source unavailable: {0}")]
    SourceUnavailable(#[from] SourceError),
}

/// Input for the [`BrowseCountriesUseCase`].
#[derive(Debug, Clone, Default)]
pub struct BrowseCountriesInput {
    /// Search and region constraints; both axes must match.
    pub query: FilterQuery,
}

impl BrowseCountriesInput {
    pub fn new(query: FilterQuery) -> Self {
        Self { query }
    }

    /// Input that lists the whole directory.
    pub fn unconstrained() -> Self {
        Self::default()
    }
}

/// Use case for browsing the country directory.
///
/// 1. Fetch the full collection from the source
/// 2. Apply the filter (search AND region)
/// 3. Sort by common name, locale-aware and stable
pub struct BrowseCountriesUseCase {
    source: Arc<dyn CountrySource>,
}

impl BrowseCountriesUseCase {
    pub fn new(source: Arc<dyn CountrySource>) -> Self {
        Self { source }
    }

    /// Execute the browse flow with progress callbacks.
    pub async fn execute(
        &self,
        input: BrowseCountriesInput,
        progress: &dyn ProgressNotifier,
    ) -> Result<Vec<Country>, BrowseCountriesError> {
        info!(
            "Browsing countries (search: {:?}, region: {:?})",
            input.query.search(),
            input.query.region()
        );

        progress.on_phase_start(Phase::Collection, 1);
        let fetched = self.source.fetch_all().await;
        progress.on_lookup_complete(Phase::Collection, "all", fetched.is_ok());
        progress.on_phase_complete(Phase::Collection);

        let countries = fetched?;
        let fetched_count = countries.len();
        debug!("Fetched {} countries", fetched_count);

        let mut matched = filter_countries(countries, &input.query);
        sort_countries(&mut matched);

        info!("{} of {} countries match the filter", matched.len(), fetched_count);
        Ok(matched)
    }
}
