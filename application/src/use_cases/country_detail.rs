//! Country Detail use case.
//!
//! Executes the detail flow: look up one country by code, then resolve
//! its border codes into full neighbor records via
//! [`ResolveBordersUseCase`](super::resolve_borders::ResolveBordersUseCase).

use crate::ports::country_source::CountrySource;
use crate::ports::progress::{Phase, ProgressNotifier};
use crate::use_cases::resolve_borders::ResolveBordersUseCase;
use atlas_domain::{BorderResolution, Country, CountryCode};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Errors that can occur while loading a detail view.
#[derive(Error, Debug)]
pub enum CountryDetailError {
    /// The code resolved to nothing. A terminal outcome rather than a
    /// fault: unknown codes and upstream refusals land here identically.
    #[error("No country found for code {0}")]
    NotFound(CountryCode),
}

/// Input for the [`CountryDetailUseCase`].
#[derive(Debug, Clone)]
pub struct CountryDetailInput {
    pub code: CountryCode,
}

impl CountryDetailInput {
    pub fn new(code: CountryCode) -> Self {
        Self { code }
    }
}

/// A country together with its resolved neighbors.
#[derive(Debug, Clone, Serialize)]
pub struct CountryDetailOutput {
    pub country: Country,
    pub borders: BorderResolution,
}

/// Use case for loading a single country in detail.
///
/// 1. Look up the requested code (soft: absence is `NotFound`)
/// 2. Fan out one lookup per border code
/// 3. Return the record and the border resolution together
pub struct CountryDetailUseCase {
    source: Arc<dyn CountrySource>,
    borders: ResolveBordersUseCase,
}

impl CountryDetailUseCase {
    pub fn new(source: Arc<dyn CountrySource>) -> Self {
        let borders = ResolveBordersUseCase::new(Arc::clone(&source));
        Self { source, borders }
    }

    /// Execute the detail flow with progress callbacks.
    pub async fn execute(
        &self,
        input: CountryDetailInput,
        progress: &dyn ProgressNotifier,
    ) -> Result<CountryDetailOutput, CountryDetailError> {
        info!("Loading country detail for {}", input.code);

        progress.on_phase_start(Phase::Detail, 1);
        let fetched = self.source.fetch_by_code(&input.code).await;
        progress.on_lookup_complete(Phase::Detail, input.code.as_str(), fetched.is_some());
        progress.on_phase_complete(Phase::Detail);

        let country = fetched.ok_or_else(|| CountryDetailError::NotFound(input.code.clone()))?;

        let borders = self.borders.execute(country.border_codes(), progress).await;

        info!(
            "Loaded {} with {}/{} borders resolved",
            country.name.common,
            borders.resolved.len(),
            borders.total()
        );

        Ok(CountryDetailOutput { country, borders })
    }
}
