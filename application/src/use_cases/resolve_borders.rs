//! Resolve Borders use case.
//!
//! Resolves a list of border codes into full country records through a
//! parallel fan-out against the source, one lookup per code.
//!
//! The fan-out is all-or-wait: every lookup is started at once and the
//! use case waits for the full set, so latency is bounded by the slowest
//! lookup rather than the sum. Failures stay per-code: one bad neighbor
//! never takes the others down.

use crate::ports::country_source::CountrySource;
use crate::ports::progress::{Phase, ProgressNotifier};
use atlas_domain::{BorderResolution, CountryCode};
use std::sync::Arc;
use tracing::{debug, warn};

/// Use case for resolving border codes into country records.
///
/// This operation cannot fail: lookups that come back empty are recorded
/// in [`BorderResolution::failed_codes`] and the rest resolve normally.
pub struct ResolveBordersUseCase {
    source: Arc<dyn CountrySource>,
}

impl ResolveBordersUseCase {
    pub fn new(source: Arc<dyn CountrySource>) -> Self {
        Self { source }
    }

    /// Resolve every code concurrently and wait for the full set.
    ///
    /// Results keep the order of the input codes regardless of which
    /// lookup settles first. An empty input resolves immediately without
    /// touching the source.
    pub async fn execute(
        &self,
        codes: &[CountryCode],
        progress: &dyn ProgressNotifier,
    ) -> BorderResolution {
        if codes.is_empty() {
            return BorderResolution::empty();
        }

        debug!("Resolving {} border codes", codes.len());
        progress.on_phase_start(Phase::Borders, codes.len());

        let lookups = codes.iter().map(|code| self.source.fetch_by_code(code));
        let outcomes = futures::future::join_all(lookups).await;

        let mut resolution = BorderResolution::empty();
        for (code, outcome) in codes.iter().zip(outcomes) {
            match outcome {
                Some(country) => {
                    progress.on_lookup_complete(Phase::Borders, code.as_str(), true);
                    resolution.resolved.push(country);
                }
                None => {
                    warn!("Border lookup for {} came back empty", code);
                    progress.on_lookup_complete(Phase::Borders, code.as_str(), false);
                    resolution.failed_codes.push(code.clone());
                }
            }
        }

        debug!(
            "Resolved {}/{} border codes",
            resolution.resolved.len(),
            resolution.total()
        );
        progress.on_phase_complete(Phase::Borders);
        resolution
    }
}
