//! Border resolution results

use serde::{Deserialize, Serialize};

use crate::country::code::CountryCode;
use crate::country::entities::Country;

/// Outcome of resolving a list of border codes into full records
///
/// Failed lookups are kept next to the resolved records instead of being
/// silently dropped, so a caller can tell "no land borders" apart from
/// "every lookup failed" and render the gap.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BorderResolution {
    /// Neighbor records that resolved, in requested-code order
    pub resolved: Vec<Country>,
    /// Codes whose lookup returned nothing, in requested-code order
    pub failed_codes: Vec<CountryCode>,
}

impl BorderResolution {
    /// Create a resolution from its parts
    pub fn new(resolved: Vec<Country>, failed_codes: Vec<CountryCode>) -> Self {
        Self {
            resolved,
            failed_codes,
        }
    }

    /// Create the resolution of an empty code list
    pub fn empty() -> Self {
        Self::default()
    }

    /// True when every requested code resolved
    pub fn is_complete(&self) -> bool {
        self.failed_codes.is_empty()
    }

    /// True when nothing was requested or nothing came back
    pub fn is_empty(&self) -> bool {
        self.resolved.is_empty() && self.failed_codes.is_empty()
    }

    /// Number of lookups this resolution accounts for
    pub fn total(&self) -> usize {
        self.resolved.len() + self.failed_codes.len()
    }
}
