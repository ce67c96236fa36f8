//! Output format value object

use serde::{Deserialize, Serialize};

/// Output format for directory listings and detail views
///
/// This is a domain concept representing how the output should be shaped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Full formatted output with all sections (default)
    Full,
    /// One line per country
    Compact,
    /// JSON output
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Full
    }
}
