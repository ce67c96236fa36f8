//! Output formatter trait

use atlas_application::CountryDetailOutput;
use atlas_domain::{Country, FilterQuery};

/// Trait for formatting directory output
pub trait OutputFormatter {
    /// Format the browse listing with all sections
    fn format_listing(&self, countries: &[Country], query: &FilterQuery) -> String;

    /// Format the browse listing, one line per country
    fn format_listing_compact(&self, countries: &[Country]) -> String;

    /// Format the browse listing as JSON
    fn format_listing_json(&self, countries: &[Country]) -> String;

    /// Format a detail view with all sections
    fn format_detail(&self, detail: &CountryDetailOutput) -> String;

    /// Format a detail view as a few compact lines
    fn format_detail_compact(&self, detail: &CountryDetailOutput) -> String;

    /// Format a detail view as JSON
    fn format_detail_json(&self, detail: &CountryDetailOutput) -> String;
}
