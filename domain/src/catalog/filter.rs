//! Country filtering

use serde::{Deserialize, Serialize};

use crate::country::entities::Country;

/// Search and region constraints for a browse request (Value Object)
///
/// An empty string on either axis means that axis is unconstrained.
/// Both axes must match for a country to be kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterQuery {
    search: String,
    region: String,
}

impl FilterQuery {
    /// Create a query constraining both axes
    pub fn new(search: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            region: region.into(),
        }
    }

    /// Create a query that keeps every country
    pub fn unconstrained() -> Self {
        Self::default()
    }

    /// Get the free-text search term
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Get the exact-match region
    pub fn region(&self) -> &str {
        &self.region
    }

    /// True when neither axis constrains the collection
    pub fn is_unconstrained(&self) -> bool {
        self.search.is_empty() && self.region.is_empty()
    }

    /// Check whether a country satisfies both axes
    pub fn matches(&self, country: &Country) -> bool {
        self.matches_search(country) && self.matches_region(country)
    }

    /// Case-insensitive substring match against the common and official names
    pub fn matches_search(&self, country: &Country) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        country.name.common.to_lowercase().contains(&needle)
            || country.name.official.to_lowercase().contains(&needle)
    }

    /// Case-sensitive whole-string match against the region
    pub fn matches_region(&self, country: &Country) -> bool {
        self.region.is_empty() || country.region == self.region
    }
}

/// Keep the countries matching the query, preserving input order
pub fn filter_countries(countries: Vec<Country>, query: &FilterQuery) -> Vec<Country> {
    countries
        .into_iter()
        .filter(|country| query.matches(country))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn country(common: &str, official: &str, region: &str) -> Country {
        serde_json::from_value(json!({
            "name": { "common": common, "official": official },
            "cca3": "AAA",
            "region": region,
            "population": 1_000_000
        }))
        .unwrap()
    }

    fn sample_collection() -> Vec<Country> {
        vec![
            country("Germany", "Federal Republic of Germany", "Europe"),
            country("Ghana", "Republic of Ghana", "Africa"),
            country("Greece", "Hellenic Republic", "Europe"),
            country("Japan", "Japan", "Asia"),
            country("Fiji", "Republic of Fiji", "Oceania"),
        ]
    }

    #[test]
    fn test_unconstrained_query_is_identity() {
        let input = sample_collection();
        let output = filter_countries(input.clone(), &FilterQuery::unconstrained());
        assert_eq!(output, input);
    }

    #[test]
    fn test_search_matches_common_name_case_insensitively() {
        let output = filter_countries(sample_collection(), &FilterQuery::new("GERM", ""));
        assert_eq!(output.len(), 1);
        assert_eq!(output[0].name.common, "Germany");
    }

    #[test]
    fn test_search_matches_official_name() {
        // "hellenic" appears only in Greece's official name
        let output = filter_countries(sample_collection(), &FilterQuery::new("hellenic", ""));
        assert_eq!(output.len(), 1);
        assert_eq!(output[0].name.common, "Greece");
    }

    #[test]
    fn test_region_is_exact_match() {
        let output = filter_countries(sample_collection(), &FilterQuery::new("", "Europe"));
        let names: Vec<&str> = output.iter().map(|c| c.name.common.as_str()).collect();
        assert_eq!(names, ["Germany", "Greece"]);
    }

    #[test]
    fn test_region_match_is_case_sensitive() {
        let output = filter_countries(sample_collection(), &FilterQuery::new("", "europe"));
        assert!(output.is_empty());
    }

    #[test]
    fn test_both_axes_must_match() {
        // "g" alone matches Germany, Ghana and Greece; the region narrows
        // that down to the African entry only
        let output = filter_countries(sample_collection(), &FilterQuery::new("g", "Africa"));
        assert_eq!(output.len(), 1);
        assert_eq!(output[0].name.common, "Ghana");
    }

    #[test]
    fn test_search_without_hits_yields_empty() {
        let output = filter_countries(sample_collection(), &FilterQuery::new("atlantis", ""));
        assert!(output.is_empty());
    }

    #[test]
    fn test_filter_preserves_input_order() {
        let output = filter_countries(sample_collection(), &FilterQuery::new("republic", ""));
        let names: Vec<&str> = output.iter().map(|c| c.name.common.as_str()).collect();
        assert_eq!(names, ["Germany", "Ghana", "Greece", "Fiji"]);
    }
}
