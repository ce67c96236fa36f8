//! Console output formatter for the country directory

use crate::output::formatter::OutputFormatter;
use atlas_application::CountryDetailOutput;
use atlas_domain::{Country, Currency, FilterQuery};
use colored::Colorize;
use std::collections::BTreeMap;

/// Formats listings and detail views for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the browse listing with headers and one block per country
    pub fn format_listing(countries: &[Country], query: &FilterQuery) -> String {
        let mut output = String::new();

        // Header
        output.push_str(&Self::header("Countries of the World"));
        output.push('\n');

        // Active filters
        if !query.search().is_empty() {
            output.push_str(&format!("{} {}\n", "Search:".cyan().bold(), query.search()));
        }
        if !query.region().is_empty() {
            output.push_str(&format!("{} {}\n", "Region:".cyan().bold(), query.region()));
        }

        if countries.is_empty() {
            output.push_str("\nNo countries match the current filters.\n");
            output.push_str(&Self::footer());
            return output;
        }

        for country in countries {
            output.push_str(&format!(
                "\n{} {}\n",
                country.name.common.yellow().bold(),
                format!("[{}]", country.cca3).dimmed()
            ));
            output.push_str(&Self::field("Region", &country.region));
            output.push_str(&Self::field(
                "Population",
                &Self::format_population(country.population),
            ));
            if let Some(flag) = &country.flags.png {
                output.push_str(&Self::field("Flag", flag));
            }
        }

        output.push_str(&format!(
            "\n{} {}\n",
            countries.len().to_string().bold(),
            if countries.len() == 1 {
                "country"
            } else {
                "countries"
            }
        ));
        output.push_str(&Self::footer());

        output
    }

    /// Format the browse listing, one line per country
    pub fn format_listing_compact(countries: &[Country]) -> String {
        if countries.is_empty() {
            return "No countries match the current filters.\n".to_string();
        }

        let mut output = String::new();
        for country in countries {
            output.push_str(&format!(
                "{:<4} {:<36} {:<12} {:>14}\n",
                country.cca3.as_str(),
                country.name.common,
                country.region,
                Self::format_population(country.population)
            ));
        }
        output
    }

    /// Format the browse listing as JSON
    pub fn format_listing_json(countries: &[Country]) -> String {
        serde_json::to_string_pretty(countries).unwrap_or_else(|_| "[]".to_string())
    }

    /// Format a detail view with all sections
    pub fn format_detail(detail: &CountryDetailOutput) -> String {
        let country = &detail.country;
        let mut output = String::new();

        // Header
        output.push_str(&Self::header(&country.name.common));
        output.push('\n');
        output.push_str(&format!("{}\n", country.name.official.dimmed()));

        // Basic information
        output.push_str(&Self::section_header("Basic Information"));
        output.push_str(&Self::field("Code", country.cca3.as_str()));
        output.push_str(&Self::field("Native name", country.native_official_name()));
        output.push_str(&Self::field("Region", &country.region));
        if let Some(subregion) = &country.subregion {
            output.push_str(&Self::field("Subregion", subregion));
        }
        if let Some(capital) = &country.capital {
            output.push_str(&Self::field("Capital", &capital.join(", ")));
        }

        // Demographics
        output.push_str(&Self::section_header("Demographics"));
        output.push_str(&Self::field(
            "Population",
            &Self::format_population(country.population),
        ));
        if let Some(area) = country.area {
            output.push_str(&Self::field("Area", &Self::format_area(area)));
        }

        // Cultural information
        output.push_str(&Self::section_header("Cultural Information"));
        output.push_str(&Self::field(
            "Languages",
            &Self::format_languages(country.languages.as_ref()),
        ));
        output.push_str(&Self::field(
            "Currencies",
            &Self::format_currencies(country.currencies.as_ref()),
        ));
        if let Some(timezones) = &country.timezones {
            output.push_str(&Self::field("Timezones", &timezones.join(", ")));
        }

        // Imagery
        if country.flags.png.is_some() || country.coat_of_arms.png.is_some() {
            output.push_str(&Self::section_header("Imagery"));
            if let Some(flag) = &country.flags.png {
                output.push_str(&Self::field("Flag", flag));
            }
            if let Some(coat_of_arms) = &country.coat_of_arms.png {
                output.push_str(&Self::field("Coat of arms", coat_of_arms));
            }
        }

        // Border countries
        output.push_str(&Self::section_header("Border Countries"));
        if detail.borders.is_empty() {
            output.push_str("No land borders.\n");
        } else {
            for neighbor in &detail.borders.resolved {
                output.push_str(&format!(
                    "  {} {}\n",
                    neighbor.name.common,
                    format!("[{}]", neighbor.cca3).dimmed()
                ));
            }
            if !detail.borders.is_complete() {
                output.push_str(&format!(
                    "  {} {}\n",
                    "Unresolved:".yellow().bold(),
                    Self::join_codes(&detail.borders.failed_codes)
                ));
            }
        }

        output.push_str(&Self::footer());

        output
    }

    /// Format a detail view as a few compact lines
    pub fn format_detail_compact(detail: &CountryDetailOutput) -> String {
        let country = &detail.country;
        let mut output = String::new();

        output.push_str(&format!(
            "{} [{}]  {}  {}\n",
            country.name.common,
            country.cca3,
            country.region,
            Self::format_population(country.population)
        ));

        if detail.borders.is_empty() {
            output.push_str("Borders: none\n");
        } else {
            let neighbors: Vec<&str> = detail
                .borders
                .resolved
                .iter()
                .map(|c| c.name.common.as_str())
                .collect();
            output.push_str(&format!("Borders: {}", neighbors.join(", ")));
            if !detail.borders.is_complete() {
                output.push_str(&format!(
                    " (unresolved: {})",
                    Self::join_codes(&detail.borders.failed_codes)
                ));
            }
            output.push('\n');
        }

        output
    }

    /// Format a detail view as JSON
    pub fn format_detail_json(detail: &CountryDetailOutput) -> String {
        serde_json::to_string_pretty(detail).unwrap_or_else(|_| "{}".to_string())
    }

    /// Render a population count with thousands separators
    pub fn format_population(population: u64) -> String {
        let digits = population.to_string();
        let mut output = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                output.push(',');
            }
            output.push(ch);
        }
        output
    }

    /// Render an area in square kilometers
    pub fn format_area(area: f64) -> String {
        if area.fract() == 0.0 {
            format!("{} km²", Self::format_population(area as u64))
        } else {
            format!("{area} km²")
        }
    }

    /// Render the language list, or a placeholder when none are published
    pub fn format_languages(languages: Option<&BTreeMap<String, String>>) -> String {
        match languages {
            Some(map) if !map.is_empty() => {
                map.values().cloned().collect::<Vec<_>>().join(", ")
            }
            _ => "No official languages".to_string(),
        }
    }

    /// Render the currency list, or a placeholder when none are published
    pub fn format_currencies(currencies: Option<&BTreeMap<String, Currency>>) -> String {
        match currencies {
            Some(map) if !map.is_empty() => map
                .values()
                .map(|currency| match &currency.symbol {
                    Some(symbol) => format!("{} ({})", currency.name, symbol),
                    None => currency.name.clone(),
                })
                .collect::<Vec<_>>()
                .join(", "),
            _ => "No official currency".to_string(),
        }
    }

    fn join_codes(codes: &[atlas_domain::CountryCode]) -> String {
        codes
            .iter()
            .map(|code| code.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn header(title: &str) -> String {
        // Center before colorizing, escape codes would throw the width off
        let line = "=".repeat(60);
        let centered = format!("{title:^60}");
        format!("{}\n{}\n{}", line.cyan(), centered.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    fn field(label: &str, value: &str) -> String {
        format!("  {} {}\n", format!("{:<12}", format!("{label}:")).cyan(), value)
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_listing(&self, countries: &[Country], query: &FilterQuery) -> String {
        Self::format_listing(countries, query)
    }

    fn format_listing_compact(&self, countries: &[Country]) -> String {
        Self::format_listing_compact(countries)
    }

    fn format_listing_json(&self, countries: &[Country]) -> String {
        Self::format_listing_json(countries)
    }

    fn format_detail(&self, detail: &CountryDetailOutput) -> String {
        Self::format_detail(detail)
    }

    fn format_detail_compact(&self, detail: &CountryDetailOutput) -> String {
        Self::format_detail_compact(detail)
    }

    fn format_detail_json(&self, detail: &CountryDetailOutput) -> String {
        Self::format_detail_json(detail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atlas_domain::BorderResolution;
    use serde_json::json;

    fn country(common: &str, cca3: &str, region: &str) -> Country {
        serde_json::from_value(json!({
            "name": { "common": common, "official": common },
            "cca3": cca3,
            "region": region,
            "population": 83_240_525
        }))
        .unwrap()
    }

    fn detail_with_borders(resolved: Vec<Country>, failed: &[&str]) -> CountryDetailOutput {
        CountryDetailOutput {
            country: country("Germany", "DEU", "Europe"),
            borders: BorderResolution::new(
                resolved,
                failed.iter().map(atlas_domain::CountryCode::new).collect(),
            ),
        }
    }

    #[test]
    fn test_format_population_groups_thousands() {
        assert_eq!(ConsoleFormatter::format_population(0), "0");
        assert_eq!(ConsoleFormatter::format_population(999), "999");
        assert_eq!(ConsoleFormatter::format_population(1_000), "1,000");
        assert_eq!(ConsoleFormatter::format_population(83_240_525), "83,240,525");
    }

    #[test]
    fn test_format_area_handles_fractions() {
        assert_eq!(ConsoleFormatter::format_area(357_114.0), "357,114 km²");
        assert_eq!(ConsoleFormatter::format_area(2.02), "2.02 km²");
    }

    #[test]
    fn test_format_languages_placeholder() {
        assert_eq!(
            ConsoleFormatter::format_languages(None),
            "No official languages"
        );
        let map = BTreeMap::from([("deu".to_string(), "German".to_string())]);
        assert_eq!(ConsoleFormatter::format_languages(Some(&map)), "German");
    }

    #[test]
    fn test_format_currencies_with_and_without_symbol() {
        let map = BTreeMap::from([
            (
                "EUR".to_string(),
                Currency {
                    name: "Euro".to_string(),
                    symbol: Some("€".to_string()),
                },
            ),
            (
                "XXX".to_string(),
                Currency {
                    name: "Testmark".to_string(),
                    symbol: None,
                },
            ),
        ]);
        assert_eq!(
            ConsoleFormatter::format_currencies(Some(&map)),
            "Euro (€), Testmark"
        );
        assert_eq!(
            ConsoleFormatter::format_currencies(None),
            "No official currency"
        );
    }

    #[test]
    fn test_listing_includes_each_country_once() {
        let countries = vec![country("Germany", "DEU", "Europe")];
        let output =
            ConsoleFormatter::format_listing(&countries, &FilterQuery::new("germ", "Europe"));
        assert!(output.contains("Germany"));
        assert!(output.contains("[DEU]"));
        assert!(output.contains("germ"));
        assert!(output.contains("83,240,525"));
        assert!(output.contains("1 country"));
    }

    #[test]
    fn test_empty_listing_mentions_filters() {
        let output = ConsoleFormatter::format_listing(&[], &FilterQuery::new("atlantis", ""));
        assert!(output.contains("No countries match"));
    }

    #[test]
    fn test_compact_listing_is_one_line_per_country() {
        let countries = vec![
            country("Germany", "DEU", "Europe"),
            country("Ghana", "GHA", "Africa"),
        ];
        let output = ConsoleFormatter::format_listing_compact(&countries);
        assert_eq!(output.lines().count(), 2);
        assert!(output.lines().next().unwrap().contains("DEU"));
    }

    #[test]
    fn test_detail_shows_unresolved_codes() {
        let detail = detail_with_borders(vec![country("Austria", "AUT", "Europe")], &["XXX"]);
        let output = ConsoleFormatter::format_detail(&detail);
        assert!(output.contains("Austria"));
        assert!(output.contains("Unresolved:"));
        assert!(output.contains("XXX"));
    }

    #[test]
    fn test_detail_without_borders_says_so() {
        let detail = detail_with_borders(vec![], &[]);
        let output = ConsoleFormatter::format_detail(&detail);
        assert!(output.contains("No land borders."));
    }

    #[test]
    fn test_detail_json_round_trips() {
        let detail = detail_with_borders(vec![country("Austria", "AUT", "Europe")], &[]);
        let output = ConsoleFormatter::format_detail_json(&detail);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["country"]["cca3"], json!("DEU"));
        assert_eq!(value["borders"]["resolved"][0]["cca3"], json!("AUT"));
    }

    #[test]
    fn test_formatter_usable_as_trait_object() {
        let formatter: &dyn OutputFormatter = &ConsoleFormatter;
        let countries = vec![country("Fiji", "FJI", "Oceania")];
        let output = formatter.format_listing_compact(&countries);
        assert!(output.contains("Fiji"));
    }
}
