//! Locale-aware country ordering

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::country::entities::Country;

/// Build the collation key for a display name
///
/// Decomposes to NFD, drops combining marks and lowercases, so "Åland"
/// keys as "aland" and files under A instead of past Z the way a raw
/// byte comparison would put it.
pub fn collation_key(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Sort countries ascending by common name
///
/// Accent-insensitive on the primary key with the raw name as tie-break,
/// and stable: fully equal names keep their input order.
pub fn sort_countries(countries: &mut [Country]) {
    countries.sort_by_cached_key(|country| {
        (
            collation_key(&country.name.common),
            country.name.common.clone(),
        )
    });
}
