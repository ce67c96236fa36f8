//! Country entities mirroring the REST Countries v3.1 wire format

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::country::code::CountryCode;

/// A country record as served by the upstream directory
///
/// Records are transient: fetched per invocation, shaped, rendered and
/// discarded. Only `name.common`, `cca3`, `region` and `population` are
/// required by the wire contract; everything else is optional and absent
/// for some records (island nations carry no `borders`, a handful of
/// territories have no `capital`, and so on).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    pub name: CountryName,
    /// Primary three-letter code, unique within a collection
    pub cca3: CountryCode,
    pub region: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subregion: Option<String>,
    pub population: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capital: Option<Vec<String>>,
    /// Language code to display name, e.g. `deu` -> `German`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub languages: Option<BTreeMap<String, String>>,
    /// Currency code to name and symbol, e.g. `EUR` -> `Euro` / `€`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currencies: Option<BTreeMap<String, Currency>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezones: Option<Vec<String>>,
    /// Codes of land neighbors; absent for island nations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub borders: Option<Vec<CountryCode>>,
    #[serde(default, skip_serializing_if = "ImageLinks::is_empty")]
    pub flags: ImageLinks,
    #[serde(default, skip_serializing_if = "ImageLinks::is_empty")]
    pub coat_of_arms: ImageLinks,
}

impl Country {
    /// First native-script official name, falling back to the plain
    /// official name when no native spelling is published
    pub fn native_official_name(&self) -> &str {
        self.name
            .native_name
            .as_ref()
            .and_then(|names| names.values().next())
            .map(|n| n.official.as_str())
            .unwrap_or(&self.name.official)
    }

    /// Border codes in wire order, empty when the record carries none
    pub fn border_codes(&self) -> &[CountryCode] {
        self.borders.as_deref().unwrap_or_default()
    }
}

/// Display names of a country
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryName {
    /// Primary display, search and sort key
    pub common: String,
    pub official: String,
    /// Native-script spellings keyed by language code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub native_name: Option<BTreeMap<String, NativeName>>,
}

/// A native-script spelling of a country name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NativeName {
    pub official: String,
    pub common: String,
}

/// A currency as listed in a country record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Currency {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
}

/// Links to flag or coat-of-arms imagery
///
/// The upstream serves `{}` for countries without a published coat of
/// arms, so every field defaults independently.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub png: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub svg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

impl ImageLinks {
    /// True when no link of any kind is present
    pub fn is_empty(&self) -> bool {
        self.png.is_none() && self.svg.is_none() && self.alt.is_none()
    }
}
