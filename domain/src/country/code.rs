//! Country code value object

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::core::error::DomainError;

/// A country identifier accepted by the alpha lookup endpoint (Value Object)
///
/// Covers every code family the upstream directory indexes: two-letter
/// (cca2), three-letter (cca3, cioc) and three-digit numeric (ccn3).
/// Codes are normalized to uppercase so that `deu`, `Deu` and `DEU` name
/// the same record. Length is deliberately not checked: unknown tokens
/// are forwarded as-is and the upstream answers with "no such record",
/// which keeps single lookups soft instead of failing at the edge.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CountryCode(String);

impl CountryCode {
    /// Create a new country code
    ///
    /// # Panics
    /// Panics if the input is empty or contains non-alphanumeric characters
    pub fn new(code: impl AsRef<str>) -> Self {
        let code = code.as_ref();
        Self::try_new(code).unwrap_or_else(|| panic!("Invalid country code: {code:?}"))
    }

    /// Try to create a country code, returning None if invalid
    ///
    /// Accepts any non-empty run of ASCII alphanumerics. The charset
    /// restriction keeps the code safe to splice into a URL path segment.
    pub fn try_new(code: impl AsRef<str>) -> Option<Self> {
        let trimmed = code.as_ref().trim();
        let valid = !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_alphanumeric());
        valid.then(|| Self(trimmed.to_ascii_uppercase()))
    }

    /// Get the normalized code
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for CountryCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for CountryCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CountryCode::try_new(s).ok_or_else(|| DomainError::InvalidCode(s.to_string()))
    }
}

impl AsRef<str> for CountryCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for CountryCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CountryCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        CountryCode::try_new(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid country code: {s:?}")))
    }
}
