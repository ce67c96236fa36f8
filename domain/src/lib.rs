//! Domain layer for country-atlas
//!
//! This crate contains the country model and the pure collection logic.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Catalog
//!
//! The catalog is the browsable collection: a filter over the common and
//! official names plus an exact-match region, and a locale-aware sort by
//! common name. Both are pure functions over fetched records.
//!
//! ## Borders
//!
//! A record lists its land neighbors as bare codes. Resolving those codes
//! into full records is an application concern; the domain contributes
//! the [`BorderResolution`] shape that keeps failed codes next to the
//! records that resolved.

pub mod border;
pub mod catalog;
pub mod config;
pub mod core;
pub mod country;

// Re-export commonly used types
pub use border::BorderResolution;
pub use catalog::{
    filter::{FilterQuery, filter_countries},
    sort::{collation_key, sort_countries},
};
pub use config::OutputFormat;
pub use core::error::DomainError;
pub use country::{
    code::CountryCode,
    entities::{Country, CountryName, Currency, ImageLinks, NativeName},
};
