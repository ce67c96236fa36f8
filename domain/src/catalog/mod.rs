//! Pure collection shaping
//!
//! This module contains the filter and sort engine: [`filter::FilterQuery`]
//! holds the search and region constraints, [`sort::sort_countries`] orders
//! by common name with a locale-aware key.

pub mod filter;
pub mod sort;
