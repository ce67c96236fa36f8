//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod browse_countries;
pub mod country_detail;
pub mod resolve_borders;
