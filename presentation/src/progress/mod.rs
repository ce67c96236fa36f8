//! Progress reporting during fetches

pub mod reporter;
