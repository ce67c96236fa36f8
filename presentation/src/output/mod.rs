//! Output formatting for listings and detail views

pub mod console;
pub mod formatter;
