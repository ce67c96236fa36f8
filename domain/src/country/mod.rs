//! The country aggregate and its identifiers
//!
//! [`entities::Country`] mirrors the upstream wire shape;
//! [`code::CountryCode`] is the normalized lookup identifier.

pub mod code;
pub mod entities;
