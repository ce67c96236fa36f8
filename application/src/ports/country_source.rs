//! Country source port
//!
//! Defines the interface to the upstream country directory.

use async_trait::async_trait;
use atlas_domain::{Country, CountryCode};
use thiserror::Error;

/// Errors that can occur while fetching the full collection
///
/// Single-record lookups never produce these: their failures resolve to
/// an absent record instead, which is what lets border resolution and
/// the detail route degrade softly.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Source unreachable: {0}")]
    Unreachable(String),

    #[error("Source responded with HTTP {0}")]
    Status(u16),

    #[error("Undecodable source payload: {0}")]
    Decode(String),
}

/// Read-only gateway to the upstream country directory
///
/// Implementations live in the infrastructure layer. The two operations
/// carry deliberately different failure contracts: a collection fetch is
/// load-bearing and fails hard, a single lookup fails soft.
#[async_trait]
pub trait CountrySource: Send + Sync {
    /// Fetch the complete country collection
    async fn fetch_all(&self) -> Result<Vec<Country>, SourceError>;

    /// Fetch one country by code, `None` for any kind of failure
    /// (unknown code, transport error, undecodable payload)
    async fn fetch_by_code(&self, code: &CountryCode) -> Option<Country>;
}
