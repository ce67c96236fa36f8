//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

use atlas_domain::OutputFormat;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::rest_countries::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Upstream source settings
    pub source: FileSourceConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Browse settings
    pub browse: FileBrowseConfig,
}

/// Raw upstream source configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSourceConfig {
    /// Base URL of the REST Countries endpoint
    pub base_url: String,
    /// Transport timeout applied to every request, in seconds
    pub timeout_secs: u64,
}

impl FileSourceConfig {
    /// Timeout as a `Duration`
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for FileSourceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Raw output configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Output format (uses domain type)
    pub format: Option<OutputFormat>,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

/// Raw browse configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBrowseConfig {
    /// Show progress indicators during fetches
    pub show_progress: bool,
}

impl Default for FileBrowseConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
        }
    }
}
