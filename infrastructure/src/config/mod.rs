//! Configuration file loading for country-atlas
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./atlas.toml` or `./.atlas.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/country-atlas/config.toml`
//! 4. Fallback: `~/.config/country-atlas/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{FileBrowseConfig, FileConfig, FileOutputConfig, FileSourceConfig};
pub use loader::ConfigLoader;
