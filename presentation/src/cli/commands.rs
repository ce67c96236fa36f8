//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for directory listings and detail views
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Full formatted output with all sections
    Full,
    /// One line per country
    Compact,
    /// JSON output
    Json,
}

impl From<OutputFormat> for atlas_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => atlas_domain::OutputFormat::Full,
            OutputFormat::Compact => atlas_domain::OutputFormat::Compact,
            OutputFormat::Json => atlas_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for country-atlas
#[derive(Parser, Debug)]
#[command(name = "country-atlas")]
#[command(author, version, about = "Country Atlas - Browse a directory of world countries")]
#[command(long_about = r#"
Country Atlas browses the public REST Countries directory.

Without a code it lists countries, narrowed by an optional free-text name
search and an exact-match region; both constraints must hold when given
together. With a code it shows one country in detail and resolves its
land borders in parallel.

Offered region filters: Africa, Asia, Europe, Oceania. Other values are
accepted and simply match nothing.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./atlas.toml        Project-level config
3. ~/.config/country-atlas/config.toml   Global config

Example:
  country-atlas
  country-atlas --search island --region Oceania
  country-atlas DEU
  country-atlas nld --output json
"#)]
pub struct Cli {
    /// Country code to show in detail (e.g. DEU); omit to browse
    pub code: Option<String>,

    /// Keep countries whose common or official name contains this text
    #[arg(short, long, value_name = "TEXT", default_value = "")]
    pub search: String,

    /// Keep countries whose region equals this value exactly
    #[arg(short, long, value_name = "REGION", default_value = "")]
    pub region: String,

    /// Output format [default: full]
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
