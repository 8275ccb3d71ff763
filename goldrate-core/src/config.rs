//! Pipeline configuration.
//!
//! `PipelineConfig::default()` reproduces the built-in sources and output
//! directory. A TOML file may override any subset of fields; missing fields
//! fall back to the defaults.

use crate::data::{SeriesSource, SourceLocation};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Monthly effective federal funds rate (FRED export).
pub const FED_FUNDS_URL: &str = "https://raw.githubusercontent.com/U1186204/interest_rate_by_assets_project/refs/heads/main/FEDFUNDS.csv";

/// Inflation-adjusted gold price (MacroTrends export).
pub const GOLD_PRICE_URL: &str = "https://raw.githubusercontent.com/U1186204/interest_rate_by_assets_project/refs/heads/main/MacroTrends_Data_Download.csv";

/// Disclaimer lines preceding the header in the MacroTrends export.
pub const GOLD_PREAMBLE_LINES: usize = 10;

pub const DEFAULT_OUTPUT_DIR: &str = "images";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Invalid(#[from] toml::de::Error),
}

/// Sources to load and where to write charts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub rates: SeriesSource,
    pub gold: SeriesSource,
    pub output_dir: PathBuf,
}

impl PipelineConfig {
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn default_rates_source() -> SeriesSource {
        SeriesSource {
            name: "fed_funds".into(),
            location: SourceLocation::Url(FED_FUNDS_URL.into()),
            skip_lines: 0,
            date_column: "DATE".into(),
            value_column: "FEDFUNDS".into(),
        }
    }

    pub fn default_gold_source() -> SeriesSource {
        SeriesSource {
            name: "gold".into(),
            location: SourceLocation::Url(GOLD_PRICE_URL.into()),
            skip_lines: GOLD_PREAMBLE_LINES,
            date_column: "date".into(),
            value_column: "real".into(),
        }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            rates: Self::default_rates_source(),
            gold: Self::default_gold_source(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}
