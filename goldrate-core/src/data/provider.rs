//! Source descriptions, the fetcher trait, and structured error types.
//!
//! The SourceFetcher trait abstracts over where the raw CSV text comes from
//! (HTTP, local file, in-memory fixture) so the loader can be tested without
//! network access.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Structured error types for data operations.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("source '{source_name}' unavailable: {reason}")]
    SourceUnavailable { source_name: String, reason: String },

    #[error("source '{source_name}' has no header row")]
    MissingHeader { source_name: String },

    #[error("source '{source_name}' has no column '{column}'")]
    MissingColumn { source_name: String, column: String },

    #[error("source '{source_name}' line {line}: {reason}")]
    Parse {
        source_name: String,
        line: u64,
        reason: String,
    },

    #[error("source '{source_name}' is not valid CSV: {reason}")]
    Csv { source_name: String, reason: String },
}

/// Where a source's raw text lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SourceLocation {
    Url(String),
    File(PathBuf),
}

impl From<String> for SourceLocation {
    fn from(s: String) -> Self {
        if s.starts_with("http://") || s.starts_with("https://") {
            SourceLocation::Url(s)
        } else {
            SourceLocation::File(PathBuf::from(s))
        }
    }
}

impl From<&str> for SourceLocation {
    fn from(s: &str) -> Self {
        SourceLocation::from(s.to_string())
    }
}

impl From<SourceLocation> for String {
    fn from(loc: SourceLocation) -> Self {
        loc.to_string()
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceLocation::Url(url) => write!(f, "{url}"),
            SourceLocation::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Everything the loader needs to turn one CSV resource into observations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesSource {
    /// Human-readable name used in logs and errors.
    pub name: String,
    pub location: SourceLocation,
    /// Non-tabular lines preceding the real header row.
    #[serde(default)]
    pub skip_lines: usize,
    pub date_column: String,
    pub value_column: String,
}

/// Trait for anything that can hand back the raw text of a source.
pub trait SourceFetcher: Send + Sync {
    /// Human-readable name of this fetcher.
    fn name(&self) -> &str;

    /// Return the full text of `source`, including any lines to be skipped.
    fn fetch_text(&self, source: &SeriesSource) -> Result<String, DataError>;
}

/// Fetcher serving fixture text keyed by source name.
///
/// Lets tests and offline runs substitute data at the loader boundary.
#[derive(Debug, Default, Clone)]
pub struct InMemoryFetcher {
    texts: HashMap<String, String>,
}

impl InMemoryFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, source_name: impl Into<String>, text: impl Into<String>) -> Self {
        self.texts.insert(source_name.into(), text.into());
        self
    }
}

impl SourceFetcher for InMemoryFetcher {
    fn name(&self) -> &str {
        "in_memory"
    }

    fn fetch_text(&self, source: &SeriesSource) -> Result<String, DataError> {
        self.texts
            .get(&source.name)
            .cloned()
            .ok_or_else(|| DataError::SourceUnavailable {
                source_name: source.name.clone(),
                reason: "no fixture registered".into(),
            })
    }
}
