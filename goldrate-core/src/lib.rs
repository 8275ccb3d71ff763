//! goldrate core: domain types, source loading, date join, calendar resampling.
//!
//! This crate holds the data half of the pipeline:
//! - Domain types (observations, merged rows, resampled series)
//! - Source fetching (HTTP, file, in-memory fixtures) and CSV ingest
//! - Inner join of the price and rate series on date
//! - Yearly and monthly mean resampling
//! - Pipeline configuration (defaults + TOML overrides)

pub mod config;
pub mod data;
pub mod domain;
pub mod resample;

pub use config::{ConfigError, PipelineConfig};
pub use resample::resample;
