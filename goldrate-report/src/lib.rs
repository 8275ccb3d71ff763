//! goldrate report: chart specs, layout, PNG rendering and the pipeline.
//!
//! This crate builds on `goldrate-core` to provide:
//! - The four fixed chart definitions
//! - Pure layout computation (filtering, axis ranges, ticks, annotations)
//! - Dual-axis PNG rendering via plotters
//! - `run()`, the single entry point for a full pipeline pass

pub mod layout;
pub mod pipeline;
pub mod render;
pub mod spec;

pub use layout::{Annotation, ChartLayout};
pub use pipeline::{prepare, run, run_with, PipelineError, PreparedData, RunSummary};
pub use render::{ChartRenderer, PngRenderer, RenderError};
pub use spec::ChartSpec;
