//! End-to-end run: load → merge → resample → render the four charts.
//!
//! Every stage hands its output to the next by value; nothing is stored
//! between runs and nothing is global.

use crate::render::{render_spec, ChartRenderer, PngRenderer, RenderError};
use crate::spec::ChartSpec;
use goldrate_core::data::{load_sources, merge_on_date, DataError, SourceFetcher};
use goldrate_core::domain::{Granularity, ResampledSeries};
use goldrate_core::{resample, PipelineConfig};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Data(#[from] DataError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Both resampled tables, ready for charting.
#[derive(Debug, Clone)]
pub struct PreparedData {
    pub merged_rows: usize,
    pub yearly: ResampledSeries,
    pub monthly: ResampledSeries,
}

impl PreparedData {
    pub fn series(&self, granularity: Granularity) -> &ResampledSeries {
        match granularity {
            Granularity::Yearly => &self.yearly,
            Granularity::Monthly => &self.monthly,
        }
    }
}

/// What a completed run produced.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub merged_rows: usize,
    pub yearly_rows: usize,
    pub monthly_rows: usize,
    pub charts: Vec<PathBuf>,
}

/// Load both sources, join them and build the yearly and monthly tables.
pub fn prepare(
    config: &PipelineConfig,
    fetcher: &dyn SourceFetcher,
) -> Result<PreparedData, DataError> {
    let loaded = load_sources(fetcher, &config.rates, &config.gold)?;
    let merged = merge_on_date(&loaded.prices, &loaded.rates);
    if merged.is_empty() {
        tracing::warn!("no dates in common between the two sources; charts will be empty");
    }

    let yearly = resample(&merged, Granularity::Yearly);
    let monthly = resample(&merged, Granularity::Monthly);
    tracing::info!(
        merged = merged.len(),
        yearly = yearly.len(),
        monthly = monthly.len(),
        "resampled merged series"
    );

    Ok(PreparedData {
        merged_rows: merged.len(),
        yearly,
        monthly,
    })
}

/// Run the whole pipeline and write PNGs into `config.output_dir`.
pub fn run(
    config: &PipelineConfig,
    fetcher: &dyn SourceFetcher,
) -> Result<RunSummary, PipelineError> {
    run_with(config, fetcher, &PngRenderer)
}

/// Same as [`run`] with a caller-supplied renderer.
///
/// Charts are rendered in `ChartSpec::standard_set()` order; the first
/// failure aborts the run.
pub fn run_with(
    config: &PipelineConfig,
    fetcher: &dyn SourceFetcher,
    renderer: &dyn ChartRenderer,
) -> Result<RunSummary, PipelineError> {
    let data = prepare(config, fetcher)?;

    let mut charts = Vec::new();
    for spec in ChartSpec::standard_set() {
        let path = render_spec(renderer, data.series(spec.source), &spec, &config.output_dir)?;
        charts.push(path);
    }

    Ok(RunSummary {
        merged_rows: data.merged_rows,
        yearly_rows: data.yearly.len(),
        monthly_rows: data.monthly.len(),
        charts,
    })
}
