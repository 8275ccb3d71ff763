//! Domain types for goldrate

pub mod observation;
pub mod series;

pub use observation::{MergedRow, Observation};
pub use series::{Granularity, ResampledRow, ResampledSeries};
