//! Data loading and date alignment

pub mod align;
pub mod http;
pub mod ingest;
pub mod provider;

pub use align::merge_on_date;
pub use http::StandardFetcher;
pub use ingest::{load_series, load_sources, parse_date, parse_series, LoadedSeries};
pub use provider::{DataError, InMemoryFetcher, SeriesSource, SourceFetcher, SourceLocation};
