//! CSV ingest: raw source text → dated observations.

use super::provider::{DataError, SeriesSource, SourceFetcher};
use crate::domain::Observation;
use chrono::{NaiveDate, NaiveDateTime};

/// Date layouts accepted in the date column, tried in order.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y"];
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Both input series, as loaded.
#[derive(Debug, Clone)]
pub struct LoadedSeries {
    pub rates: Vec<Observation>,
    pub prices: Vec<Observation>,
}

/// Fetch and parse both sources. Either failure aborts the load.
pub fn load_sources(
    fetcher: &dyn SourceFetcher,
    rates: &SeriesSource,
    prices: &SeriesSource,
) -> Result<LoadedSeries, DataError> {
    Ok(LoadedSeries {
        rates: load_series(fetcher, rates)?,
        prices: load_series(fetcher, prices)?,
    })
}

/// Fetch one source and parse it.
pub fn load_series(
    fetcher: &dyn SourceFetcher,
    source: &SeriesSource,
) -> Result<Vec<Observation>, DataError> {
    let text = fetcher.fetch_text(source)?;
    let observations = parse_series(&text, source)?;
    tracing::info!(
        source = %source.name,
        location = %source.location,
        fetcher = fetcher.name(),
        rows = observations.len(),
        "loaded series"
    );
    Ok(observations)
}

/// Parse CSV text into observations, skipping `source.skip_lines` leading lines.
///
/// Columns are located by header name (trimmed, ASCII case-insensitive).
/// Reported line numbers refer to the original text, skipped lines included.
pub fn parse_series(text: &str, source: &SeriesSource) -> Result<Vec<Observation>, DataError> {
    let body = skip_lines(text, source.skip_lines);

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(body.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| csv_error(source, e))?
        .clone();
    if headers.iter().all(|h| h.is_empty()) {
        return Err(DataError::MissingHeader {
            source_name: source.name.clone(),
        });
    }

    let date_idx = column_index(&headers, &source.date_column).ok_or_else(|| {
        DataError::MissingColumn {
            source_name: source.name.clone(),
            column: source.date_column.clone(),
        }
    })?;
    let value_idx = column_index(&headers, &source.value_column).ok_or_else(|| {
        DataError::MissingColumn {
            source_name: source.name.clone(),
            column: source.value_column.clone(),
        }
    })?;

    let mut observations = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| csv_error(source, e))?;
        let line = source.skip_lines as u64 + record.position().map_or(0, |p| p.line());

        let raw_date = record.get(date_idx).unwrap_or_default();
        let raw_value = record.get(value_idx).unwrap_or_default();

        let date = parse_date(raw_date).ok_or_else(|| DataError::Parse {
            source_name: source.name.clone(),
            line,
            reason: format!("invalid date '{raw_date}'"),
        })?;
        let value = parse_value(raw_value).ok_or_else(|| DataError::Parse {
            source_name: source.name.clone(),
            line,
            reason: format!("invalid number '{raw_value}' in column '{}'", source.value_column),
        })?;

        observations.push(Observation::new(date, value));
    }

    Ok(observations)
}

/// Parse a date in any of the accepted layouts.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
                .map(|dt| dt.date())
        })
}

fn parse_value(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Slice off the first `n` lines.
fn skip_lines(text: &str, n: usize) -> &str {
    let mut rest = text;
    for _ in 0..n {
        match rest.find('\n') {
            Some(pos) => rest = &rest[pos + 1..],
            None => return "",
        }
    }
    rest
}

fn column_index(headers: &csv::StringRecord, name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|h| h.trim_start_matches('\u{feff}').eq_ignore_ascii_case(name.trim()))
}

fn csv_error(source: &SeriesSource, e: csv::Error) -> DataError {
    DataError::Csv {
        source_name: source.name.clone(),
        reason: e.to_string(),
    }
}
