//! Calendar-bucketed series produced by the resampler.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Calendar bucket size used when averaging merged rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Granularity {
    Yearly,
    Monthly,
}

impl Granularity {
    /// First day of the bucket containing `date`.
    pub fn period_start(self, date: NaiveDate) -> NaiveDate {
        let month = match self {
            Granularity::Yearly => 1,
            Granularity::Monthly => date.month(),
        };
        // Day 1 of a month taken from a valid date always exists.
        NaiveDate::from_ymd_opt(date.year(), month, 1).unwrap_or(date)
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Granularity::Yearly => write!(f, "yearly"),
            Granularity::Monthly => write!(f, "monthly"),
        }
    }
}

/// Mean price and mean rate over one calendar bucket.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResampledRow {
    /// First day of the bucket (Jan 1 for yearly, the 1st for monthly).
    pub period_start: NaiveDate,
    pub mean_price: f64,
    pub mean_rate: f64,
}

impl ResampledRow {
    pub fn year(&self) -> i32 {
        self.period_start.year()
    }

    /// True when the row's date is January 1st.
    pub fn is_year_start(&self) -> bool {
        self.period_start.month() == 1 && self.period_start.day() == 1
    }
}

/// Ordered, gap-preserving sequence of bucket means.
///
/// Rows are strictly increasing by `period_start`. A bucket with no
/// contributing data is simply absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResampledSeries {
    pub granularity: Granularity,
    pub rows: Vec<ResampledRow>,
}

impl ResampledSeries {
    pub fn new(granularity: Granularity, rows: Vec<ResampledRow>) -> Self {
        Self { granularity, rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Keep rows with `start_year <= year <= end_year`.
    pub fn filter_years(&self, start_year: i32, end_year: i32) -> ResampledSeries {
        let rows = self
            .rows
            .iter()
            .filter(|row| (start_year..=end_year).contains(&row.year()))
            .copied()
            .collect();
        ResampledSeries::new(self.granularity, rows)
    }

    /// Rows dated January 1st.
    pub fn year_starts(&self) -> impl Iterator<Item = &ResampledRow> {
        self.rows.iter().filter(|row| row.is_year_start())
    }
}
