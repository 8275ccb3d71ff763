//! Observation: one dated measurement from a source table.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single dated value from one input series (a rate in percent or a price).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub date: NaiveDate,
    pub value: f64,
}

impl Observation {
    pub fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }
}

/// A gold price and an interest rate observed on the same date.
///
/// Produced only by the date join, so both values are always present.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MergedRow {
    pub date: NaiveDate,
    pub price: f64,
    pub rate: f64,
}
