//! Calendar resampling of merged rows.
//!
//! Rows are bucketed by `(year)` or `(year, month)`. Each bucket keeps a
//! running sum and count per column and emits the arithmetic mean. Buckets
//! that receive no rows never exist, so gaps in the input stay gaps.

use crate::domain::{Granularity, MergedRow, ResampledRow, ResampledSeries};
use chrono::Datelike;
use std::collections::BTreeMap;

/// Bucket key. `month` is fixed at 1 for yearly buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct BucketKey {
    year: i32,
    month: u32,
}

impl BucketKey {
    fn of(row: &MergedRow, granularity: Granularity) -> Self {
        let month = match granularity {
            Granularity::Yearly => 1,
            Granularity::Monthly => row.date.month(),
        };
        Self {
            year: row.date.year(),
            month,
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
struct Accumulator {
    price_sum: f64,
    rate_sum: f64,
    count: usize,
}

impl Accumulator {
    fn add(&mut self, row: &MergedRow) {
        self.price_sum += row.price;
        self.rate_sum += row.rate;
        self.count += 1;
    }

    fn mean(&self) -> (f64, f64) {
        let n = self.count as f64;
        (self.price_sum / n, self.rate_sum / n)
    }
}

/// Average `rows` per calendar bucket, ordered by period ascending.
pub fn resample(rows: &[MergedRow], granularity: Granularity) -> ResampledSeries {
    let mut buckets: BTreeMap<BucketKey, (chrono::NaiveDate, Accumulator)> = BTreeMap::new();

    for row in rows {
        let key = BucketKey::of(row, granularity);
        buckets
            .entry(key)
            .or_insert_with(|| (granularity.period_start(row.date), Accumulator::default()))
            .1
            .add(row);
    }

    let resampled: Vec<ResampledRow> = buckets
        .into_values()
        .map(|(period_start, acc)| {
            let (mean_price, mean_rate) = acc.mean();
            ResampledRow {
                period_start,
                mean_price,
                mean_rate,
            }
        })
        .collect();

    tracing::debug!(%granularity, input = rows.len(), buckets = resampled.len(), "resampled");
    ResampledSeries::new(granularity, resampled)
}
