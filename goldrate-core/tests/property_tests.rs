//! Property tests for the join and resampling invariants.
//!
//! Uses proptest to verify:
//! 1. Bucket count: yearly buckets never exceed the distinct years present
//! 2. Mean bounds: every bucket mean lies within its contributing min/max
//! 3. Ordering: resampled periods are strictly increasing
//! 4. Filter idempotence: filtering twice to the same years changes nothing
//! 5. Join content: merge is commutative in content, sized by shared dates

use chrono::{Datelike, NaiveDate};
use goldrate_core::data::merge_on_date;
use goldrate_core::domain::{Granularity, MergedRow, Observation};
use goldrate_core::resample;
use proptest::prelude::*;
use std::collections::{BTreeMap, BTreeSet};

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (1950i32..2024, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

fn arb_merged_rows() -> impl Strategy<Value = Vec<MergedRow>> {
    prop::collection::vec(
        (arb_date(), 10.0..3000.0_f64, 0.0..20.0_f64)
            .prop_map(|(date, price, rate)| MergedRow { date, price, rate }),
        0..200,
    )
}

/// Observations with unique dates, in arbitrary order.
fn arb_unique_series() -> impl Strategy<Value = Vec<Observation>> {
    prop::collection::btree_map(arb_date(), 0.0..500.0_f64, 0..80).prop_flat_map(|map| {
        let obs: Vec<Observation> = map
            .into_iter()
            .map(|(date, value)| Observation::new(date, value))
            .collect();
        Just(obs).prop_shuffle()
    })
}

fn bucket_of(date: NaiveDate, granularity: Granularity) -> (i32, u32) {
    match granularity {
        Granularity::Yearly => (date.year(), 1),
        Granularity::Monthly => (date.year(), date.month()),
    }
}

fn arb_granularity() -> impl Strategy<Value = Granularity> {
    prop_oneof![Just(Granularity::Yearly), Just(Granularity::Monthly)]
}

// ── 1-3. Resampling ──────────────────────────────────────────────────

proptest! {
    #[test]
    fn yearly_bucket_count_bounded_by_distinct_years(rows in arb_merged_rows()) {
        let years: BTreeSet<i32> = rows.iter().map(|r| r.date.year()).collect();
        let yearly = resample(&rows, Granularity::Yearly);
        prop_assert!(yearly.len() <= years.len());
    }

    #[test]
    fn bucket_means_within_contributing_range(
        rows in arb_merged_rows(),
        granularity in arb_granularity(),
    ) {
        let mut ranges: BTreeMap<(i32, u32), (f64, f64, f64, f64)> = BTreeMap::new();
        for r in &rows {
            let e = ranges
                .entry(bucket_of(r.date, granularity))
                .or_insert((f64::INFINITY, f64::NEG_INFINITY, f64::INFINITY, f64::NEG_INFINITY));
            e.0 = e.0.min(r.price);
            e.1 = e.1.max(r.price);
            e.2 = e.2.min(r.rate);
            e.3 = e.3.max(r.rate);
        }

        let series = resample(&rows, granularity);
        prop_assert_eq!(series.len(), ranges.len());

        let eps = 1e-9;
        for row in &series.rows {
            let (pmin, pmax, rmin, rmax) = ranges[&bucket_of(row.period_start, granularity)];
            prop_assert!(row.mean_price >= pmin - eps && row.mean_price <= pmax + eps);
            prop_assert!(row.mean_rate >= rmin - eps && row.mean_rate <= rmax + eps);
        }
    }

    #[test]
    fn periods_strictly_increasing(
        rows in arb_merged_rows(),
        granularity in arb_granularity(),
    ) {
        let series = resample(&rows, granularity);
        for pair in series.rows.windows(2) {
            prop_assert!(pair[0].period_start < pair[1].period_start);
        }
    }
}

// ── 4. Filtering ─────────────────────────────────────────────────────

proptest! {
    #[test]
    fn filter_years_is_idempotent(
        rows in arb_merged_rows(),
        granularity in arb_granularity(),
        start in 1945i32..2030,
        span in 0i32..80,
    ) {
        let series = resample(&rows, granularity);
        let end = start + span;
        let once = series.filter_years(start, end);
        let twice = once.filter_years(start, end);
        prop_assert_eq!(&once, &twice);
        prop_assert!(once.rows.iter().all(|r| r.year() >= start && r.year() <= end));
    }
}

// ── 5. Join ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn merge_row_count_is_shared_dates(a in arb_unique_series(), b in arb_unique_series()) {
        let dates_a: BTreeSet<NaiveDate> = a.iter().map(|o| o.date).collect();
        let dates_b: BTreeSet<NaiveDate> = b.iter().map(|o| o.date).collect();
        let shared = dates_a.intersection(&dates_b).count();

        prop_assert_eq!(merge_on_date(&a, &b).len(), shared);
    }

    #[test]
    fn merge_commutative_in_content(a in arb_unique_series(), b in arb_unique_series()) {
        let mut ab: Vec<(NaiveDate, u64, u64)> = merge_on_date(&a, &b)
            .iter()
            .map(|r| (r.date, r.price.to_bits(), r.rate.to_bits()))
            .collect();
        // Swapping sides swaps which value lands in `price` vs `rate`.
        let mut ba: Vec<(NaiveDate, u64, u64)> = merge_on_date(&b, &a)
            .iter()
            .map(|r| (r.date, r.rate.to_bits(), r.price.to_bits()))
            .collect();
        ab.sort();
        ba.sort();
        prop_assert_eq!(ab, ba);
    }
}
