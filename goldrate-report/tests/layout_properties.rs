//! Property tests for chart layout.

use chrono::NaiveDate;
use goldrate_core::domain::{Granularity, ResampledRow, ResampledSeries};
use goldrate_report::{ChartLayout, ChartSpec};
use proptest::prelude::*;

/// Monthly series over 1945-2030 with random gaps.
fn arb_monthly_series() -> impl Strategy<Value = ResampledSeries> {
    prop::collection::btree_set((1945i32..2030, 1u32..=12), 0..300).prop_map(|months| {
        let rows = months
            .into_iter()
            .map(|(y, m)| ResampledRow {
                period_start: NaiveDate::from_ymd_opt(y, m, 1).unwrap(),
                mean_price: 35.0 + (y - 1945) as f64 * 20.0 + m as f64,
                mean_rate: (m as f64) * 1.5,
            })
            .collect();
        ResampledSeries::new(Granularity::Monthly, rows)
    })
}

fn arb_spec() -> impl Strategy<Value = ChartSpec> {
    (0usize..4).prop_map(|i| ChartSpec::standard_set()[i])
}

proptest! {
    #[test]
    fn annotation_per_year_start_when_enabled(series in arb_monthly_series(), spec in arb_spec()) {
        let layout = ChartLayout::compute(&series, &spec);
        let year_starts = series
            .filter_years(spec.start_year, spec.end_year)
            .year_starts()
            .count();
        let expected = if spec.annotate { year_starts } else { 0 };
        prop_assert_eq!(layout.annotations.len(), expected);
    }

    #[test]
    fn points_stay_inside_axis_ranges(series in arb_monthly_series(), spec in arb_spec()) {
        let layout = ChartLayout::compute(&series, &spec);
        let (x0, x1) = layout.x_range;
        prop_assert!(x0 < x1);
        for &(x, p) in &layout.price_points {
            prop_assert!(x >= x0 && x <= x1);
            prop_assert!(p >= layout.price_range.0 && p <= layout.price_range.1);
        }
        for &(_, r) in &layout.rate_points {
            prop_assert!(r >= layout.rate_range.0 && r <= layout.rate_range.1);
        }
    }

    #[test]
    fn ticks_are_whole_years_on_the_step(series in arb_monthly_series(), spec in arb_spec()) {
        let layout = ChartLayout::compute(&series, &spec);
        let step = spec.tick_step_years() as f64;
        for &t in &layout.x_ticks {
            prop_assert!(t >= layout.x_range.0 && t <= layout.x_range.1);
            prop_assert_eq!(t.rem_euclid(step), 0.0);
        }
    }
}
