//! Chart layout: everything a renderer needs, computed without drawing.
//!
//! The x axis is measured in fractional years (1970.0 is 1970-01-01,
//! 1970.5 is roughly July 2nd) so ticks can be pinned to whole years.

use crate::spec::ChartSpec;
use chrono::{Datelike, NaiveDate};
use goldrate_core::domain::ResampledSeries;

/// Headroom added above and below each y axis, as a fraction of the data span.
const Y_PADDING: f64 = 0.05;

/// Value labels drawn at a January 1st point.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub x: f64,
    pub price: f64,
    pub rate: f64,
    /// Price rounded to a whole number.
    pub price_label: String,
    /// Rate with one decimal place.
    pub rate_label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub title: String,
    pub x_range: (f64, f64),
    /// Whole-year tick positions inside `x_range`.
    pub x_ticks: Vec<f64>,
    pub price_range: (f64, f64),
    pub rate_range: (f64, f64),
    pub price_points: Vec<(f64, f64)>,
    pub rate_points: Vec<(f64, f64)>,
    pub annotations: Vec<Annotation>,
}

impl ChartLayout {
    /// Filter `series` to the spec's years and lay out both axes.
    pub fn compute(series: &ResampledSeries, spec: &ChartSpec) -> ChartLayout {
        let filtered = series.filter_years(spec.start_year, spec.end_year);

        let price_points: Vec<(f64, f64)> = filtered
            .rows
            .iter()
            .map(|r| (fractional_year(r.period_start), r.mean_price))
            .collect();
        let rate_points: Vec<(f64, f64)> = filtered
            .rows
            .iter()
            .map(|r| (fractional_year(r.period_start), r.mean_rate))
            .collect();

        let x_range = match (price_points.first(), price_points.last()) {
            (Some(first), Some(last)) if last.0 > first.0 => (first.0, last.0),
            (Some(only), _) => (only.0 - 0.5, only.0 + 0.5),
            _ => (spec.start_year as f64, (spec.end_year + 1) as f64),
        };

        let annotations = if spec.annotate {
            filtered
                .year_starts()
                .map(|r| Annotation {
                    x: fractional_year(r.period_start),
                    price: r.mean_price,
                    rate: r.mean_rate,
                    price_label: format!("{:.0}", r.mean_price),
                    rate_label: format!("{:.1}", r.mean_rate),
                })
                .collect()
        } else {
            Vec::new()
        };

        ChartLayout {
            title: spec.title.to_string(),
            x_ticks: year_ticks(x_range, spec.tick_step_years()),
            x_range,
            price_range: padded_range(price_points.iter().map(|p| p.1)),
            rate_range: padded_range(rate_points.iter().map(|p| p.1)),
            price_points,
            rate_points,
            annotations,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.price_points.is_empty()
    }
}

/// Date as a fractional year: year + elapsed days / days in that year.
pub fn fractional_year(date: NaiveDate) -> f64 {
    let days_in_year = NaiveDate::from_ymd_opt(date.year(), 12, 31)
        .map_or(365, |last| last.ordinal());
    date.year() as f64 + date.ordinal0() as f64 / days_in_year as f64
}

/// Whole years inside `range` that are multiples of `step`.
fn year_ticks(range: (f64, f64), step: i32) -> Vec<f64> {
    let step = step.max(1);
    let first = range.0.ceil() as i32;
    let last = range.1.floor() as i32;
    (first..=last)
        .filter(|year| year.rem_euclid(step) == 0)
        .map(|year| year as f64)
        .collect()
}

fn padded_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }
    let span = max - min;
    if span <= f64::EPSILON {
        return (min - 1.0, max + 1.0);
    }
    (min - span * Y_PADDING, max + span * Y_PADDING)
}
