//! The four chart definitions.

use goldrate_core::domain::Granularity;

/// First and last year of the full-history chart.
pub const FULL_RANGE_START: i32 = 1950;
pub const FULL_RANGE_END: i32 = 2023;

/// One rendered output: which series, which years, where it goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartSpec {
    pub source: Granularity,
    pub start_year: i32,
    pub end_year: i32,
    pub title: &'static str,
    /// File stem; the chart is written to `<output_dir>/<output_name>.png`.
    pub output_name: &'static str,
    /// Label January 1st points with their values.
    pub annotate: bool,
}

impl ChartSpec {
    /// Full history on the yearly series, plus three annotated monthly windows.
    pub const fn standard_set() -> [ChartSpec; 4] {
        [
            ChartSpec {
                source: Granularity::Yearly,
                start_year: FULL_RANGE_START,
                end_year: FULL_RANGE_END,
                title: "Gold Prices and Interest Rates Over Time",
                output_name: "gold_interest_full",
                annotate: false,
            },
            ChartSpec {
                source: Granularity::Monthly,
                start_year: 1970,
                end_year: 1980,
                title: "Gold Prices and Interest Rates (1970-1980)",
                output_name: "gold_interest_1970_1980",
                annotate: true,
            },
            ChartSpec {
                source: Granularity::Monthly,
                start_year: 1980,
                end_year: 1985,
                title: "Gold Prices and Interest Rates (1980-1985)",
                output_name: "gold_interest_1980_1985",
                annotate: true,
            },
            ChartSpec {
                source: Granularity::Monthly,
                start_year: 2008,
                end_year: 2012,
                title: "Gold Prices and Interest Rates (2008-2012)",
                output_name: "gold_interest_2008_2012",
                annotate: true,
            },
        ]
    }

    pub fn is_full_range(&self) -> bool {
        self.start_year == FULL_RANGE_START && self.end_year == FULL_RANGE_END
    }

    /// Years between x-axis ticks.
    pub fn tick_step_years(&self) -> i32 {
        if self.is_full_range() {
            10
        } else {
            1
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.png", self.output_name)
    }
}
