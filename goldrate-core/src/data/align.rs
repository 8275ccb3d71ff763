//! Date alignment of the two input series.
//!
//! Inner join on exact date equality. Dates present in only one series are
//! dropped; nothing is filled in.

use crate::domain::{MergedRow, Observation};
use chrono::NaiveDate;
use std::collections::HashMap;

/// Join prices (left) with rates (right) on date.
///
/// Output follows the order of `prices`. A price row whose date matches
/// several rate rows is emitted once per match, in rate order.
pub fn merge_on_date(prices: &[Observation], rates: &[Observation]) -> Vec<MergedRow> {
    let mut rate_map: HashMap<NaiveDate, Vec<f64>> = HashMap::new();
    for obs in rates {
        rate_map.entry(obs.date).or_default().push(obs.value);
    }

    let mut merged = Vec::with_capacity(prices.len().min(rates.len()));
    for price in prices {
        if let Some(matches) = rate_map.get(&price.date) {
            merged.extend(matches.iter().map(|&rate| MergedRow {
                date: price.date,
                price: price.value,
                rate,
            }));
        }
    }

    tracing::debug!(
        prices = prices.len(),
        rates = rates.len(),
        merged = merged.len(),
        "merged series on date"
    );
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obs(date: &str, value: f64) -> Observation {
        Observation::new(NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(), value)
    }

    #[test]
    fn drops_price_rows_without_rate() {
        let prices = vec![
            obs("1960-01-01", 100.0),
            obs("1960-01-15", 105.0),
            obs("1960-02-01", 110.0),
        ];
        let rates = vec![obs("1960-01-01", 2.0), obs("1960-02-01", 3.0)];

        let merged = merge_on_date(&prices, &rates);

        assert_eq!(merged.len(), 2);
        assert!(merged.iter().all(|r| r.date.to_string() != "1960-01-15"));
        assert_eq!(merged[0].price, 100.0);
        assert_eq!(merged[0].rate, 2.0);
        assert_eq!(merged[1].price, 110.0);
        assert_eq!(merged[1].rate, 3.0);
    }

    #[test]
    fn keeps_left_order() {
        let prices = vec![obs("1970-03-01", 3.0), obs("1970-01-01", 1.0), obs("1970-02-01", 2.0)];
        let rates = vec![obs("1970-01-01", 0.1), obs("1970-02-01", 0.2), obs("1970-03-01", 0.3)];

        let dates: Vec<String> = merge_on_date(&prices, &rates)
            .iter()
            .map(|r| r.date.to_string())
            .collect();
        assert_eq!(dates, vec!["1970-03-01", "1970-01-01", "1970-02-01"]);
    }

    #[test]
    fn no_overlap_is_empty_not_error() {
        let prices = vec![obs("1950-01-01", 35.0)];
        let rates = vec![obs("2000-01-01", 5.0)];
        assert!(merge_on_date(&prices, &rates).is_empty());
    }

    #[test]
    fn duplicate_right_dates_pair_with_each_match() {
        let prices = vec![obs("1980-01-01", 600.0)];
        let rates = vec![obs("1980-01-01", 13.0), obs("1980-01-01", 14.0)];
        let merged = merge_on_date(&prices, &rates);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].rate, 13.0);
        assert_eq!(merged[1].rate, 14.0);
    }
}
