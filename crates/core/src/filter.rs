//! Ticker and date-range filtering of raw records.
//!
//! The presentation layer owns the filter state and re-invokes the core
//! with a fresh `FilterSpec` on every change; the core keeps no memory of
//! prior filters.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{PricePoint, SentimentPost};

/// Selects the subset of records to analyze: one ticker, an inclusive
/// date range. An open bound means unbounded on that side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpec {
    /// Ticker symbol to keep
    pub ticker: String,
    /// Inclusive start date, `None` for unbounded
    pub start: Option<NaiveDate>,
    /// Inclusive end date, `None` for unbounded
    pub end: Option<NaiveDate>,
}

impl FilterSpec {
    /// Creates a filter for a ticker over the full available range.
    pub fn for_ticker(ticker: impl Into<String>) -> Self {
        Self {
            ticker: ticker.into(),
            start: None,
            end: None,
        }
    }

    /// Restricts the filter to an inclusive date range.
    #[must_use]
    pub fn with_range(mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    /// Returns true if a record with this ticker and date passes the filter.
    #[must_use]
    pub fn matches(&self, ticker: &str, date: NaiveDate) -> bool {
        if ticker != self.ticker {
            return false;
        }
        if self.start.is_some_and(|s| date < s) {
            return false;
        }
        if self.end.is_some_and(|e| date > e) {
            return false;
        }
        true
    }
}

/// Returns the price points passing the filter, in input order.
#[must_use]
pub fn filter_prices(prices: &[PricePoint], spec: &FilterSpec) -> Vec<PricePoint> {
    prices
        .iter()
        .filter(|p| spec.matches(&p.ticker, p.date))
        .cloned()
        .collect()
}

/// Returns the posts passing the filter, in input order.
#[must_use]
pub fn filter_posts(posts: &[SentimentPost], spec: &FilterSpec) -> Vec<SentimentPost> {
    posts
        .iter()
        .filter(|p| spec.matches(&p.ticker, p.date))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentiment::SentimentCategory;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn matches_requires_exact_ticker() {
        let spec = FilterSpec::for_ticker("AAPL");
        assert!(spec.matches("AAPL", date(2024, 1, 1)));
        assert!(!spec.matches("TSLA", date(2024, 1, 1)));
        assert!(!spec.matches("aapl", date(2024, 1, 1)));
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let spec = FilterSpec::for_ticker("AAPL")
            .with_range(Some(date(2024, 1, 2)), Some(date(2024, 1, 4)));
        assert!(!spec.matches("AAPL", date(2024, 1, 1)));
        assert!(spec.matches("AAPL", date(2024, 1, 2)));
        assert!(spec.matches("AAPL", date(2024, 1, 4)));
        assert!(!spec.matches("AAPL", date(2024, 1, 5)));
    }

    #[test]
    fn open_bounds_are_unbounded() {
        let spec = FilterSpec::for_ticker("AAPL").with_range(None, Some(date(2024, 1, 4)));
        assert!(spec.matches("AAPL", date(1990, 6, 15)));
        assert!(!spec.matches("AAPL", date(2024, 1, 5)));
    }

    #[test]
    fn filter_preserves_input_order() {
        let prices = vec![
            PricePoint::new(date(2024, 1, 3), "AAPL", 103.0),
            PricePoint::new(date(2024, 1, 1), "AAPL", 101.0),
            PricePoint::new(date(2024, 1, 2), "TSLA", 202.0),
        ];
        let spec = FilterSpec::for_ticker("AAPL");
        let kept = filter_prices(&prices, &spec);
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].date, date(2024, 1, 3));
        assert_eq!(kept[1].date, date(2024, 1, 1));
    }

    #[test]
    fn posts_filter_by_ticker_and_range() {
        let posts = vec![
            SentimentPost::new(date(2024, 1, 1), "AAPL", SentimentCategory::Bullish),
            SentimentPost::new(date(2024, 1, 9), "AAPL", SentimentCategory::Bearish),
            SentimentPost::new(date(2024, 1, 1), "TSLA", SentimentCategory::Neutral),
        ];
        let spec = FilterSpec::for_ticker("AAPL")
            .with_range(Some(date(2024, 1, 1)), Some(date(2024, 1, 7)));
        let kept = filter_posts(&posts, &spec);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].category, SentimentCategory::Bullish);
    }
}
