//! Domain records and derived value objects.
//!
//! Everything here is an immutable value: raw records come in from the CSV
//! boundary already typed, derived records go out to the presentation layer
//! read-only. Nothing holds shared mutable state.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::sentiment::SentimentCategory;

/// One daily closing price for a ticker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Calendar date of the close (UTC calendar semantics)
    pub date: NaiveDate,
    /// Ticker symbol (e.g., "AAPL")
    pub ticker: String,
    /// Closing price. Expected positive; the core does not enforce it.
    pub close: f64,
}

impl PricePoint {
    /// Creates a new price point.
    pub fn new(date: NaiveDate, ticker: impl Into<String>, close: f64) -> Self {
        Self {
            date,
            ticker: ticker.into(),
            close,
        }
    }
}

/// One social-media post with its sentiment classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentPost {
    /// Calendar date the post was made
    pub date: NaiveDate,
    /// Ticker symbol the post is about
    pub ticker: String,
    /// Sentiment classification
    pub category: SentimentCategory,
}

impl SentimentPost {
    /// Creates a new sentiment post.
    pub fn new(date: NaiveDate, ticker: impl Into<String>, category: SentimentCategory) -> Self {
        Self {
            date,
            ticker: ticker.into(),
            category,
        }
    }
}

/// One merged row of the weekly sentiment-vs-price series.
///
/// Produced by an outer join: a week present on only one side keeps the
/// other field as `None` rather than being dropped, so a chart can show
/// the gap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyAggregate {
    /// Monday of the week (unique within one computation)
    pub week: NaiveDate,
    /// Scaled mean sentiment score, when the week had any posts
    pub sentiment_score: Option<f64>,
    /// Week-over-week price change percentage, when the week had any closes
    pub price_change_pct: Option<f64>,
}

impl WeeklyAggregate {
    /// Returns true if both sides of the merge are present.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.sentiment_score.is_some() && self.price_change_pct.is_some()
    }
}

/// One paired observation for correlation and regression.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JoinedPair {
    pub x: f64,
    pub y: f64,
}

impl JoinedPair {
    /// Creates a new pair.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
