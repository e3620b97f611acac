//! Raw CSV row shapes and their validation into domain records.
//!
//! Column names match the dashboard's input files:
//! `filtered_company_values.csv` (`day_date,ticker_symbol,close_value`)
//! and `processed_tweets.csv` (`post_date,ticker_symbol,
//! sentiment_category`). Validation happens here, at the boundary; rows
//! that fail are quarantined by the loader, never passed downstream.

use chrono::{DateTime, NaiveDate};
use serde::Deserialize;
use thiserror::Error;

use sentiboard_core::{PricePoint, SentimentCategory, SentimentPost};

/// Why a row was quarantined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RowDefect {
    #[error("unparseable date")]
    BadDate,
    #[error("missing or non-finite close value")]
    BadClose,
    #[error("empty ticker symbol")]
    BadTicker,
}

/// One raw row of the price file.
#[derive(Debug, Deserialize)]
pub struct PriceRow {
    pub day_date: String,
    pub ticker_symbol: String,
    pub close_value: Option<f64>,
}

impl PriceRow {
    /// Validates the row into a domain record.
    pub fn into_price_point(self) -> Result<PricePoint, RowDefect> {
        let date = parse_record_date(&self.day_date).ok_or(RowDefect::BadDate)?;
        let ticker = non_empty_ticker(&self.ticker_symbol)?;
        let close = self.close_value.ok_or(RowDefect::BadClose)?;
        if !close.is_finite() {
            return Err(RowDefect::BadClose);
        }
        Ok(PricePoint::new(date, ticker, close))
    }
}

/// One raw row of the sentiment file.
#[derive(Debug, Deserialize)]
pub struct PostRow {
    pub post_date: String,
    pub ticker_symbol: String,
    pub sentiment_category: String,
}

impl PostRow {
    /// Validates the row into a domain record.
    ///
    /// An unrecognized sentiment label is not a defect; it parses to
    /// `SentimentCategory::Unknown` and scores neutral.
    pub fn into_sentiment_post(self) -> Result<SentimentPost, RowDefect> {
        let date = parse_record_date(&self.post_date).ok_or(RowDefect::BadDate)?;
        let ticker = non_empty_ticker(&self.ticker_symbol)?;
        let category = SentimentCategory::parse_label(&self.sentiment_category);
        Ok(SentimentPost::new(date, ticker, category))
    }
}

fn non_empty_ticker(raw: &str) -> Result<String, RowDefect> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(RowDefect::BadTicker);
    }
    Ok(trimmed.to_string())
}

/// Parses a record date, taking the UTC calendar date when the value
/// carries a time-of-day component. Accepts plain `YYYY-MM-DD`, RFC3339,
/// and the `YYYY-MM-DD HH:MM:SS` form the source files use.
#[must_use]
pub fn parse_record_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(stamped) = DateTime::parse_from_rfc3339(raw) {
        return Some(stamped.to_utc().date_naive());
    }
    if let Ok(stamped) = chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(stamped.date());
    }
    None
}
