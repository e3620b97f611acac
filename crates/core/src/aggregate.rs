//! Daily and weekly grouping reductions.
//!
//! Every function here is a pure fold over its input slice into a
//! `BTreeMap`, so outputs are chronologically ordered by construction and
//! a key only exists when the group is non-empty.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::{PricePoint, SentimentPost};
use crate::sentiment::SentimentCategory;
use crate::timekey::week_start;

/// Counts posts per calendar day.
///
/// Conservation: the counts sum to `posts.len()`.
#[must_use]
pub fn count_by_day(posts: &[SentimentPost]) -> BTreeMap<NaiveDate, usize> {
    let mut counts = BTreeMap::new();
    for post in posts {
        *counts.entry(post.date).or_insert(0) += 1;
    }
    counts
}

/// Counts posts per sentiment category.
///
/// Conservation: the counts sum to `posts.len()`.
#[must_use]
pub fn count_by_category(posts: &[SentimentPost]) -> BTreeMap<SentimentCategory, usize> {
    let mut counts = BTreeMap::new();
    for post in posts {
        *counts.entry(post.category).or_insert(0) += 1;
    }
    counts
}

/// Mean sentiment score per calendar day.
///
/// Days with no posts never appear as keys.
#[must_use]
pub fn mean_sentiment_by_day(posts: &[SentimentPost]) -> BTreeMap<NaiveDate, f64> {
    mean_sentiment_keyed(posts, |post| post.date, 1.0)
}

/// Mean sentiment score per ISO week (keyed by the week's Monday),
/// multiplied by `scale` for display against a price axis.
#[must_use]
pub fn mean_sentiment_by_week(posts: &[SentimentPost], scale: f64) -> BTreeMap<NaiveDate, f64> {
    mean_sentiment_keyed(posts, |post| week_start(post.date), scale)
}

fn mean_sentiment_keyed(
    posts: &[SentimentPost],
    key: impl Fn(&SentimentPost) -> NaiveDate,
    scale: f64,
) -> BTreeMap<NaiveDate, f64> {
    let mut sums: BTreeMap<NaiveDate, (f64, usize)> = BTreeMap::new();
    for post in posts {
        let entry = sums.entry(key(post)).or_insert((0.0, 0));
        entry.0 += post.category.score();
        entry.1 += 1;
    }
    sums.into_iter()
        .map(|(day, (sum, count))| (day, sum / count as f64 * scale))
        .collect()
}

/// Last closing price per calendar day.
///
/// When a day carries multiple observations the latest one in input order
/// wins, matching how the upstream file repeats a day only on corrections.
#[must_use]
pub fn close_by_day(prices: &[PricePoint]) -> BTreeMap<NaiveDate, f64> {
    prices.iter().map(|p| (p.date, p.close)).collect()
}

/// Week-over-week price change percentage per ISO week.
///
/// Orders each week's closes by date and computes
/// `(last - first) / first * 100`. A week with a single observation has
/// `first == last` and yields 0.0; a zero first close also yields 0.0
/// rather than dividing by zero.
#[must_use]
pub fn price_change_pct_by_week(prices: &[PricePoint]) -> BTreeMap<NaiveDate, f64> {
    let mut weeks: BTreeMap<NaiveDate, Vec<(NaiveDate, f64)>> = BTreeMap::new();
    for price in prices {
        weeks
            .entry(week_start(price.date))
            .or_default()
            .push((price.date, price.close));
    }

    weeks
        .into_iter()
        .map(|(week, mut observations)| {
            observations.sort_by_key(|(date, _)| *date);
            let first = observations[0].1;
            let last = observations[observations.len() - 1].1;
            let change = if first == 0.0 {
                0.0
            } else {
                (last - first) / first * 100.0
            };
            (week, change)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn post(y: i32, m: u32, d: u32, category: SentimentCategory) -> SentimentPost {
        SentimentPost::new(date(y, m, d), "AAPL", category)
    }

    fn price(y: i32, m: u32, d: u32, close: f64) -> PricePoint {
        PricePoint::new(date(y, m, d), "AAPL", close)
    }

    #[test]
    fn count_by_day_matches_spec_scenario() {
        let posts = vec![
            post(2024, 1, 1, SentimentCategory::Bullish),
            post(2024, 1, 1, SentimentCategory::Bearish),
            post(2024, 1, 2, SentimentCategory::Neutral),
        ];
        let counts = count_by_day(&posts);
        assert_eq!(counts[&date(2024, 1, 1)], 2);
        assert_eq!(counts[&date(2024, 1, 2)], 1);
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn count_by_day_conserves_total() {
        let posts = vec![
            post(2024, 1, 1, SentimentCategory::Bullish),
            post(2024, 1, 3, SentimentCategory::Unknown),
            post(2024, 1, 3, SentimentCategory::Bearish),
            post(2024, 2, 1, SentimentCategory::Neutral),
        ];
        let total: usize = count_by_day(&posts).values().sum();
        assert_eq!(total, posts.len());
    }

    #[test]
    fn count_by_category_conserves_total() {
        let posts = vec![
            post(2024, 1, 1, SentimentCategory::Bullish),
            post(2024, 1, 2, SentimentCategory::Bullish),
            post(2024, 1, 3, SentimentCategory::Unknown),
        ];
        let counts = count_by_category(&posts);
        assert_eq!(counts[&SentimentCategory::Bullish], 2);
        assert_eq!(counts[&SentimentCategory::Unknown], 1);
        let total: usize = counts.values().sum();
        assert_eq!(total, posts.len());
    }

    #[test]
    fn mean_sentiment_by_day_matches_spec_scenario() {
        let posts = vec![
            post(2024, 1, 1, SentimentCategory::Bullish),
            post(2024, 1, 1, SentimentCategory::Bearish),
            post(2024, 1, 2, SentimentCategory::Neutral),
        ];
        let means = mean_sentiment_by_day(&posts);
        assert_eq!(means[&date(2024, 1, 1)], 0.0);
        assert_eq!(means[&date(2024, 1, 2)], 0.0);
    }

    #[test]
    fn empty_days_never_appear_as_keys() {
        let posts = vec![
            post(2024, 1, 1, SentimentCategory::Bullish),
            post(2024, 1, 5, SentimentCategory::Bullish),
        ];
        let means = mean_sentiment_by_day(&posts);
        assert_eq!(means.len(), 2);
        assert!(!means.contains_key(&date(2024, 1, 3)));
    }

    #[test]
    fn weekly_mean_is_scaled_and_keyed_by_monday() {
        // All of the first ISO week of 2024: Mon 1st, Sun 7th
        let posts = vec![
            post(2024, 1, 1, SentimentCategory::Bullish),
            post(2024, 1, 7, SentimentCategory::Bullish),
            post(2024, 1, 3, SentimentCategory::Bearish),
            post(2024, 1, 5, SentimentCategory::Neutral),
        ];
        let means = mean_sentiment_by_week(&posts, 10.0);
        assert_eq!(means.len(), 1);
        // (1 + 1 - 1 + 0) / 4 * 10 = 2.5
        assert!((means[&date(2024, 1, 1)] - 2.5).abs() < 1e-12);
    }

    #[test]
    fn price_change_orders_within_week_by_date() {
        // Deliberately out of input order
        let prices = vec![
            price(2024, 1, 5, 110.0),
            price(2024, 1, 1, 100.0),
            price(2024, 1, 3, 90.0),
        ];
        let changes = price_change_pct_by_week(&prices);
        assert!((changes[&date(2024, 1, 1)] - 10.0).abs() < 1e-12);
    }

    #[test]
    fn single_observation_week_changes_by_zero() {
        let prices = vec![price(2024, 1, 3, 123.45)];
        let changes = price_change_pct_by_week(&prices);
        assert_eq!(changes[&date(2024, 1, 1)], 0.0);
    }

    #[test]
    fn zero_first_close_does_not_divide_by_zero() {
        let prices = vec![price(2024, 1, 1, 0.0), price(2024, 1, 2, 5.0)];
        let changes = price_change_pct_by_week(&prices);
        assert_eq!(changes[&date(2024, 1, 1)], 0.0);
    }

    #[test]
    fn close_by_day_keeps_last_observation() {
        let prices = vec![price(2024, 1, 1, 100.0), price(2024, 1, 1, 101.0)];
        let closes = close_by_day(&prices);
        assert_eq!(closes[&date(2024, 1, 1)], 101.0);
    }
}
