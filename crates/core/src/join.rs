//! Aligning sentiment and price series by calendar key.
//!
//! Two deliberately different policies live here. The weekly merge is an
//! outer join: a chart wants to show the weeks where one side is missing.
//! The lagged join is an inner join: a regression cannot use imputed
//! points, so days missing either close are dropped.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};

use crate::models::{JoinedPair, WeeklyAggregate};

/// Outer-joins weekly sentiment scores and weekly price changes by week
/// key. A week present on only one side yields a row with the other field
/// `None`. Rows come out ordered by week ascending.
#[must_use]
pub fn weekly_merge(
    sentiment_by_week: &BTreeMap<NaiveDate, f64>,
    price_change_by_week: &BTreeMap<NaiveDate, f64>,
) -> Vec<WeeklyAggregate> {
    let mut merged: BTreeMap<NaiveDate, WeeklyAggregate> = BTreeMap::new();

    for (&week, &score) in sentiment_by_week {
        merged.insert(
            week,
            WeeklyAggregate {
                week,
                sentiment_score: Some(score),
                price_change_pct: None,
            },
        );
    }
    for (&week, &change) in price_change_by_week {
        merged
            .entry(week)
            .or_insert(WeeklyAggregate {
                week,
                sentiment_score: None,
                price_change_pct: None,
            })
            .price_change_pct = Some(change);
    }

    merged.into_values().collect()
}

/// Inner-joins daily sentiment against forward price returns.
///
/// For each day `d` with a sentiment mean, a pair is emitted only when a
/// close exists at both `d` and `d + horizon_days`:
/// `x = sentiment[d] / scale`, `y = (close[d+h] - close[d]) / close[d] * 100`.
/// Days missing either close are silently excluded; partial data makes
/// fewer points, never imputed ones.
#[must_use]
pub fn lagged_join(
    sentiment_by_day: &BTreeMap<NaiveDate, f64>,
    close_by_day: &BTreeMap<NaiveDate, f64>,
    horizon_days: i64,
    scale: f64,
) -> Vec<JoinedPair> {
    let mut pairs = Vec::new();

    for (&day, &sentiment) in sentiment_by_day {
        let forward = day + Duration::days(horizon_days);
        let (Some(&close_now), Some(&close_later)) =
            (close_by_day.get(&day), close_by_day.get(&forward))
        else {
            continue;
        };
        if close_now == 0.0 {
            continue;
        }
        pairs.push(JoinedPair::new(
            sentiment / scale,
            (close_later - close_now) / close_now * 100.0,
        ));
    }

    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn merge_keeps_one_sided_weeks_with_none() {
        let mut sentiment = BTreeMap::new();
        sentiment.insert(date(2024, 1, 1), 2.5);
        let mut prices = BTreeMap::new();
        prices.insert(date(2024, 1, 8), -1.0);

        let merged = weekly_merge(&sentiment, &prices);

        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].week, date(2024, 1, 1));
        assert_eq!(merged[0].sentiment_score, Some(2.5));
        assert_eq!(merged[0].price_change_pct, None);
        assert_eq!(merged[1].week, date(2024, 1, 8));
        assert_eq!(merged[1].sentiment_score, None);
        assert_eq!(merged[1].price_change_pct, Some(-1.0));
    }

    #[test]
    fn merge_combines_weeks_present_on_both_sides() {
        let mut sentiment = BTreeMap::new();
        sentiment.insert(date(2024, 1, 1), 5.0);
        let mut prices = BTreeMap::new();
        prices.insert(date(2024, 1, 1), 3.0);

        let merged = weekly_merge(&sentiment, &prices);

        assert_eq!(merged.len(), 1);
        assert!(merged[0].is_complete());
        assert_eq!(merged[0].sentiment_score, Some(5.0));
        assert_eq!(merged[0].price_change_pct, Some(3.0));
    }

    #[test]
    fn merge_orders_by_week_ascending() {
        let mut sentiment = BTreeMap::new();
        sentiment.insert(date(2024, 1, 15), 1.0);
        sentiment.insert(date(2024, 1, 1), 1.0);
        let mut prices = BTreeMap::new();
        prices.insert(date(2024, 1, 8), 1.0);

        let weeks: Vec<NaiveDate> = weekly_merge(&sentiment, &prices)
            .into_iter()
            .map(|row| row.week)
            .collect();

        assert_eq!(
            weeks,
            vec![date(2024, 1, 1), date(2024, 1, 8), date(2024, 1, 15)]
        );
    }

    #[test]
    fn lagged_join_matches_spec_scenario() {
        let mut sentiment = BTreeMap::new();
        sentiment.insert(date(2024, 1, 1), 0.5);
        let mut closes = BTreeMap::new();
        closes.insert(date(2024, 1, 1), 100.0);
        closes.insert(date(2024, 1, 2), 110.0);

        let pairs = lagged_join(&sentiment, &closes, 1, 10.0);

        assert_eq!(pairs.len(), 1);
        assert!((pairs[0].x - 0.05).abs() < 1e-12);
        assert!((pairs[0].y - 10.0).abs() < 1e-12);
    }

    #[test]
    fn lagged_join_excludes_days_missing_either_close() {
        let mut sentiment = BTreeMap::new();
        sentiment.insert(date(2024, 1, 1), 1.0); // close at d, missing at d+1
        sentiment.insert(date(2024, 1, 5), 1.0); // missing close at d
        let mut closes = BTreeMap::new();
        closes.insert(date(2024, 1, 1), 100.0);
        closes.insert(date(2024, 1, 6), 100.0);

        let pairs = lagged_join(&sentiment, &closes, 1, 10.0);

        assert!(pairs.is_empty());
    }

    #[test]
    fn lagged_join_respects_horizon() {
        let mut sentiment = BTreeMap::new();
        sentiment.insert(date(2024, 1, 1), 1.0);
        let mut closes = BTreeMap::new();
        closes.insert(date(2024, 1, 1), 100.0);
        closes.insert(date(2024, 1, 4), 106.0);

        assert!(lagged_join(&sentiment, &closes, 1, 10.0).is_empty());

        let pairs = lagged_join(&sentiment, &closes, 3, 10.0);
        assert_eq!(pairs.len(), 1);
        assert!((pairs[0].y - 6.0).abs() < 1e-12);
    }

    #[test]
    fn lagged_join_skips_zero_base_close() {
        let mut sentiment = BTreeMap::new();
        sentiment.insert(date(2024, 1, 1), 1.0);
        let mut closes = BTreeMap::new();
        closes.insert(date(2024, 1, 1), 0.0);
        closes.insert(date(2024, 1, 2), 5.0);

        assert!(lagged_join(&sentiment, &closes, 1, 10.0).is_empty());
    }
}
