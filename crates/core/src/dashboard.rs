//! Full derived dashboard state.
//!
//! One pure function composes filtering, aggregation, joining, and
//! statistics into the complete set of series the presentation layer
//! renders. It is recomputed from scratch on every filter change; the
//! core holds no state between invocations.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::aggregate::{
    close_by_day, count_by_category, count_by_day, mean_sentiment_by_day, mean_sentiment_by_week,
    price_change_pct_by_week,
};
use crate::filter::{filter_posts, filter_prices, FilterSpec};
use crate::join::{lagged_join, weekly_merge};
use crate::models::{JoinedPair, PricePoint, SentimentPost, WeeklyAggregate};
use crate::sentiment::SentimentCategory;
use crate::stats::{pearson, regression_line, RegressionResult};

/// Display domain for the lagged scatter's regression segment.
pub const SCATTER_X_MIN: f64 = -0.2;
pub const SCATTER_X_MAX: f64 = 0.2;

/// Tunable parameters of the derived computations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DashboardParams {
    /// Calendar days between a sentiment observation and the price used
    /// for its forward return
    pub horizon_days: i64,
    /// Factor applied to mean sentiment so it reads against a price axis
    pub sentiment_scale: f64,
}

impl Default for DashboardParams {
    fn default() -> Self {
        Self {
            horizon_days: 1,
            sentiment_scale: 10.0,
        }
    }
}

/// Everything the dashboard renders, derived from one filtered snapshot
/// of the two datasets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dashboard {
    /// Filtered price series, ordered by date
    pub prices: Vec<PricePoint>,
    /// Post count per day (post-volume chart)
    pub post_volume: BTreeMap<NaiveDate, usize>,
    /// Post count per sentiment category (distribution chart)
    pub category_distribution: BTreeMap<SentimentCategory, usize>,
    /// Outer-joined weekly sentiment/price series, ascending by week
    pub weekly: Vec<WeeklyAggregate>,
    /// Pearson correlation over the weeks with both sides present;
    /// `None` when undefined
    pub weekly_correlation: Option<f64>,
    /// Lagged sentiment-vs-return scatter points
    pub scatter: Vec<JoinedPair>,
    /// OLS fit and correlation for the scatter
    pub regression: RegressionResult,
    /// Endpoints of the fitted line over the display domain, when the
    /// fit is defined
    pub regression_segment: Option<[JoinedPair; 2]>,
}

impl Dashboard {
    /// Computes the full dashboard for one filter configuration.
    ///
    /// Pure: the same inputs always produce the same output, and the
    /// inputs are not modified.
    #[must_use]
    pub fn compute(
        prices: &[PricePoint],
        posts: &[SentimentPost],
        filter: &FilterSpec,
        params: &DashboardParams,
    ) -> Self {
        let mut prices = filter_prices(prices, filter);
        prices.sort_by_key(|p| p.date);
        let posts = filter_posts(posts, filter);

        let sentiment_by_week = mean_sentiment_by_week(&posts, params.sentiment_scale);
        let change_by_week = price_change_pct_by_week(&prices);
        let weekly = weekly_merge(&sentiment_by_week, &change_by_week);
        let weekly_correlation = weekly_pairs(&weekly).and_then(|pairs| pearson(&pairs));

        let scatter = lagged_join(
            &mean_sentiment_by_day(&posts),
            &close_by_day(&prices),
            params.horizon_days,
            params.sentiment_scale,
        );
        let regression = RegressionResult::compute(&scatter);
        let regression_segment = regression
            .fit
            .map(|fit| regression_line(&fit, SCATTER_X_MIN, SCATTER_X_MAX));

        tracing::debug!(
            ticker = %filter.ticker,
            prices = prices.len(),
            posts = posts.len(),
            weeks = weekly.len(),
            scatter_points = scatter.len(),
            "dashboard recomputed"
        );

        Self {
            post_volume: count_by_day(&posts),
            category_distribution: count_by_category(&posts),
            weekly,
            weekly_correlation,
            scatter,
            regression,
            regression_segment,
            prices,
        }
    }

    /// Distinct tickers in first-appearance order, for populating a
    /// selector.
    #[must_use]
    pub fn tickers(prices: &[PricePoint]) -> Vec<String> {
        let mut seen = Vec::new();
        for price in prices {
            if !seen.iter().any(|t| t == &price.ticker) {
                seen.push(price.ticker.clone());
            }
        }
        seen
    }

    /// Min and max dates across the price series, for defaulting a date
    /// range picker. `None` when the series is empty.
    #[must_use]
    pub fn date_range(prices: &[PricePoint]) -> Option<(NaiveDate, NaiveDate)> {
        let min = prices.iter().map(|p| p.date).min()?;
        let max = prices.iter().map(|p| p.date).max()?;
        Some((min, max))
    }
}

/// Extracts (sentiment, price change) pairs from the complete weekly rows.
/// `None` when no week has both sides.
fn weekly_pairs(weekly: &[WeeklyAggregate]) -> Option<Vec<JoinedPair>> {
    let pairs: Vec<JoinedPair> = weekly
        .iter()
        .filter_map(|row| {
            Some(JoinedPair::new(
                row.sentiment_score?,
                row.price_change_pct?,
            ))
        })
        .collect();
    if pairs.is_empty() {
        None
    } else {
        Some(pairs)
    }
}
