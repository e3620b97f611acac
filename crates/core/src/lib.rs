//! Aggregation and statistics core for the stock sentiment dashboard.
//!
//! This crate contains:
//! - Typed domain records for prices and sentiment posts
//! - Calendar day/week keying and sentiment scoring
//! - Grouping reductions and the sentiment/price series joins
//! - Pearson correlation and OLS regression
//! - The pure `Dashboard::compute` entry point
//!
//! Everything here is synchronous and stateless: each call is a pure
//! function of its inputs, so the presentation layer re-invokes the core
//! on every filter change and owns all state itself.

pub mod aggregate;
pub mod dashboard;
pub mod filter;
pub mod join;
pub mod models;
pub mod sentiment;
pub mod stats;
pub mod timekey;

pub use aggregate::{
    close_by_day, count_by_category, count_by_day, mean_sentiment_by_day, mean_sentiment_by_week,
    price_change_pct_by_week,
};
pub use dashboard::{Dashboard, DashboardParams, SCATTER_X_MAX, SCATTER_X_MIN};
pub use filter::{filter_posts, filter_prices, FilterSpec};
pub use join::{lagged_join, weekly_merge};
pub use models::{JoinedPair, PricePoint, SentimentPost, WeeklyAggregate};
pub use sentiment::SentimentCategory;
pub use stats::{ols_fit, pearson, regression_line, LinearFit, RegressionResult};
pub use timekey::{day_key, is_week_start, week_key, week_start};
