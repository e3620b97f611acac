//! Derived-series export CLI command.

use anyhow::{anyhow, Context, Result};
use clap::Args;
use std::path::PathBuf;

use sentiboard_core::{Dashboard, DashboardParams};
use sentiboard_data::{load_datasets, write_pairs_csv, write_weekly_csv};

use super::report::resolve_filter;

/// Which derived series to export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportSeries {
    /// Weekly merged sentiment/price series
    Weekly,
    /// Lagged sentiment-vs-return scatter pairs
    Pairs,
}

impl std::str::FromStr for ExportSeries {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "weekly" => Ok(ExportSeries::Weekly),
            "pairs" | "scatter" => Ok(ExportSeries::Pairs),
            _ => Err(anyhow!(
                "Invalid series: '{}'. Valid values: weekly, pairs",
                s
            )),
        }
    }
}

/// Arguments for the export command.
#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    /// Price CSV file (day_date,ticker_symbol,close_value)
    #[arg(long)]
    pub prices: PathBuf,

    /// Sentiment post CSV file (post_date,ticker_symbol,sentiment_category)
    #[arg(long)]
    pub posts: PathBuf,

    /// Output CSV file path
    #[arg(short, long)]
    pub out: PathBuf,

    /// Series to export: weekly, pairs
    #[arg(long, default_value = "weekly")]
    pub series: String,

    /// Ticker to analyze (defaults to the first ticker in the price file)
    #[arg(long)]
    pub ticker: Option<String>,

    /// Inclusive start date, YYYY-MM-DD
    #[arg(long)]
    pub start: Option<String>,

    /// Inclusive end date, YYYY-MM-DD
    #[arg(long)]
    pub end: Option<String>,

    /// Forward horizon in calendar days (pairs series)
    #[arg(long, default_value = "1")]
    pub horizon: i64,

    /// Scale factor applied to mean sentiment scores
    #[arg(long, default_value = "10")]
    pub scale: f64,
}

/// Runs the export command.
///
/// # Errors
/// Returns an error if loading fails, arguments are invalid, or the
/// output file cannot be written.
pub async fn run_export(args: ExportArgs) -> Result<()> {
    let series: ExportSeries = args.series.parse()?;
    if args.scale == 0.0 {
        return Err(anyhow!("Scale must be non-zero"));
    }

    let datasets = load_datasets(args.prices.clone(), args.posts.clone())
        .await
        .context("Failed to load input datasets")?;

    let filter = resolve_filter(
        &datasets.prices.records,
        args.ticker.as_deref(),
        args.start.as_deref(),
        args.end.as_deref(),
    )?;
    let params = DashboardParams {
        horizon_days: args.horizon,
        sentiment_scale: args.scale,
    };

    let dashboard = Dashboard::compute(
        &datasets.prices.records,
        &datasets.posts.records,
        &filter,
        &params,
    );

    match series {
        ExportSeries::Weekly => {
            write_weekly_csv(&args.out, &dashboard.weekly)
                .context("Failed to write weekly series")?;
            tracing::info!(
                out = %args.out.display(),
                rows = dashboard.weekly.len(),
                "weekly series exported"
            );
        }
        ExportSeries::Pairs => {
            write_pairs_csv(&args.out, &dashboard.scatter)
                .context("Failed to write scatter pairs")?;
            tracing::info!(
                out = %args.out.display(),
                rows = dashboard.scatter.len(),
                "scatter pairs exported"
            );
        }
    }

    Ok(())
}
