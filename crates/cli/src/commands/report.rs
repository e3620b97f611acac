//! Dashboard report CLI command.
//!
//! Loads the two input files, resolves filter defaults the way the
//! dashboard UI did (first ticker, full price date range), computes the
//! derived state, and prints it as text or JSON.

use anyhow::{anyhow, Context, Result};
use chrono::NaiveDate;
use clap::Args;
use std::path::PathBuf;

use sentiboard_core::{Dashboard, DashboardParams, FilterSpec, PricePoint};
use sentiboard_data::load_datasets;

use crate::report_format::format_dashboard;

/// Output format for the report command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Sectioned text report (default)
    #[default]
    Text,
    /// Pretty-printed JSON of the full dashboard state
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(anyhow!(
                "Invalid output format: '{}'. Valid values: text, json",
                s
            )),
        }
    }
}

/// Arguments for the report command.
#[derive(Args, Debug, Clone)]
pub struct ReportArgs {
    /// Price CSV file (day_date,ticker_symbol,close_value)
    #[arg(long)]
    pub prices: PathBuf,

    /// Sentiment post CSV file (post_date,ticker_symbol,sentiment_category)
    #[arg(long)]
    pub posts: PathBuf,

    /// Ticker to analyze (defaults to the first ticker in the price file)
    #[arg(long)]
    pub ticker: Option<String>,

    /// Inclusive start date, YYYY-MM-DD (defaults to the earliest price date)
    #[arg(long)]
    pub start: Option<String>,

    /// Inclusive end date, YYYY-MM-DD (defaults to the latest price date)
    #[arg(long)]
    pub end: Option<String>,

    /// Forward horizon in calendar days for the lagged scatter
    #[arg(long, default_value = "1")]
    pub horizon: i64,

    /// Scale factor applied to mean sentiment scores
    #[arg(long, default_value = "10")]
    pub scale: f64,

    /// Output format: text, json
    #[arg(long, default_value = "text")]
    pub format: String,
}

/// Parses a `YYYY-MM-DD` CLI date argument.
pub(crate) fn parse_cli_date(raw: &str, name: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| anyhow!("Invalid {name} date '{raw}'. Use YYYY-MM-DD"))
}

/// Resolves the filter the way the dashboard UI initialized its controls:
/// explicit arguments win; otherwise the first ticker in file order and
/// the full price date range.
pub(crate) fn resolve_filter(
    prices: &[PricePoint],
    ticker: Option<&str>,
    start: Option<&str>,
    end: Option<&str>,
) -> Result<FilterSpec> {
    let ticker = match ticker {
        Some(ticker) => ticker.to_string(),
        None => Dashboard::tickers(prices)
            .into_iter()
            .next()
            .ok_or_else(|| anyhow!("Price file contains no usable rows"))?,
    };

    let full_range = Dashboard::date_range(prices);
    let start = match start {
        Some(raw) => Some(parse_cli_date(raw, "start")?),
        None => full_range.map(|(min, _)| min),
    };
    let end = match end {
        Some(raw) => Some(parse_cli_date(raw, "end")?),
        None => full_range.map(|(_, max)| max),
    };

    if let (Some(start), Some(end)) = (start, end) {
        if start > end {
            return Err(anyhow!("Start date must not be after end date"));
        }
    }

    Ok(FilterSpec::for_ticker(ticker).with_range(start, end))
}

/// Runs the report command.
///
/// # Errors
/// Returns an error if either file fails to load or the arguments are
/// invalid.
pub async fn run_report(args: ReportArgs) -> Result<()> {
    let format: OutputFormat = args.format.parse()?;
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

    match format {
        OutputFormat::Text => {
            print!("{}", format_dashboard(&dashboard, &filter, &params));
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&dashboard)
                .context("Failed to serialize dashboard")?;
            println!("{json}");
        }
    }

    Ok(())
}
