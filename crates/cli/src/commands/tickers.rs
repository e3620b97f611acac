//! Ticker listing CLI command.

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use sentiboard_core::Dashboard;
use sentiboard_data::read_prices;

/// Arguments for the tickers command.
#[derive(Args, Debug, Clone)]
pub struct TickersArgs {
    /// Price CSV file (day_date,ticker_symbol,close_value)
    #[arg(long)]
    pub prices: PathBuf,
}

/// Runs the tickers command.
///
/// # Errors
/// Returns an error if the price file fails to load.
pub fn run_tickers(args: TickersArgs) -> Result<()> {
    let outcome = read_prices(&args.prices).context("Failed to load price file")?;

    for ticker in Dashboard::tickers(&outcome.records) {
        println!("{ticker}");
    }

    Ok(())
}
