use clap::{Parser, Subcommand};

mod commands;
mod report_format;

use commands::{ExportArgs, ReportArgs, TickersArgs};

#[derive(Parser)]
#[command(name = "sentiboard")]
#[command(about = "Stock sentiment analytics over price and social post CSV files", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute and print the full dashboard report for one ticker
    Report(ReportArgs),
    /// List the tickers available in a price file
    Tickers(TickersArgs),
    /// Export a derived series to CSV
    Export(ExportArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Report(args) => {
            commands::run_report(args).await?;
        }
        Commands::Tickers(args) => {
            commands::run_tickers(args)?;
        }
        Commands::Export(args) => {
            commands::run_export(args).await?;
        }
    }

    Ok(())
}
