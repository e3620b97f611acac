//! CLI commands for the sentiment dashboard.

pub mod export;
pub mod report;
pub mod tickers;

pub use export::{run_export, ExportArgs};
pub use report::{run_report, ReportArgs};
pub use tickers::{run_tickers, TickersArgs};
