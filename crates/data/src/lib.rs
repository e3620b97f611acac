//! Data loading and export boundary for the stock sentiment dashboard.
//!
//! This crate provides:
//! - Typed CSV row shapes with boundary validation and quarantine
//! - Concurrent loading of the two dashboard input files
//! - CSV export of derived series

pub mod error;
pub mod export;
pub mod loader;
pub mod rows;

pub use error::LoadError;
pub use export::{write_pairs_csv, write_weekly_csv};
pub use loader::{load_datasets, read_posts, read_prices, Datasets, LoadOutcome, QuarantineReport};
pub use rows::{parse_record_date, PostRow, PriceRow, RowDefect};
