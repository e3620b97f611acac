//! Dataset loading with row-level quarantine.
//!
//! Files are read synchronously with the `csv` crate; the two dashboard
//! inputs are loaded concurrently on blocking tasks, mirroring the two
//! parallel fetches the dashboard issues on startup. Rows failing
//! validation are skipped, counted, and logged, never propagated.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, warn};

use sentiboard_core::{PricePoint, SentimentPost};

use crate::error::LoadError;
use crate::rows::{PostRow, PriceRow, RowDefect};

/// Row bookkeeping for one loaded file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct QuarantineReport {
    /// Rows validated and kept
    pub accepted: usize,
    /// Rows skipped for a defect
    pub quarantined: usize,
}

impl QuarantineReport {
    /// Total rows seen.
    #[must_use]
    pub fn total(&self) -> usize {
        self.accepted + self.quarantined
    }
}

/// The accepted records of one file plus its quarantine bookkeeping.
#[derive(Debug, Clone)]
pub struct LoadOutcome<T> {
    pub records: Vec<T>,
    pub report: QuarantineReport,
}

/// Both dashboard inputs, loaded.
#[derive(Debug, Clone)]
pub struct Datasets {
    pub prices: LoadOutcome<PricePoint>,
    pub posts: LoadOutcome<SentimentPost>,
}

/// Reads and validates the price file.
///
/// # Errors
/// Returns `LoadError` if the file cannot be opened or its CSV structure
/// is malformed. Individual defective rows are quarantined instead.
pub fn read_prices(path: &Path) -> Result<LoadOutcome<PricePoint>, LoadError> {
    read_file(path, "prices", PriceRow::into_price_point)
}

/// Reads and validates the sentiment post file.
///
/// # Errors
/// Returns `LoadError` if the file cannot be opened or its CSV structure
/// is malformed. Individual defective rows are quarantined instead.
pub fn read_posts(path: &Path) -> Result<LoadOutcome<SentimentPost>, LoadError> {
    read_file(path, "posts", PostRow::into_sentiment_post)
}

fn read_file<Row, Record>(
    path: &Path,
    dataset: &'static str,
    validate: impl Fn(Row) -> Result<Record, RowDefect>,
) -> Result<LoadOutcome<Record>, LoadError>
where
    Row: serde::de::DeserializeOwned,
{
    let file = std::fs::File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = csv::Reader::from_reader(file);

    let mut records = Vec::new();
    let mut report = QuarantineReport::default();

    for (index, row) in reader.deserialize::<Row>().enumerate() {
        // Line 1 is the header, so data row N is line N + 2
        let line = index + 2;
        let row = match row {
            Ok(row) => row,
            Err(source) => {
                // A row that does not even deserialize (wrong field
                // count, unreadable text) is quarantined like any other
                // defective row
                warn!(dataset, line, error = %source, "quarantined undecodable row");
                report.quarantined += 1;
                continue;
            }
        };
        match validate(row) {
            Ok(record) => {
                records.push(record);
                report.accepted += 1;
            }
            Err(defect) => {
                warn!(dataset, line, %defect, "quarantined row");
                report.quarantined += 1;
            }
        }
    }

    info!(
        dataset,
        path = %path.display(),
        accepted = report.accepted,
        quarantined = report.quarantined,
        "dataset loaded"
    );

    Ok(LoadOutcome { records, report })
}

/// Loads the price and post files concurrently.
///
/// # Errors
/// Returns the first `LoadError` if either file fails to load; the core
/// is never invoked on a failed load.
pub async fn load_datasets(
    prices_path: impl Into<PathBuf>,
    posts_path: impl Into<PathBuf>,
) -> Result<Datasets, LoadError> {
    let prices_path = prices_path.into();
    let posts_path = posts_path.into();

    let prices_task = tokio::task::spawn_blocking(move || read_prices(&prices_path));
    let posts_task = tokio::task::spawn_blocking(move || read_posts(&posts_path));

    let (prices, posts) = tokio::try_join!(prices_task, posts_task)?;

    Ok(Datasets {
        prices: prices?,
        posts: posts?,
    })
}
