//! CSV export of derived series.
//!
//! Writes the shapes the dashboard derives so they can be fed to other
//! tooling. Missing outer-join fields are written as empty cells.

use std::path::Path;

use sentiboard_core::{day_key, JoinedPair, WeeklyAggregate};

use crate::error::LoadError;

/// Writes the weekly merged series as
/// `week,sentiment_score,price_change_pct`.
///
/// # Errors
/// Returns `LoadError` if the file cannot be created or a row fails to
/// write.
pub fn write_weekly_csv(path: &Path, rows: &[WeeklyAggregate]) -> Result<(), LoadError> {
    let mut writer = writer_at(path)?;

    writer
        .write_record(["week", "sentiment_score", "price_change_pct"])
        .map_err(|source| csv_error(path, source))?;

    for row in rows {
        writer
            .write_record(&[
                day_key(row.week),
                optional_cell(row.sentiment_score),
                optional_cell(row.price_change_pct),
            ])
            .map_err(|source| csv_error(path, source))?;
    }

    flush(path, writer)
}

/// Writes lagged scatter pairs as `x,y`.
///
/// # Errors
/// Returns `LoadError` if the file cannot be created or a row fails to
/// write.
pub fn write_pairs_csv(path: &Path, pairs: &[JoinedPair]) -> Result<(), LoadError> {
    let mut writer = writer_at(path)?;

    writer
        .write_record(["x", "y"])
        .map_err(|source| csv_error(path, source))?;

    for pair in pairs {
        writer
            .write_record(&[pair.x.to_string(), pair.y.to_string()])
            .map_err(|source| csv_error(path, source))?;
    }

    flush(path, writer)
}

fn writer_at(path: &Path) -> Result<csv::Writer<std::fs::File>, LoadError> {
    let file = std::fs::File::create(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(csv::Writer::from_writer(file))
}

fn flush(path: &Path, mut writer: csv::Writer<std::fs::File>) -> Result<(), LoadError> {
    writer.flush().map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn csv_error(path: &Path, source: csv::Error) -> LoadError {
    LoadError::Csv {
        path: path.to_path_buf(),
        source,
    }
}

fn optional_cell(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
