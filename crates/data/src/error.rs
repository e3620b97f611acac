//! Load-boundary error types.

use std::path::PathBuf;

use thiserror::Error;

/// A dataset failed to load.
///
/// Row-level defects are not errors; they are quarantined and counted by
/// the loader. `LoadError` covers failures of the file itself.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV in {path}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("background load task failed")]
    Task(#[from] tokio::task::JoinError),
}
