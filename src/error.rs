//! Error types for loading reference tables and writing the report

use std::path::PathBuf;
use thiserror::Error;

/// Convenience alias for `Result<T, SlcspError>`.
pub type Result<T> = std::result::Result<T, SlcspError>;

#[derive(Error, Debug)]
pub enum SlcspError {
    #[error("cannot open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A row failed to deserialize; `table` names the source (zips, plans, input)
    #[error("malformed row in {table} table: {source}")]
    Parse {
        table: &'static str,
        #[source]
        source: csv::Error,
    },

    #[error("failed to write report: {0}")]
    Write(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SlcspError {
    pub(crate) fn parse(table: &'static str) -> impl FnOnce(csv::Error) -> Self {
        move |source| SlcspError::Parse { table, source }
    }
}
