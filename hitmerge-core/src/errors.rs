use std::io;

use thiserror::Error;

/// Error type for region table operations.
#[derive(Error, Debug)]
pub enum RegionTableError {
    /// Row has fewer columns than the region table format requires.
    #[error("Region row has fewer than 3 columns: {0:?}")]
    ShortRow(String),

    /// A start/stop field did not coerce to an integer.
    #[error("Can't parse region coordinate: {0:?}")]
    InvalidCoordinate(String),

    /// IO error occurred while reading the table.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
