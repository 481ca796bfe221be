use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, LoadError>;

/// Reasons the player dataset could not be turned into a lookup table.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("The file '{}' was not found. Please check the path and try again.", .0.display())]
    NotFound(PathBuf),

    #[error("Missing expected column(s) {missing:?}; available columns: {found:?}")]
    MissingColumns {
        missing: Vec<&'static str>,
        found: Vec<String>,
    },

    #[error("Malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
