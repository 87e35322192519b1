//! Localization error types.

use std::path::PathBuf;

use thiserror::Error;
use timesheet_shared::AppError;

/// Errors that can occur while loading a catalog or translating a label.
#[derive(Debug, Error)]
pub enum LocalizeError {
    /// Strict catalog has no entry for the label.
    #[error("No translation for label: {0}")]
    MissingTranslation(String),

    /// Catalog file could not be read.
    #[error("Failed to read translation catalog {path}: {source}")]
    Io {
        /// Catalog path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Catalog content is not a JSON object of strings.
    #[error("Invalid translation catalog: {0}")]
    InvalidCatalog(#[from] serde_json::Error),
}

impl From<LocalizeError> for AppError {
    fn from(err: LocalizeError) -> Self {
        Self::Localization(err.to_string())
    }
}
