//! Report registry error types.

use thiserror::Error;
use timesheet_shared::AppError;

use crate::filter::DescriptorError;

/// Errors that can occur while registering or evaluating reports.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// No report is registered under the name.
    #[error("Report not found: {0}")]
    UnknownReport(String),

    /// A report is already registered under the name.
    #[error("Report already registered: {0}")]
    AlreadyRegistered(String),

    /// The report's descriptor could not be built.
    #[error("Failed to build filters: {0}")]
    Descriptor(#[from] DescriptorError),
}

impl From<RegistryError> for AppError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::UnknownReport(_) => Self::NotFound(err.to_string()),
            RegistryError::AlreadyRegistered(_) => Self::Conflict(err.to_string()),
            RegistryError::Descriptor(DescriptorError::Localization(ref inner)) => {
                Self::Localization(inner.to_string())
            }
            RegistryError::Descriptor(_) => Self::Internal(err.to_string()),
        }
    }
}
