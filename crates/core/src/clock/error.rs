//! Clock error types.

use thiserror::Error;
use timesheet_shared::AppError;

/// Errors that can occur while configuring a clock.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClockError {
    /// The timezone name is not in the IANA database.
    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),
}

impl From<ClockError> for AppError {
    fn from(err: ClockError) -> Self {
        Self::Configuration(err.to_string())
    }
}
