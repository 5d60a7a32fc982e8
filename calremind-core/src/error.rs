//! Error types for calremind.

use thiserror::Error;

/// Errors that can occur in calremind operations.
#[derive(Error, Debug)]
pub enum CalremindError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Appointment not found: {0}")]
    AppointmentNotFound(String),

    #[error("Invalid date/time '{0}'. Expected YYYY-MM-DD HH:MM")]
    InvalidDateTime(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl CalremindError {
    /// Whether the error rejected the caller's input (as opposed to a storage failure).
    /// Nothing has been written when this returns true.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            CalremindError::AppointmentNotFound(_) | CalremindError::InvalidDateTime(_)
        )
    }
}

/// Result type alias for calremind operations.
pub type CalremindResult<T> = Result<T, CalremindError>;
