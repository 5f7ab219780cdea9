//! Error types for the volo ecosystem.

use thiserror::Error;

/// Errors that can occur in volo operations.
#[derive(Error, Debug)]
pub enum VoloError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Volunteers needed must be a number (got '{0}')")]
    VolunteerCount(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl VoloError {
    /// True for input problems the caller can fix and retry; the store
    /// is untouched when `add` fails with one of these.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            VoloError::MissingField(_) | VoloError::VolunteerCount(_)
        )
    }
}

/// Result type alias for volo operations.
pub type VoloResult<T> = Result<T, VoloError>;
