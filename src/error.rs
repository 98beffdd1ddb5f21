//! Error types for the session, dispatch table and settings.
//!
//! Event sequencing violations are not errors: an event that arrives in the
//! wrong state is a silent no-op.

use crate::dispatch::StateGuard;
use crate::events::EventKind;
use thiserror::Error;

/// Contract violations raised while handling an event
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Algorithm name not present in the catalog
    #[error("unknown algorithm: {0:?}")]
    UnknownAlgorithm(String),

    /// Size is zero or above the supported maximum
    #[error("invalid grid size: {0}")]
    InvalidSize(usize),

    /// Size is valid but not offered by the size picker
    #[error("grid size not in catalog: {0}")]
    UnknownSize(usize),
}

/// Result type alias for session operations
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors raised while building the dispatch table
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error("route already registered for {kind:?} in {guard:?}")]
    DuplicateRoute { kind: EventKind, guard: StateGuard },
}

/// Errors that can occur while loading or saving settings
#[derive(Error, Debug)]
pub enum SettingsError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Settings parsed but failed validation
    #[error("Invalid settings: {0}")]
    Invalid(String),
}

/// Result type alias for settings operations
pub type SettingsResult<T> = Result<T, SettingsError>;

impl From<String> for SettingsError {
    fn from(s: String) -> Self {
        SettingsError::Invalid(s)
    }
}

/// Errors raised while assembling the application
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}
