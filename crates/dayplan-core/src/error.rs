//! Core error types for dayplan-core.
//!
//! Fatal request-level failures surface here; per-task problems (bad
//! deadlines, unschedulable tasks) are recovered locally by the engine
//! and reported as warnings instead.

use thiserror::Error;

/// Core error type for dayplan-core.
#[derive(Error, Debug)]
pub enum ScheduleError {
    /// A wall-clock time string could not be parsed
    #[error("Invalid wall-clock time '{value}': {reason}")]
    InvalidTime { value: String, reason: String },

    /// The routine configuration is unusable as a whole
    #[error("Invalid routine: {0}")]
    InvalidRoutine(String),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ScheduleError {
    /// Construct an `InvalidTime` error from a value/reason pair.
    pub fn invalid_time(value: impl Into<String>, reason: impl Into<String>) -> Self {
        ScheduleError::InvalidTime {
            value: value.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for ScheduleError
pub type Result<T, E = ScheduleError> = std::result::Result<T, E>;
