// Typed errors with thiserror. Surface meaningful messages to JS.
// Animation itself never fails; only the engine boundary and curve construction do.

use thiserror::Error;

/// Engine error types.
#[derive(Error, Debug)]
pub enum MotionError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid curve at point {index}: {reason}")]
    InvalidCurve { index: usize, reason: String },

    #[error("Unknown section: {0}")]
    UnknownSection(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for MotionError {
    fn from(err: serde_json::Error) -> Self {
        MotionError::Serialization(err.to_string())
    }
}
