//! Error types for ReelTime.

use thiserror::Error;

/// Main error type for timecode operations.
#[derive(Error, Debug)]
pub enum TimecodeError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Invalid timecode: {0}")]
    InvalidTimecode(String),

    #[error("Negative timecodes not supported")]
    NegativeTimecode,

    #[error("Rollover arithmetic exceeds max permitted ({max_hours} hours)")]
    RolloverExceeded { max_hours: f64 },

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Result type alias for timecode operations.
pub type Result<T> = std::result::Result<T, TimecodeError>;
