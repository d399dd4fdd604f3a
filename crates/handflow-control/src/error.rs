//! Error types for the integration shell
use thiserror::Error;

/// Control system errors
#[derive(Error, Debug)]
pub enum ControlError {
    /// Action performer failure (volume, brightness or playback API
    /// unavailable). Caught and logged at the dispatch boundary.
    #[error("performer error: {0}")]
    Performer(String),

    /// Landmark source failure
    #[error("source error: {0}")]
    Source(String),

    /// Command or event channel disconnected
    #[error("channel disconnected: {0}")]
    ChannelClosed(String),

    /// HTTP serving error
    #[error("HTTP error: {0}")]
    Http(String),

    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for control operations
pub type Result<T> = std::result::Result<T, ControlError>;
