//! Error types for the notification relay

use thiserror::Error;

/// Errors raised while accepting an inbound notification
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IngestError {
    /// The body could not be read as a JSON object
    #[error("malformed payload: {0}")]
    MalformedPayload(String),
}

/// Errors raised while reading process configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT value '{value}': expected an integer between 0 and 65535")]
    InvalidPort { value: String },

    #[error("invalid NOTIF_CAPACITY value '{value}': expected a positive integer")]
    InvalidCapacity { value: String },
}
