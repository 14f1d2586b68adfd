//! Error types for remote sync

use thiserror::Error;

/// Why a remote sync attempt failed
#[derive(Debug, Error)]
pub enum SyncError {
    /// Payload could not be encoded
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Connection, DNS or TLS failure before a response arrived
    #[error("request failed: {0}")]
    Request(String),

    /// Transport gave up waiting
    #[error("request timed out")]
    Timeout,

    /// Remote store answered with a non-success status
    #[error("remote store rejected entry: HTTP {0}")]
    Status(u16),

    /// HTTP client could not be constructed
    #[error("client setup failed: {0}")]
    Client(String),
}

impl From<reqwest::Error> for SyncError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if let Some(status) = err.status() {
            Self::Status(status.as_u16())
        } else {
            Self::Request(err.to_string())
        }
    }
}
