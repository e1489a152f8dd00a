//! Error types for transports.

use thiserror::Error;

/// Errors a [`Transport`](super::Transport) can report.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    /// The request could not be sent or no response came back.
    #[error("{0}")]
    Request(String),

    /// The server answered with a non-success status.
    #[error("Request failed with status code {0}")]
    Status(u16),

    /// The response body was not valid JSON.
    #[error("Invalid response body: {0}")]
    Decode(String),
}

impl From<&str> for TransportError {
    fn from(msg: &str) -> Self {
        TransportError::Request(msg.to_string())
    }
}
