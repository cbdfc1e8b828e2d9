//! Error types for gateway requests.

use thiserror::Error;

/// Errors that can occur when fetching from the monitoring gateway.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The gateway answered with a non-success status.
    #[error("HTTP error: {0}")]
    Http(String),

    /// Failed to parse the response body.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Could not reach the gateway.
    #[error("Connection failed: {0}")]
    Connection(String),

    /// Timeout waiting for the gateway.
    #[error("Request timed out")]
    Timeout,
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ClientError::Timeout
        } else if err.is_connect() {
            ClientError::Connection(err.to_string())
        } else if err.is_decode() {
            ClientError::Parse(err.to_string())
        } else {
            ClientError::Http(err.to_string())
        }
    }
}
