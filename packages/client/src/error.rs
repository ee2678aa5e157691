//! Error types for the terminal client.

use thiserror::Error;

/// Client-specific errors
#[derive(Debug, Error)]
pub enum ClientError {
    /// Could not open the WebSocket connection
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// The server went away while the session was running
    #[error("Connection lost")]
    ConnectionLost,

    #[error("Failed to encode event: {0}")]
    Encode(#[from] serde_json::Error),
}
