//! Error types for the Classroom client.

use classroom_core::GatewayError;
use thiserror::Error;

/// Errors that can occur when using the Classroom client.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request failed before a response arrived.
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned a non-success status.
    #[error("Server error ({status}): {}", message.as_deref().unwrap_or("no message"))]
    ServerError {
        /// HTTP status code.
        status: u16,
        /// `message` field of the JSON error body, if present.
        message: Option<String>,
    },

    /// Server returned an invalid or unparseable response.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl From<ClientError> for GatewayError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Request(e) => GatewayError::Transport(e.to_string()),
            ClientError::ServerError { status, message } => {
                GatewayError::Server { status, message }
            }
            ClientError::InvalidResponse(msg) => GatewayError::Decode(msg),
        }
    }
}
