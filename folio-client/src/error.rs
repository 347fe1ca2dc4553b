//! Client error types

use shared::error::ErrorCode;
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// No response received (connect, timeout, transport)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Response body could not be decoded
    #[error("Parse error: {0}")]
    Parse(String),

    /// Server answered with a failure envelope
    #[error("API error {code} ({status}): {message}")]
    Api {
        code: String,
        message: String,
        status: u16,
    },

    /// Success envelope without the expected payload
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl ClientError {
    /// Typed error code of an API failure, if known
    pub fn error_code(&self) -> Option<ErrorCode> {
        match self {
            ClientError::Api { code, .. } => code.parse().ok(),
            _ => None,
        }
    }

    /// Whether the request never reached the server
    pub fn is_network(&self) -> bool {
        matches!(self, ClientError::Network(_))
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
