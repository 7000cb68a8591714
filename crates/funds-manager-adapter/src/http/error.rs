/*
[INPUT]:  Error sources (key material, clock, HTTP transport, remote API, serialization)
[OUTPUT]: Structured error types carrying enough detail to diagnose a failed call
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the funds manager adapter
#[derive(Error, Debug)]
pub enum FundsManagerError {
    /// Symmetric key is not valid hex
    #[error("Invalid HMAC key encoding: {0}")]
    InvalidKeyEncoding(String),

    /// Asymmetric key is not valid PEM/RSA material
    #[error("Failed to parse private key: {0}")]
    KeyParse(String),

    /// System clock could not be read
    #[error("System clock unavailable: {0}")]
    Clock(String),

    /// Network-level failure (connect, timeout, DNS, TLS)
    #[error("HTTP transport failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Remote service answered with a non-2xx status
    #[error("Remote rejected request ({status}): {body}")]
    RemoteRejection { status: StatusCode, body: String },

    /// `host + path` did not form a valid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl FundsManagerError {
    /// Check if the error was caused by malformed key material
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            FundsManagerError::InvalidKeyEncoding(_) | FundsManagerError::KeyParse(_)
        )
    }

    /// Check if the remote service rejected the request
    pub fn is_remote_rejection(&self) -> bool {
        matches!(self, FundsManagerError::RemoteRejection { .. })
    }

    /// HTTP status of a remote rejection, if any
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            FundsManagerError::RemoteRejection { status, .. } => Some(*status),
            FundsManagerError::Transport(err) => err.status(),
            _ => None,
        }
    }

    /// Create a remote rejection from status code and raw response text
    pub fn remote_rejection(status: StatusCode, body: impl Into<String>) -> Self {
        FundsManagerError::RemoteRejection {
            status,
            body: body.into(),
        }
    }
}

/// Result type alias for funds manager operations
pub type Result<T> = std::result::Result<T, FundsManagerError>;
