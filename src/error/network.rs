//! Network-related error types.
//!
//! These cover everything that can go wrong between issuing a request to the
//! backend and having a response body in hand.

use thiserror::Error;

use crate::traits::HttpError;

/// Network-specific error variants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetworkError {
    /// Connection to the backend failed.
    #[error("Connection failed to '{url}': {message}")]
    ConnectionFailed { url: String, message: String },

    /// Request timed out.
    #[error("Request to '{url}' timed out")]
    Timeout { url: String },

    /// HTTP status error (non-2xx response).
    #[error("HTTP {status} error: {message}")]
    HttpStatus { status: u16, message: String },

    /// The body could not be decoded into the expected shape.
    #[error("Invalid response: {message}")]
    InvalidResponse { message: String },

    /// Generic network error.
    #[error("Network error: {message}")]
    Other { message: String },
}

impl NetworkError {
    /// Classify a transport error raised while requesting `url`.
    pub fn from_http(err: HttpError, url: &str) -> Self {
        match err {
            HttpError::ConnectionFailed(message) => NetworkError::ConnectionFailed {
                url: url.to_string(),
                message,
            },
            HttpError::Timeout(_) => NetworkError::Timeout {
                url: url.to_string(),
            },
            HttpError::InvalidUrl(message) => NetworkError::Other {
                message: format!("invalid URL '{}': {}", url, message),
            },
            HttpError::Body(message) => NetworkError::InvalidResponse { message },
            HttpError::Other(message) => NetworkError::Other { message },
        }
    }

    /// Check if this error is likely transient.
    pub fn is_retryable(&self) -> bool {
        match self {
            NetworkError::ConnectionFailed { .. } => true,
            NetworkError::Timeout { .. } => true,
            NetworkError::HttpStatus { status, .. } => {
                *status >= 500 || *status == 429 || *status == 408
            }
            NetworkError::InvalidResponse { .. } => false,
            NetworkError::Other { .. } => false,
        }
    }

    /// Returns true if the backend answered at all.
    pub fn is_server_side(&self) -> bool {
        matches!(self, NetworkError::HttpStatus { .. })
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            NetworkError::ConnectionFailed { .. } | NetworkError::Timeout { .. } => {
                "Unable to reach the server. Please check your connection.".to_string()
            }
            NetworkError::HttpStatus { status, .. } => match *status {
                404 => "The requested record was not found.".to_string(),
                500..=599 => "The server is experiencing issues.".to_string(),
                _ => format!("The server returned an error (HTTP {}).", status),
            },
            NetworkError::InvalidResponse { .. } => {
                "Received an invalid response from the server.".to_string()
            }
            NetworkError::Other { message } => format!("Network error: {}", message),
        }
    }
}
