//! Unified error type for backend operations.

use thiserror::Error;

use super::category::ErrorCategory;
use super::network::NetworkError;

/// Unified error type for everything the dashboard asks of the backend.
///
/// Errors are `Clone` so that they can be carried back to the event loop
/// inside an [`AppMessage`](crate::app::AppMessage).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdminError {
    /// The request never produced a usable response.
    #[error(transparent)]
    Network(#[from] NetworkError),

    /// The backend understood the request and refused it (`FLAG: false`),
    /// or local input checks failed before sending.
    #[error("Rejected: {message}")]
    Rejected { message: String },

    /// The response body did not match the expected shape.
    #[error("Failed to decode {what}: {message}")]
    Decode { what: &'static str, message: String },
}

impl AdminError {
    /// Builds a rejection with the message that should be shown to the user.
    pub fn rejected(message: impl Into<String>) -> Self {
        AdminError::Rejected {
            message: message.into(),
        }
    }

    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            AdminError::Network(err) if err.is_server_side() => ErrorCategory::Server,
            AdminError::Network(NetworkError::InvalidResponse { .. }) => ErrorCategory::Client,
            AdminError::Network(_) => ErrorCategory::Network,
            AdminError::Rejected { .. } => ErrorCategory::Validation,
            AdminError::Decode { .. } => ErrorCategory::Client,
        }
    }

    /// Returns true if repeating the same request may succeed.
    ///
    /// Nothing retries on its own; a retryable load failure only gets a
    /// hint telling the user to reload.
    pub fn is_retryable(&self) -> bool {
        match self {
            AdminError::Network(err) => err.is_retryable(),
            AdminError::Rejected { .. } | AdminError::Decode { .. } => false,
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            AdminError::Network(err) => err.user_message(),
            AdminError::Rejected { message } => message.clone(),
            AdminError::Decode { .. } => {
                "Received an invalid response from the server.".to_string()
            }
        }
    }
}

impl AdminError {
    pub(crate) fn decode(what: &'static str, err: serde_json::Error) -> Self {
        AdminError::Decode {
            what,
            message: err.to_string(),
        }
    }
}
