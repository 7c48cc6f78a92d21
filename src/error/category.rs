//! Error category classification.
//!
//! Categories label failures in the logs; they do not change how the
//! dashboard surfaces them.

use std::fmt;

/// High-level categorization of errors for handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Transport failures (connection refused, DNS, timeout).
    Network,

    /// The backend answered with a non-success HTTP status.
    Server,

    /// The backend rejected a write (`FLAG: false`) or the input failed a
    /// local check before it was sent.
    Validation,

    /// The response could not be understood.
    Client,
}

impl ErrorCategory {
    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "network",
            ErrorCategory::Server => "server",
            ErrorCategory::Validation => "validation",
            ErrorCategory::Client => "client",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
