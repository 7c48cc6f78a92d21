//! Error handling for rollcall.
//!
//! - **Error Categories**: how a failure is surfaced (inline or alert)
//! - **Network Errors**: transport and HTTP status failures
//! - **Unified Error Type**: `AdminError` for every backend operation
//! - **Result Type Alias**: `AdminResult<T>`
//!
//! | Category   | Source                                   | Surfaced as        |
//! |------------|------------------------------------------|--------------------|
//! | Network    | connection refused, DNS, timeout         | inline placeholder |
//! | Server     | non-2xx HTTP status                      | inline placeholder |
//! | Validation | envelope `FLAG: false`, local form check | blocking alert     |
//! | Client     | undecodable body                         | inline placeholder |
//!
//! An empty list is not an error; it is rendered as an informational
//! placeholder by the controller.

mod admin_error;
mod category;
mod network;

pub use admin_error::AdminError;
pub use category::ErrorCategory;
pub use network::NetworkError;

/// Type alias for Results using [`AdminError`].
pub type AdminResult<T> = Result<T, AdminError>;
