//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - HTTP transport (GET, POST, PUT, DELETE)
//! - [`RecordProvider`] - The backend's employee/club API
//! - [`Renderer`] - Paints controller state; every binding is optional

pub mod http;
pub mod provider;
pub mod renderer;

pub use http::{HttpClient, HttpError, Method, Request, Response};
pub use provider::RecordProvider;
pub use renderer::{ListSlot, Placeholder, Renderer};
