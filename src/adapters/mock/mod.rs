//! Mock implementations for testing.
//!
//! These let the controller and the client be exercised without a network
//! or a terminal.
//!
//! # Available Mocks
//!
//! - [`MockHttpClient`] - HTTP client with configurable responses
//! - [`RecordingRenderer`] - Renderer that records every call

pub mod http;
pub mod renderer;

pub use http::{MockHttpClient, MockResponse, RecordedRequest};
pub use renderer::{RecordingRenderer, RenderCall};
