//! HTTP transport seam.
//!
//! The admin client builds [`Request`]s and hands them to an [`HttpClient`];
//! production uses reqwest, tests use the mock in `adapters::mock`.

use std::fmt;

use async_trait::async_trait;
use bytes::Bytes;

/// The verbs the backend's record API uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One outgoing request. Bodies are always JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: Method,
    pub url: String,
    pub body: Option<String>,
}

impl Request {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            url: url.into(),
            body: None,
        }
    }

    pub fn delete(url: impl Into<String>) -> Self {
        Self {
            method: Method::Delete,
            url: url.into(),
            body: None,
        }
    }

    /// A request carrying a JSON body, e.g. a club draft.
    pub fn with_json(method: Method, url: impl Into<String>, body: String) -> Self {
        Self {
            method,
            url: url.into(),
            body: Some(body),
        }
    }
}

/// Status and raw body of whatever the server answered.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    pub body: Bytes,
}

impl Response {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// A 200 whose body is the serialized `value`.
    pub fn json_ok(value: &serde_json::Value) -> Self {
        Self::new(200, value.to_string())
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn text(&self) -> Result<String, std::string::FromUtf8Error> {
        String::from_utf8(self.body.to_vec())
    }

    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

/// Failures below HTTP: the request never produced a status.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HttpError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Request timeout: {0}")]
    Timeout(String),
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    /// The status arrived but the body could not be read.
    #[error("Body read failed: {0}")]
    Body(String),
    #[error("HTTP error: {0}")]
    Other(String),
}

/// Sends requests to the backend.
///
/// Any status the server produced is an `Ok` response, 4xx and 5xx
/// included; the caller decides what a status means.
///
/// # Example
///
/// ```ignore
/// use rollcall::traits::{HttpClient, Request};
///
/// let response = client.send(Request::get("http://localhost:8000/clubs")).await?;
/// assert!(response.is_success());
/// ```
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn send(&self, request: Request) -> Result<Response, HttpError>;
}
