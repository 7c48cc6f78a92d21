//! Production transport over reqwest.

use async_trait::async_trait;
use std::time::Duration;

use crate::traits::{HttpClient, HttpError, Method, Request, Response};

/// [`HttpClient`] backed by a shared `reqwest::Client`.
///
/// 4xx and 5xx answers come back as ordinary [`Response`]s.
#[derive(Debug, Clone, Default)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// A client whose requests give up after `timeout`.
    pub fn with_timeout(timeout: Duration) -> Result<Self, HttpError> {
        reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map(|client| Self { client })
            .map_err(|e| HttpError::Other(e.to_string()))
    }

    fn builder(&self, request: &Request) -> reqwest::RequestBuilder {
        let builder = match request.method {
            Method::Get => self.client.get(&request.url),
            Method::Post => self.client.post(&request.url),
            Method::Put => self.client.put(&request.url),
            Method::Delete => self.client.delete(&request.url),
        };
        match &request.body {
            Some(body) => builder
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(body.clone()),
            None => builder,
        }
    }
}

/// Sorts a reqwest failure into the transport error kinds.
fn classify(err: reqwest::Error) -> HttpError {
    let message = err.to_string();
    if err.is_timeout() {
        HttpError::Timeout(message)
    } else if err.is_connect() {
        HttpError::ConnectionFailed(message)
    } else if err.is_builder() {
        HttpError::InvalidUrl(message)
    } else if err.is_body() || err.is_decode() {
        HttpError::Body(message)
    } else {
        HttpError::Other(message)
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn send(&self, request: Request) -> Result<Response, HttpError> {
        let response = self.builder(&request).send().await.map_err(classify)?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(classify)?;
        Ok(Response::new(status, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_timeout_builds() {
        assert!(ReqwestHttpClient::with_timeout(Duration::from_secs(5)).is_ok());
    }

    #[test]
    fn test_body_sets_json_content_type() {
        let client = ReqwestHttpClient::new();
        let request = Request::with_json(
            Method::Put,
            "http://localhost:8000/clubs/1",
            r#"{"club_name":"Chess"}"#.to_string(),
        );

        let built = client.builder(&request).build().unwrap();
        assert_eq!(built.method(), reqwest::Method::PUT);
        assert_eq!(
            built.headers().get(reqwest::header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }

    #[tokio::test]
    async fn test_invalid_url() {
        let client = ReqwestHttpClient::new();
        let result = client.send(Request::get("not-a-valid-url")).await;
        assert!(matches!(
            result,
            Err(HttpError::InvalidUrl(_)) | Err(HttpError::Other(_))
        ));
    }

    #[tokio::test]
    async fn test_connection_refused() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let client = ReqwestHttpClient::new();
        let result = client
            .send(Request::delete(format!("http://127.0.0.1:{}/clubs/1", port)))
            .await;
        assert!(matches!(
            result,
            Err(HttpError::ConnectionFailed(_)) | Err(HttpError::Other(_))
        ));
    }
}
