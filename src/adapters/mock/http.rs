//! Scripted HTTP transport for tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::traits::{HttpClient, HttpError, Request, Response};

/// A request as the mock saw it.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// `GET`, `POST`, `PUT` or `DELETE`
    pub method: String,
    pub url: String,
    /// JSON body of writes
    pub body: Option<String>,
}

/// What the mock answers with.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Any status the server could produce
    Success(Response),
    /// The request never got a status
    Error(HttpError),
}

impl MockResponse {
    /// A 200 with `value` as the body.
    pub fn json(value: serde_json::Value) -> Self {
        MockResponse::Success(Response::json_ok(&value))
    }

    pub fn status(status: u16, body: &str) -> Self {
        MockResponse::Success(Response::new(status, body.to_string()))
    }
}

#[derive(Debug, Default)]
struct Script {
    by_method: HashMap<(String, String), MockResponse>,
    by_url: HashMap<String, MockResponse>,
    fallback: Option<MockResponse>,
    seen: Vec<RecordedRequest>,
}

impl Script {
    /// Exact method + URL, then exact URL, then the longest URL prefix, then
    /// the fallback. The longest prefix keeps `/clubs` from answering
    /// `/clubs/1/users`.
    fn lookup(&self, method: &str, url: &str) -> Option<MockResponse> {
        self.by_method
            .get(&(method.to_string(), url.to_string()))
            .or_else(|| self.by_url.get(url))
            .or_else(|| {
                self.by_url
                    .iter()
                    .filter(|(prefix, _)| url.starts_with(prefix.as_str()))
                    .max_by_key(|(prefix, _)| prefix.len())
                    .map(|(_, response)| response)
            })
            .or(self.fallback.as_ref())
            .cloned()
    }
}

/// An [`HttpClient`] answering from a script and recording every request.
///
/// Clones share the script, so a test can keep one handle while the
/// [`AdminClient`](crate::client::AdminClient) owns another.
///
/// # Example
///
/// ```ignore
/// let http = MockHttpClient::new();
/// http.set_response("http://api/clubs", MockResponse::json(json!({"clubs": []})));
/// let client = AdminClient::with_http("http://api", http.clone());
/// client.list_clubs().await?;
/// assert_eq!(http.requests_matching("GET", "/clubs").len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    script: Arc<Mutex<Script>>,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    fn script(&self) -> std::sync::MutexGuard<'_, Script> {
        // A panicking test poisons the lock; the script itself is still fine
        self.script.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Answer `url` (or anything under it) for every method.
    pub fn set_response(&self, url: &str, response: MockResponse) {
        self.script().by_url.insert(url.to_string(), response);
    }

    /// Answer exactly `method url`.
    pub fn set_method_response(&self, method: &str, url: &str, response: MockResponse) {
        self.script()
            .by_method
            .insert((method.to_string(), url.to_string()), response);
    }

    /// Answer anything not otherwise scripted.
    pub fn set_default_response(&self, response: MockResponse) {
        self.script().fallback = Some(response);
    }

    pub fn get_requests(&self) -> Vec<RecordedRequest> {
        self.script().seen.clone()
    }

    /// Requests with `method` whose URL contains `fragment`.
    pub fn requests_matching(&self, method: &str, fragment: &str) -> Vec<RecordedRequest> {
        self.script()
            .seen
            .iter()
            .filter(|r| r.method == method && r.url.contains(fragment))
            .cloned()
            .collect()
    }

    pub fn clear_requests(&self) {
        self.script().seen.clear();
    }

    pub fn clear_responses(&self) {
        let mut script = self.script();
        script.by_method.clear();
        script.by_url.clear();
        script.fallback = None;
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn send(&self, request: Request) -> Result<Response, HttpError> {
        let method = request.method.as_str();
        let mut script = self.script();
        let answer = script.lookup(method, &request.url);
        script.seen.push(RecordedRequest {
            method: method.to_string(),
            url: request.url.clone(),
            body: request.body,
        });

        match answer {
            Some(MockResponse::Success(response)) => Ok(response),
            Some(MockResponse::Error(err)) => Err(err),
            None => Err(HttpError::Other(format!(
                "no scripted response for {} {}",
                method, request.url
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::Method;

    #[tokio::test]
    async fn test_records_and_answers() {
        let http = MockHttpClient::new();
        http.set_response("http://api/clubs", MockResponse::status(200, "Hello"));

        let response = http.send(Request::get("http://api/clubs")).await.unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(response.text().unwrap(), "Hello");
        let seen = http.get_requests();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].method, "GET");
        assert_eq!(seen[0].url, "http://api/clubs");
    }

    #[tokio::test]
    async fn test_scripted_transport_error() {
        let http = MockHttpClient::new();
        http.set_response(
            "http://api/employees",
            MockResponse::Error(HttpError::ConnectionFailed("refused".to_string())),
        );

        let result = http.send(Request::get("http://api/employees")).await;
        assert_eq!(
            result.unwrap_err(),
            HttpError::ConnectionFailed("refused".to_string())
        );
    }

    #[tokio::test]
    async fn test_method_specific_response_wins() {
        let http = MockHttpClient::new();
        http.set_response("http://api/clubs", MockResponse::status(200, "list"));
        http.set_method_response("POST", "http://api/clubs", MockResponse::status(201, "made"));

        let listed = http.send(Request::get("http://api/clubs")).await.unwrap();
        let created = http
            .send(Request::with_json(Method::Post, "http://api/clubs", "{}".to_string()))
            .await
            .unwrap();

        assert_eq!(listed.status, 200);
        assert_eq!(created.status, 201);
        let posts = http.requests_matching("POST", "/clubs");
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].body.as_deref(), Some("{}"));
    }

    #[tokio::test]
    async fn test_longest_prefix_match() {
        let http = MockHttpClient::new();
        http.set_response("http://api/clubs", MockResponse::status(200, "clubs"));
        http.set_response("http://api/clubs/1/users", MockResponse::status(200, "users"));

        let response = http
            .send(Request::get("http://api/clubs/1/users?x=1"))
            .await
            .unwrap();
        assert_eq!(response.text().unwrap(), "users");
    }

    #[tokio::test]
    async fn test_unscripted_request_fails() {
        let http = MockHttpClient::new();
        let result = http.send(Request::delete("http://api/missing")).await;
        assert!(matches!(result, Err(HttpError::Other(_))));
        assert_eq!(http.requests_matching("DELETE", "/missing").len(), 1);
    }

    #[tokio::test]
    async fn test_fallback_and_reset() {
        let http = MockHttpClient::new();
        http.set_default_response(MockResponse::status(404, "Not Found"));
        let response = http.send(Request::get("http://api/anything")).await.unwrap();
        assert_eq!(response.status, 404);

        http.clear_responses();
        assert!(http.send(Request::get("http://api/anything")).await.is_err());
    }

    #[tokio::test]
    async fn test_clones_share_script() {
        let http = MockHttpClient::new();
        http.set_default_response(MockResponse::status(200, ""));

        let cloned = http.clone();
        cloned.send(Request::get("http://api/x")).await.unwrap();

        assert_eq!(http.get_requests().len(), 1);
        http.clear_requests();
        assert!(cloned.get_requests().is_empty());
    }
}
