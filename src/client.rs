//! Admin API client for backend communication.
//!
//! [`AdminClient`] speaks the backend's JSON contract over any
//! [`HttpClient`] and implements [`RecordProvider`] for the controller.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::adapters::ReqwestHttpClient;
use crate::error::{AdminError, AdminResult, NetworkError};
use crate::models::{
    Club, ClubDraft, ClubList, ClubUser, ClubUserList, EmployeePage, StandardResponse, UserDraft,
};
use crate::traits::{HttpClient, Method, RecordProvider, Request, Response};

/// Backend used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Client for the employee and club endpoints.
///
/// # Example
///
/// ```ignore
/// use rollcall::client::AdminClient;
/// use rollcall::traits::RecordProvider;
///
/// let client = AdminClient::new("http://localhost:8000");
/// let page = client.list_employees(1, 7).await?;
/// println!("{} employees", page.total);
/// ```
#[derive(Debug, Clone)]
pub struct AdminClient<C: HttpClient = ReqwestHttpClient> {
    base_url: String,
    http: C,
}

impl AdminClient<ReqwestHttpClient> {
    /// Create a client for `base_url` using reqwest.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http(base_url, ReqwestHttpClient::new())
    }
}

impl<C: HttpClient> AdminClient<C> {
    /// Create a client over a specific transport.
    ///
    /// # Arguments
    /// * `base_url` - Backend origin; a trailing slash is ignored
    /// * `http` - Transport to send requests with
    pub fn with_http(base_url: impl Into<String>, http: C) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, http }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The transport, mostly useful for inspecting mocks in tests.
    pub fn http(&self) -> &C {
        &self.http
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Sends `request` and turns transport failures and non-2xx statuses
    /// into errors.
    async fn execute(&self, request: Request) -> AdminResult<Response> {
        debug!(method = %request.method, url = %request.url, "sending");
        let url = request.url.clone();
        let response = self
            .http
            .send(request)
            .await
            .map_err(|e| NetworkError::from_http(e, &url))?;
        check_status(response)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, what: &'static str) -> AdminResult<T> {
        let response = self.execute(Request::get(self.url(path))).await?;
        response.json().map_err(|e| AdminError::decode(what, e))
    }

    /// Sends a write and unwraps the `{FLAG, MESSAGE, ...}` envelope.
    async fn send_envelope(&self, request: Request) -> AdminResult<StandardResponse> {
        let url = request.url.clone();
        let envelope: StandardResponse = self
            .execute(request)
            .await?
            .json()
            .map_err(|e| AdminError::decode("response envelope", e))?;

        if !envelope.flag {
            warn!(%url, message = %envelope.message, "backend rejected request");
            return Err(AdminError::rejected(envelope.message));
        }
        Ok(envelope)
    }

    fn json_body<T: serde::Serialize>(value: &T, what: &'static str) -> AdminResult<String> {
        serde_json::to_string(value).map_err(|e| AdminError::decode(what, e))
    }
}

/// Turns non-2xx responses into [`NetworkError::HttpStatus`].
///
/// FastAPI error bodies carry the reason in `detail`; anything else is
/// passed through as text.
fn check_status(response: Response) -> AdminResult<Response> {
    if response.is_success() {
        return Ok(response);
    }

    let message = response
        .json::<serde_json::Value>()
        .ok()
        .and_then(|body| body.get("detail").and_then(|d| d.as_str()).map(String::from))
        .or_else(|| response.text().ok())
        .unwrap_or_else(|| "Unknown error".to_string());

    Err(NetworkError::HttpStatus {
        status: response.status,
        message,
    }
    .into())
}

impl Default for AdminClient<ReqwestHttpClient> {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait]
impl<C: HttpClient> RecordProvider for AdminClient<C> {
    async fn list_employees(&self, page: u32, size: u32) -> AdminResult<EmployeePage> {
        let path = format!("/employees?page={}&size={}", page, size);
        self.get_json(&path, "employee page").await
    }

    async fn delete_employee(&self, employee_id: &str) -> AdminResult<String> {
        // Employee ids are backend strings and may hold `/`, `?` or `#`
        let url = self.url(&format!("/employees/{}", urlencoding::encode(employee_id)));
        let envelope = self.send_envelope(Request::delete(url)).await?;
        Ok(envelope.message)
    }

    async fn list_clubs(&self) -> AdminResult<Vec<Club>> {
        let list: ClubList = self.get_json("/clubs", "club list").await?;
        Ok(list.clubs)
    }

    async fn create_club(&self, draft: &ClubDraft) -> AdminResult<Option<Club>> {
        let body = Self::json_body(draft, "club draft")?;
        let request = Request::with_json(Method::Post, self.url("/clubs"), body);
        let envelope = self.send_envelope(request).await?;
        Ok(envelope.club())
    }

    async fn update_club(&self, club_id: i64, draft: &ClubDraft) -> AdminResult<Option<Club>> {
        let body = Self::json_body(draft, "club draft")?;
        let url = self.url(&format!("/clubs/{}", club_id));
        let envelope = self
            .send_envelope(Request::with_json(Method::Put, url, body))
            .await?;
        Ok(envelope.club())
    }

    async fn delete_club(&self, club_id: i64) -> AdminResult<()> {
        let url = self.url(&format!("/clubs/{}", club_id));
        self.send_envelope(Request::delete(url)).await?;
        Ok(())
    }

    async fn list_club_users(&self, club_id: i64) -> AdminResult<Vec<ClubUser>> {
        let path = format!("/clubs/{}/users", club_id);
        let list: ClubUserList = self.get_json(&path, "club members").await?;
        Ok(list.users)
    }

    async fn update_user(&self, user_id: i64, draft: &UserDraft) -> AdminResult<String> {
        let body = Self::json_body(draft, "user draft")?;
        let url = self.url(&format!("/users/{}", user_id));
        let envelope = self
            .send_envelope(Request::with_json(Method::Put, url, body))
            .await?;
        Ok(envelope.message)
    }

    async fn delete_user(&self, user_id: i64) -> AdminResult<()> {
        let url = self.url(&format!("/users/{}", user_id));
        self.send_envelope(Request::delete(url)).await?;
        Ok(())
    }
}
