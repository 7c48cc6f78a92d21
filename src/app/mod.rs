//! The dashboard controller.
//!
//! This module contains the [`App`] struct and related types:
//! - [`RequestToken`] - Sequences fetches so stale responses can be dropped
//! - [`AppMessage`] - Results of spawned requests, delivered to the event loop
//!
//! `App` owns the pagination and tab state. Requests run on spawned tokio
//! tasks and report back through an unbounded channel; every mutation happens
//! in [`App::handle_message`] or in the user-intent methods, on the loop.

mod clubs;
mod handlers;
mod messages;
mod navigation;
mod types;

pub use clubs::NO_CLUB_SELECTED;
pub use messages::AppMessage;
pub use types::{RequestToken, RequestTokens};

use std::future::Future;
use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::debug;

use crate::error::AdminResult;
use crate::traits::{ListSlot, RecordProvider, Renderer};
use crate::view_state::{PageState, TabState};

/// Main application state
pub struct App<R: Renderer> {
    /// Backend the controller reads and writes through
    provider: Arc<dyn RecordProvider>,
    renderer: R,
    /// Channel spawned requests report back on
    message_tx: mpsc::UnboundedSender<AppMessage>,
    page: PageState,
    tabs: TabState,
    tokens: RequestTokens,
    /// Set once the page that vanished under the user has been asked for
    /// again; cleared by every user-driven page fetch
    page_refetched: bool,
    /// Club whose members are showing
    active_club_id: Option<i64>,
    should_quit: bool,
}

impl<R: Renderer> App<R> {
    /// Create a controller. Nothing is drawn or fetched until [`App::start`].
    pub fn new(
        provider: Arc<dyn RecordProvider>,
        renderer: R,
        message_tx: mpsc::UnboundedSender<AppMessage>,
    ) -> Self {
        Self {
            provider,
            renderer,
            message_tx,
            page: PageState::default(),
            tabs: TabState::default(),
            tokens: RequestTokens::default(),
            page_refetched: false,
            active_club_id: None,
            should_quit: false,
        }
    }

    /// Paint the initial tab state and load the first page of employees.
    pub fn start(&mut self) -> RequestToken {
        debug!("starting dashboard");
        self.show_users()
    }

    pub fn page(&self) -> &PageState {
        &self.page
    }

    pub fn tabs(&self) -> &TabState {
        &self.tabs
    }

    pub fn tokens(&self) -> &RequestTokens {
        &self.tokens
    }

    pub fn active_club_id(&self) -> Option<i64> {
        self.active_club_id
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Mark the app to quit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Runs `request` on a tokio task and sends its result back as a message.
    fn spawn_request<T, Fut, F, M>(&self, request: F, into_message: M)
    where
        T: Send + 'static,
        Fut: Future<Output = AdminResult<T>> + Send + 'static,
        F: FnOnce(Arc<dyn RecordProvider>) -> Fut,
        M: FnOnce(AdminResult<T>) -> AppMessage + Send + 'static,
    {
        let future = request(Arc::clone(&self.provider));
        let message_tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = future.await;
            // The loop may already be gone on shutdown
            let _ = message_tx.send(into_message(result));
        });
    }

    /// Fetches employee page `page`, superseding any page fetch in flight.
    fn fetch_page(&mut self, page: u32) -> RequestToken {
        self.page_refetched = false;
        self.request_page(page)
    }

    /// Asks again for a page the server reported as gone. Only one such
    /// retry is made per user-driven fetch.
    fn refetch_page(&mut self, page: u32) -> RequestToken {
        self.page_refetched = true;
        self.request_page(page)
    }

    fn request_page(&mut self, page: u32) -> RequestToken {
        let token = self.tokens.issue(ListSlot::Employees);
        let size = self.page.page_size();
        debug!(%token, page, size, "fetching employee page");

        self.renderer.set_loading(ListSlot::Employees);
        self.spawn_request(
            move |provider| async move { provider.list_employees(page, size).await },
            move |result| AppMessage::PageLoaded { token, result },
        );
        token
    }

    /// Fetches the (unpaged) club list.
    fn fetch_clubs(&mut self) -> RequestToken {
        let token = self.tokens.issue(ListSlot::Clubs);
        debug!(%token, "fetching clubs");

        self.renderer.set_loading(ListSlot::Clubs);
        self.spawn_request(
            |provider| async move { provider.list_clubs().await },
            move |result| AppMessage::ClubsLoaded { token, result },
        );
        token
    }

    /// Fetches the members of `club_id`.
    fn fetch_members(&mut self, club_id: i64) -> RequestToken {
        let token = self.tokens.issue(ListSlot::Members);
        debug!(%token, club_id, "fetching club members");

        self.renderer.set_loading(ListSlot::Members);
        self.spawn_request(
            move |provider| async move { provider.list_club_users(club_id).await },
            move |result| AppMessage::MembersLoaded {
                token,
                club_id,
                result,
            },
        );
        token
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse, RecordingRenderer};
    use crate::client::AdminClient;
    use serde_json::json;

    pub const BASE: &str = "http://api.test";

    pub struct Harness {
        pub app: App<RecordingRenderer>,
        pub http: MockHttpClient,
        pub rx: mpsc::UnboundedReceiver<AppMessage>,
    }

    impl Harness {
        pub fn new() -> Self {
            let http = MockHttpClient::new();
            let provider = Arc::new(AdminClient::with_http(BASE, http.clone()));
            let (tx, rx) = mpsc::unbounded_channel();
            let app = App::new(provider, RecordingRenderer::new(), tx);
            Self { app, http, rx }
        }

        /// Waits for the next spawned request to report back and applies it.
        pub async fn pump(&mut self) {
            let msg = self.rx.recv().await.expect("a pending request");
            self.app.handle_message(msg);
        }

        pub fn assert_idle(&mut self) {
            assert!(self.rx.try_recv().is_err(), "unexpected pending message");
        }

        pub fn serve_page(&self, page: u32, total: u64, names: &[&str]) {
            let employees: Vec<_> = names
                .iter()
                .enumerate()
                .map(|(i, name)| json!({"id": format!("E{}-{}", page, i), "name": name}))
                .collect();
            self.http.set_response(
                &format!("{}/employees?page={}&size=7", BASE, page),
                MockResponse::json(json!({"employees": employees, "total": total, "page": page})),
            );
        }

        pub fn serve_members(&self, club_id: i64, users: serde_json::Value) {
            self.http.set_method_response(
                "GET",
                &format!("{}/clubs/{}/users", BASE, club_id),
                MockResponse::json(json!({ "users": users })),
            );
        }

        pub fn serve_clubs(&self, clubs: serde_json::Value) {
            self.http
                .set_method_response("GET", &format!("{}/clubs", BASE), MockResponse::json(clubs));
        }

        pub fn page_requests(&self) -> Vec<String> {
            self.http
                .requests_matching("GET", "/employees")
                .into_iter()
                .map(|r| r.url)
                .collect()
        }
    }

    pub fn club_json(id: i64, name: &str) -> serde_json::Value {
        json!({"id": id, "club_name": name, "club_code": "123456789012345678", "url": null})
    }
}
