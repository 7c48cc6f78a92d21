//! Common test utilities for integration tests.
//!
//! Builds a controller wired to a real [`AdminClient`] that talks to a
//! `wiremock` server, with a [`RecordingRenderer`] capturing what it paints.

#![allow(dead_code)]

use std::sync::Arc;

use rollcall::adapters::RecordingRenderer;
use rollcall::app::{App, AppMessage};
use rollcall::client::AdminClient;
use serde_json::{json, Value};
use tokio::sync::mpsc;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const CLUB_CODE: &str = "123456789012345678";

/// A controller plus the server it talks to.
pub struct TestDashboard {
    pub server: MockServer,
    pub app: App<RecordingRenderer>,
    pub rx: mpsc::UnboundedReceiver<AppMessage>,
}

impl TestDashboard {
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        let provider = Arc::new(AdminClient::new(server.uri()));
        let (tx, rx) = mpsc::unbounded_channel();
        let app = App::new(provider, RecordingRenderer::new(), tx);
        Self { server, app, rx }
    }

    /// Applies the next response to arrive.
    pub async fn pump(&mut self) {
        let msg = self.rx.recv().await.expect("a pending request");
        self.app.handle_message(msg);
    }

    pub fn renderer(&self) -> &RecordingRenderer {
        self.app.renderer()
    }
}

pub fn employee_json(id: &str, name: &str) -> Value {
    json!({"id": id, "name": name, "member_code": null, "image_path": null})
}

pub fn club_json(id: i64, name: &str) -> Value {
    json!({
        "id": id,
        "club_name": name,
        "club_code": CLUB_CODE,
        "url": format!("http://localhost:8000/club/{}/scan/", CLUB_CODE),
    })
}

pub fn envelope(flag: bool, message: &str) -> Value {
    json!({
        "STATUS": if flag { 1 } else { 0 },
        "CODE": if flag { 1 } else { 0 },
        "FLAG": flag,
        "MESSAGE": message,
        "DATA": null,
    })
}

/// Serves page `page` of a collection of `total` employees named `names`.
pub async fn mount_page(server: &MockServer, page: u32, total: u64, names: &[&str]) {
    let employees: Vec<Value> = names
        .iter()
        .enumerate()
        .map(|(i, name)| employee_json(&format!("P{}-{}", page, i), name))
        .collect();
    Mock::given(method("GET"))
        .and(path("/employees"))
        .and(query_param("page", page.to_string()))
        .and(query_param("size", "7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "employees": employees,
            "total": total,
            "page": page,
        })))
        .mount(server)
        .await;
}

pub async fn mount_clubs(server: &MockServer, clubs: Vec<Value>) {
    Mock::given(method("GET"))
        .and(path("/clubs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "clubs": clubs })))
        .mount(server)
        .await;
}
