//! Controller scenarios end to end: `App` -> `AdminClient` -> HTTP.

mod common;

use common::{club_json, envelope, mount_clubs, mount_page, TestDashboard};
use rollcall::adapters::mock::RenderCall;
use rollcall::models::ClubDraft;
use rollcall::traits::{ListSlot, Placeholder};
use rollcall::view_state::{DisplayState, PageDelta, Section, Tab};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

const SEVEN: [&str; 7] = ["a", "b", "c", "d", "e", "f", "g"];

#[tokio::test]
async fn test_paging_through_fifteen_employees() {
    let mut d = TestDashboard::start().await;
    mount_page(&d.server, 1, 15, &SEVEN).await;
    mount_page(&d.server, 2, 15, &SEVEN).await;
    mount_page(&d.server, 3, 15, &["o"]).await;

    d.app.start();
    d.pump().await;
    let view = d.renderer().last_pagination().unwrap();
    assert_eq!(view.label(), "Page 1 of 3");
    assert!(!view.prev_enabled);
    assert!(view.next_enabled);

    // Prev on the first page sends nothing
    assert!(d.app.go_to_page(PageDelta::Prev).is_none());

    d.app.go_to_page(PageDelta::Next);
    d.pump().await;
    d.app.go_to_page(PageDelta::Next);
    d.pump().await;

    let view = d.renderer().last_pagination().unwrap();
    assert_eq!(view.label(), "Page 3 of 3");
    assert!(view.prev_enabled);
    assert!(!view.next_enabled);
    assert!(d.app.go_to_page(PageDelta::Next).is_none());

    let requests = d.server.received_requests().await.unwrap();
    let pages: Vec<String> = requests
        .iter()
        .filter(|r| r.url.path() == "/employees")
        .map(|r| r.url.query().unwrap_or_default().to_string())
        .collect();
    assert_eq!(
        pages,
        vec!["page=1&size=7", "page=2&size=7", "page=3&size=7"]
    );
}

#[tokio::test]
async fn test_switching_tabs() {
    let mut d = TestDashboard::start().await;
    mount_page(&d.server, 1, 1, &["a"]).await;
    mount_clubs(&d.server, vec![club_json(1, "Chess"), club_json(2, "Go")]).await;

    d.app.start();
    d.pump().await;
    d.app.select_tab("club");
    d.pump().await;

    assert_eq!(d.app.tabs().display(), DisplayState::ShowingClub);
    assert!(d
        .renderer()
        .calls()
        .iter()
        .any(|c| matches!(c, RenderCall::Clubs(clubs) if clubs.len() == 2)));

    d.app.select_tab("scan");
    assert_eq!(d.renderer().navigations(), vec!["/scan"]);
    assert_eq!(d.app.tabs().display(), DisplayState::ShowingClub);

    d.app.select_tab("nonsense");
    assert_eq!(d.app.tabs().display(), DisplayState::ShowingClub);

    d.app.select_tab("users");
    d.pump().await;
    assert_eq!(d.app.tabs().display(), DisplayState::ShowingUsers);
    assert_eq!(d.app.page().current_page(), 1);

    let calls = d.renderer().calls();
    let last_visible: Vec<_> = calls
        .iter()
        .rev()
        .filter_map(|c| match c {
            RenderCall::SectionVisible(section, visible) => Some((*section, *visible)),
            _ => None,
        })
        .take(2)
        .collect();
    assert!(last_visible.contains(&(Section::Employees, true)));
    assert!(last_visible.contains(&(Section::Club, false)));
    assert!(calls.contains(&RenderCall::TabActive(Tab::Users, true)));
}

#[tokio::test]
async fn test_server_down_shows_inline_error() {
    let mut d = TestDashboard::start().await;
    Mock::given(method("GET"))
        .and(path("/employees"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&d.server)
        .await;

    d.app.start();
    d.pump().await;

    let placeholder = d
        .renderer()
        .last_placeholder(ListSlot::Employees)
        .unwrap();
    assert_eq!(
        placeholder,
        &Placeholder::Error(
            "The server is experiencing issues. Reload to try again.".to_string()
        )
    );
    assert!(d.renderer().alerts().is_empty());
    assert_eq!(d.app.page().current_page(), 1);
}

#[tokio::test]
async fn test_club_lifecycle() {
    let mut d = TestDashboard::start().await;
    mount_clubs(&d.server, vec![club_json(5, "Chess")]).await;
    Mock::given(method("POST"))
        .and(path("/clubs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "STATUS": 1, "CODE": 1, "FLAG": true,
            "MESSAGE": "Club created successfully",
            "DATA": {"club": club_json(5, "Chess")},
        })))
        .mount(&d.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/clubs/5/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"users": []})))
        .mount(&d.server)
        .await;

    d.app.select_tab("club");
    d.pump().await;

    // Local validation never reaches the server
    assert!(!d.app.submit_club(None, &ClubDraft::new("", common::CLUB_CODE)));
    assert_eq!(d.renderer().alerts().len(), 1);

    assert!(d.app.submit_club(None, &ClubDraft::new("Chess", common::CLUB_CODE)));
    d.pump().await;
    d.pump().await;
    assert!(d.renderer().calls().contains(&RenderCall::CloseClubForm));

    d.app.show_members(5);
    d.pump().await;
    assert_eq!(
        d.renderer().last_placeholder(ListSlot::Members),
        Some(&Placeholder::Empty("No members found."))
    );

    let posts = d
        .server
        .received_requests()
        .await
        .unwrap()
        .into_iter()
        .filter(|r| r.method.as_str() == "POST")
        .count();
    assert_eq!(posts, 1);
}

#[tokio::test]
async fn test_deleting_last_employee_on_last_page() {
    let mut d = TestDashboard::start().await;
    mount_page(&d.server, 1, 8, &SEVEN).await;
    d.app.start();
    d.pump().await;

    // Page 2 holds the eighth employee
    mount_page(&d.server, 2, 8, &["h"]).await;
    d.app.go_to_page(PageDelta::Next);
    d.pump().await;
    assert_eq!(d.app.page().current_page(), 2);

    // After the delete the server reports an empty page 2 of a 7-record
    // collection; the controller falls back to page 1
    d.server.reset().await;
    mount_page(&d.server, 2, 7, &[]).await;
    mount_page(&d.server, 1, 7, &SEVEN).await;
    Mock::given(method("DELETE"))
        .and(path("/employees/P2-0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(true, "deleted")))
        .mount(&d.server)
        .await;

    d.app.delete_employee("P2-0");
    d.pump().await; // delete
    d.pump().await; // empty page 2
    d.pump().await; // page 1

    assert_eq!(d.app.page().current_page(), 1);
    assert_eq!(d.app.page().total_pages(), 1);
    let view = d.renderer().last_pagination().unwrap();
    assert!(!view.next_enabled);
    assert!(!view.prev_enabled);
}
