//! Message handling for the App.

use tracing::{debug, info, warn};

use crate::error::{AdminError, AdminResult};
use crate::models::{Club, ClubUser, EmployeePage};
use crate::traits::{ListSlot, Placeholder, Renderer};
use crate::view_state::Section;

use super::{App, AppMessage, RequestToken};

/// Appended to load failures that may succeed on a second attempt.
const RETRY_HINT: &str = " Reload to try again.";

impl<R: Renderer> App<R> {
    /// Handle the result of a spawned request.
    pub fn handle_message(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::PageLoaded { token, result } => {
                if self.accept(ListSlot::Employees, token) {
                    self.on_page_loaded(result);
                }
            }
            AppMessage::ClubsLoaded { token, result } => {
                if self.accept(ListSlot::Clubs, token) {
                    self.on_clubs_loaded(result);
                }
            }
            AppMessage::MembersLoaded {
                token,
                club_id,
                result,
            } => {
                if self.accept(ListSlot::Members, token) {
                    self.on_members_loaded(club_id, result);
                }
            }
            AppMessage::ClubSaved { editing, result } => self.on_club_saved(editing, result),
            AppMessage::ClubDeleted { club_id, result } => self.on_club_deleted(club_id, result),
            AppMessage::EmployeeDeleted {
                employee_id,
                result,
            } => self.on_employee_deleted(&employee_id, result),
            AppMessage::MemberSaved { user_id, result } => self.on_member_saved(user_id, result),
            AppMessage::MemberDeleted { user_id, result } => {
                self.on_member_deleted(user_id, result)
            }
        }
    }

    /// Whether a response is the latest one issued for its collection.
    fn accept(&self, slot: ListSlot, token: RequestToken) -> bool {
        let current = self.tokens.is_current(slot, token);
        if !current {
            debug!(
                ?slot,
                %token,
                latest = ?self.tokens.latest(slot),
                "discarding stale response"
            );
        }
        current
    }

    /// Apply a page of employees.
    ///
    /// On success the server's page and total replace the local ones and the
    /// list and pagination controls are redrawn. On failure the cursor is left
    /// alone and the list shows the error.
    pub fn on_page_loaded(&mut self, result: AdminResult<EmployeePage>) {
        let page = match result {
            Ok(page) => page,
            Err(err) => {
                self.show_load_error(ListSlot::Employees, &err);
                return;
            }
        };

        let adjusted = self.page.apply(page.page, page.total);
        if adjusted {
            warn!(
                reported = page.page,
                total = page.total,
                shown = self.page.current_page(),
                "server reported a page outside the collection"
            );
            // The page we asked for no longer exists, e.g. after deleting the
            // last record on the last page
            if page.employees.is_empty() && page.total > 0 {
                if !self.page_refetched {
                    self.refetch_page(self.page.current_page());
                    return;
                }
                warn!(
                    page = self.page.current_page(),
                    total = page.total,
                    "clamped page is still empty, not asking again"
                );
            }
        }

        debug!(
            page = self.page.current_page(),
            total_pages = self.page.total_pages(),
            records = page.employees.len(),
            "employee page loaded"
        );
        if page.employees.is_empty() {
            self.renderer
                .render_placeholder(ListSlot::Employees, &Placeholder::empty(ListSlot::Employees));
        } else {
            self.renderer.render_employees(&page.employees);
        }
        self.renderer.render_pagination(&self.page.view());
    }

    fn on_clubs_loaded(&mut self, result: AdminResult<Vec<Club>>) {
        match result {
            Ok(clubs) if clubs.is_empty() => {
                self.renderer
                    .render_placeholder(ListSlot::Clubs, &Placeholder::empty(ListSlot::Clubs));
            }
            Ok(clubs) => {
                debug!(count = clubs.len(), "clubs loaded");
                self.renderer.render_clubs(&clubs);
            }
            Err(err) => self.show_load_error(ListSlot::Clubs, &err),
        }
    }

    fn on_members_loaded(&mut self, club_id: i64, result: AdminResult<Vec<ClubUser>>) {
        match result {
            Ok(members) if members.is_empty() => {
                self.renderer
                    .render_placeholder(ListSlot::Members, &Placeholder::empty(ListSlot::Members));
            }
            Ok(members) => {
                debug!(club_id, count = members.len(), "club members loaded");
                self.renderer.render_club_members(club_id, &members);
            }
            Err(err) => self.show_load_error(ListSlot::Members, &err),
        }
    }

    fn on_club_saved(&mut self, editing: Option<i64>, result: AdminResult<Option<Club>>) {
        match result {
            Ok(club) => {
                info!(
                    editing,
                    club_id = club.as_ref().map(|c| c.id),
                    "club saved"
                );
                self.renderer.close_club_form();
                self.fetch_clubs();
            }
            Err(err) => self.show_write_error("save club", &err),
        }
    }

    fn on_club_deleted(&mut self, club_id: i64, result: AdminResult<()>) {
        match result {
            Ok(()) => {
                info!(club_id, "club deleted");
                if self.active_club_id == Some(club_id) {
                    self.clear_members();
                }
                self.fetch_clubs();
            }
            Err(err) => self.show_write_error("delete club", &err),
        }
    }

    fn on_employee_deleted(&mut self, employee_id: &str, result: AdminResult<String>) {
        match result {
            Ok(message) => {
                info!(employee_id, %message, "employee deleted");
                // Leaving the section already dropped the page; coming back
                // reloads it from page 1
                if self.tabs.active_section() == Section::Employees {
                    self.fetch_page(self.page.current_page());
                }
            }
            Err(err) => self.show_write_error("delete employee", &err),
        }
    }

    fn on_member_saved(&mut self, user_id: i64, result: AdminResult<String>) {
        match result {
            Ok(message) => {
                info!(user_id, %message, "club member updated");
                self.renderer.close_member_form();
                if let Some(club_id) = self.active_club_id {
                    self.fetch_members(club_id);
                }
            }
            Err(err) => self.show_write_error("save member", &err),
        }
    }

    fn on_member_deleted(&mut self, user_id: i64, result: AdminResult<()>) {
        match result {
            Ok(()) => {
                info!(user_id, "club member deleted");
                if let Some(club_id) = self.active_club_id {
                    self.fetch_members(club_id);
                }
            }
            Err(err) => self.show_write_error("delete member", &err),
        }
    }

    /// Inline error in place of the list. Nothing is retried; transient
    /// failures only say that a reload may help.
    fn show_load_error(&mut self, slot: ListSlot, err: &AdminError) {
        warn!(?slot, category = %err.category(), error = %err, "load failed");
        let mut message = err.user_message();
        if err.is_retryable() {
            message.push_str(RETRY_HINT);
        }
        self.renderer
            .render_placeholder(slot, &Placeholder::Error(message));
    }

    /// Write failures are blocking alerts; lists are left as they were.
    fn show_write_error(&mut self, action: &'static str, err: &AdminError) {
        warn!(action, category = %err.category(), error = %err, "write failed");
        self.renderer.alert(&err.user_message());
    }
}
