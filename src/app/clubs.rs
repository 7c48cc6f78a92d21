//! Record-changing intents: clubs, club members and employees.

use tracing::{debug, info};

use crate::models::{ClubDraft, UserDraft};
use crate::traits::{ListSlot, Placeholder, Renderer};

use super::{App, AppMessage, RequestToken};

/// Shown in the member list when no club is selected.
pub const NO_CLUB_SELECTED: &str = "Select a club to see its members.";

impl<R: Renderer> App<R> {
    /// Show the members of `club_id` and remember it as the active club.
    pub fn show_members(&mut self, club_id: i64) -> RequestToken {
        self.active_club_id = Some(club_id);
        self.fetch_members(club_id)
    }

    /// Forget the active club and drop any member response still in flight.
    pub(super) fn clear_members(&mut self) {
        self.active_club_id = None;
        self.tokens.invalidate(ListSlot::Members);
        self.renderer
            .render_placeholder(ListSlot::Members, &Placeholder::Empty(NO_CLUB_SELECTED));
    }

    /// Create a club (`editing: None`) or update club `editing`.
    ///
    /// The draft is checked locally first; an unacceptable draft is reported
    /// with an alert and nothing is sent. Returns whether a request was sent.
    pub fn submit_club(&mut self, editing: Option<i64>, draft: &ClubDraft) -> bool {
        let draft = match draft.validate() {
            Ok(draft) => draft,
            Err(message) => {
                debug!(editing, %message, "club draft rejected locally");
                self.renderer.alert(&message);
                return false;
            }
        };

        info!(editing, club_name = %draft.club_name, "saving club");
        self.spawn_request(
            move |provider| async move {
                match editing {
                    Some(club_id) => provider.update_club(club_id, &draft).await,
                    None => provider.create_club(&draft).await,
                }
            },
            move |result| AppMessage::ClubSaved { editing, result },
        );
        true
    }

    pub fn delete_club(&mut self, club_id: i64) {
        info!(club_id, "deleting club");
        self.spawn_request(
            move |provider| async move { provider.delete_club(club_id).await },
            move |result| AppMessage::ClubDeleted { club_id, result },
        );
    }

    /// Replace the name, username, password and mobile of member `user_id`.
    ///
    /// Checked locally like a club draft. Returns whether a request was sent.
    pub fn submit_member(&mut self, user_id: i64, draft: &UserDraft) -> bool {
        let draft = match draft.validate() {
            Ok(draft) => draft,
            Err(message) => {
                debug!(user_id, %message, "member draft rejected locally");
                self.renderer.alert(&message);
                return false;
            }
        };

        info!(user_id, username = %draft.username, "updating club member");
        self.spawn_request(
            move |provider| async move { provider.update_user(user_id, &draft).await },
            move |result| AppMessage::MemberSaved { user_id, result },
        );
        true
    }

    /// Delete a member of the active club.
    pub fn delete_member(&mut self, user_id: i64) {
        info!(user_id, club_id = self.active_club_id, "deleting club member");
        self.spawn_request(
            move |provider| async move { provider.delete_user(user_id).await },
            move |result| AppMessage::MemberDeleted { user_id, result },
        );
    }

    pub fn delete_employee(&mut self, employee_id: &str) {
        info!(employee_id, "deleting employee");
        let id = employee_id.to_string();
        let employee_id = id.clone();
        self.spawn_request(
            move |provider| async move { provider.delete_employee(&id).await },
            move |result| AppMessage::EmployeeDeleted {
                employee_id,
                result,
            },
        );
    }
}
