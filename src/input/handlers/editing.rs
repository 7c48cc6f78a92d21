//! Club and member forms, delete confirmation handlers.

use tracing::debug;

use crate::app::App;
use crate::view_state::{ClubFocus, ClubForm, DashboardView, DeleteTarget, MemberForm};

impl App<DashboardView> {
    pub(super) fn open_club_form(&mut self, club: Option<ClubForm>) {
        self.renderer_mut().form = Some(club.unwrap_or_else(ClubForm::create));
    }

    /// Opens the form for whatever row has the cursor in the club section.
    pub(super) fn edit_selected(&mut self) {
        let view = self.renderer();
        match view.club_focus {
            ClubFocus::Clubs => {
                let form = view.selected_club().map(ClubForm::edit);
                if form.is_some() {
                    self.open_club_form(form);
                }
            }
            ClubFocus::Members => {
                let form = view.selected_member().map(MemberForm::edit);
                if let Some(form) = form {
                    self.renderer_mut().member_form = Some(form);
                }
            }
        }
    }

    /// Sends the open form. The form stays open until the save succeeds.
    pub(super) fn submit_form(&mut self) {
        let view = self.renderer();
        if let Some(form) = view.form.as_ref() {
            let editing = form.editing;
            let draft = form.draft();
            self.submit_club(editing, &draft);
        } else if let Some(form) = view.member_form.as_ref() {
            let user_id = form.user_id;
            let draft = form.draft();
            self.submit_member(user_id, &draft);
        }
    }

    /// Carries out the pending confirmation.
    pub(super) fn confirm(&mut self) {
        let Some(confirm) = self.renderer_mut().take_confirm() else {
            return;
        };
        debug!(prompt = %confirm.prompt, "confirmed");
        match confirm.target {
            DeleteTarget::Employee(id) => self.delete_employee(&id),
            DeleteTarget::Club(id) => self.delete_club(id),
            DeleteTarget::Member(id) => self.delete_member(id),
        }
    }
}
