//! Handlers that move around the dashboard.

use tracing::debug;

use crate::app::App;
use crate::view_state::{ClubFocus, DashboardView, Section};

impl App<DashboardView> {
    /// Enter on the club list shows that club's members.
    pub(super) fn open_selected(&mut self) {
        let view = self.renderer();
        if view.visible != Section::Club || view.club_focus != ClubFocus::Clubs {
            return;
        }
        let selected = view.selected_club().map(|club| club.id);
        match selected {
            Some(club_id) => {
                self.show_members(club_id);
            }
            None => debug!("no club under the cursor"),
        }
    }
}
