//! Command handlers for executing commands.
//!
//! - [`navigation`] - Tabs, pages and the row cursor
//! - [`editing`] - The club and member forms, delete confirmations

pub mod editing;
pub mod navigation;

use tracing::debug;

use super::command::Command;
use crate::app::App;
use crate::view_state::{DashboardView, PageDelta};

impl App<DashboardView> {
    /// Runs a command produced by the [`CommandRegistry`](super::CommandRegistry).
    pub fn execute_command(&mut self, cmd: Command) {
        debug!(?cmd, "executing command");
        match cmd {
            Command::Quit => self.quit(),
            Command::SelectTab(tab) => self.select(tab),
            Command::Reload => self.reload(),

            Command::PrevPage => {
                self.go_to_page(PageDelta::Prev);
            }
            Command::NextPage => {
                self.go_to_page(PageDelta::Next);
            }
            Command::MoveUp => self.renderer_mut().move_selection(-1),
            Command::MoveDown => self.renderer_mut().move_selection(1),
            Command::OpenSelected => self.open_selected(),
            Command::ToggleListFocus => self.renderer_mut().toggle_club_focus(),
            Command::DeleteSelected => self.renderer_mut().confirm_delete_selected(),

            Command::NewClub => self.open_club_form(None),
            Command::EditSelected => self.edit_selected(),
            Command::FormChar(c) => self.renderer_mut().form_insert_char(c),
            Command::FormBackspace => self.renderer_mut().form_backspace(),
            Command::FormNextField => self.renderer_mut().form_next_field(),
            Command::FormSubmit => self.submit_form(),

            Command::Confirm => self.confirm(),
            Command::Dismiss => self.renderer_mut().dismiss(),
        }
    }
}
