//! Tab selection and pagination intents.

use tracing::{debug, info};

use crate::traits::Renderer;
use crate::view_state::{PageDelta, Section, Tab, TabTarget};

use super::{App, RequestToken};

impl<R: Renderer> App<R> {
    /// Select a tab by its identifier (`users`, `club`, `attendance`,
    /// `scan` or `logout`). Unknown identifiers are ignored.
    pub fn select_tab(&mut self, tab_id: &str) {
        match Tab::from_id(tab_id) {
            Some(tab) => self.select(tab),
            None => debug!(tab_id, "ignoring unknown tab"),
        }
    }

    /// Select a tab.
    ///
    /// Section tabs switch the visible section and reload it; navigation
    /// tabs hand off to the renderer and leave the tab state alone.
    pub fn select(&mut self, tab: Tab) {
        match tab.target() {
            TabTarget::Navigate(path) => {
                info!(%tab, path, "leaving dashboard");
                self.renderer.navigate(path);
            }
            TabTarget::Section(Section::Employees) => {
                self.show_users();
            }
            TabTarget::Section(Section::Club) => {
                self.show_club();
            }
        }
    }

    /// Switches to the employee section and reloads it from page 1.
    pub(super) fn show_users(&mut self) -> RequestToken {
        self.activate(Section::Employees);
        self.page.reset();
        self.fetch_page(1)
    }

    fn show_club(&mut self) -> RequestToken {
        self.activate(Section::Club);
        self.fetch_clubs()
    }

    /// Shows exactly `section` and marks exactly its tab active.
    fn activate(&mut self, section: Section) {
        if self.tabs.active_section() != section {
            info!(from = ?self.tabs.active_section(), to = ?section, "switching section");
        }
        self.tabs.activate(section);

        for other in Section::ALL {
            self.renderer.set_section_visible(other, other == section);
        }
        let active = section.tab();
        for tab in Tab::ALL {
            self.renderer.set_tab_active(tab, tab == active);
        }
    }

    /// Move one page back or forward.
    ///
    /// The target is checked against the current bounds; outside
    /// `[1, total_pages]` nothing is requested and `None` is returned. The
    /// cursor itself only moves once the page arrives.
    pub fn go_to_page(&mut self, delta: PageDelta) -> Option<RequestToken> {
        let Some(target) = self.page.target(delta) else {
            debug!(
                ?delta,
                current = self.page.current_page(),
                total_pages = self.page.total_pages(),
                "page change out of range"
            );
            return None;
        };
        Some(self.fetch_page(target))
    }

    /// Re-fetch whatever the active section shows.
    pub fn reload(&mut self) {
        match self.tabs.active_section() {
            Section::Employees => {
                self.fetch_page(self.page.current_page());
            }
            Section::Club => {
                self.fetch_clubs();
                if let Some(club_id) = self.active_club_id {
                    self.fetch_members(club_id);
                }
            }
        }
    }
}
