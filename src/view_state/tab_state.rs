//! Tabs, sections and which one is showing.

use std::fmt;

/// A top-level, mutually exclusive panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Employees,
    Club,
}

impl Section {
    pub const ALL: [Section; 2] = [Section::Employees, Section::Club];

    /// The tab that shows this section.
    pub fn tab(self) -> Tab {
        match self {
            Section::Employees => Tab::Users,
            Section::Club => Tab::Club,
        }
    }
}

/// A navigational control in the tab bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    Users,
    Club,
    Attendance,
    Scan,
    Logout,
}

/// What selecting a tab means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabTarget {
    /// Show a section in place.
    Section(Section),
    /// Leave the dashboard for a fixed path on the backend.
    Navigate(&'static str),
}

impl Tab {
    pub const ALL: [Tab; 5] = [Tab::Users, Tab::Club, Tab::Attendance, Tab::Scan, Tab::Logout];

    /// Looks a tab up by its identifier. Unknown identifiers yield `None`.
    pub fn from_id(id: &str) -> Option<Tab> {
        Tab::ALL.into_iter().find(|tab| tab.id() == id)
    }

    pub fn id(self) -> &'static str {
        match self {
            Tab::Users => "users",
            Tab::Club => "club",
            Tab::Attendance => "attendance",
            Tab::Scan => "scan",
            Tab::Logout => "logout",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Users => "Users",
            Tab::Club => "Club",
            Tab::Attendance => "Attendance",
            Tab::Scan => "Scan",
            Tab::Logout => "Logout",
        }
    }

    pub fn target(self) -> TabTarget {
        match self {
            Tab::Users => TabTarget::Section(Section::Employees),
            Tab::Club => TabTarget::Section(Section::Club),
            Tab::Attendance => TabTarget::Navigate("/attendance"),
            Tab::Scan => TabTarget::Navigate("/scan"),
            Tab::Logout => TabTarget::Navigate("/logout"),
        }
    }

    /// The section this tab shows, if it is a section tab.
    pub fn section(self) -> Option<Section> {
        match self.target() {
            TabTarget::Section(section) => Some(section),
            TabTarget::Navigate(_) => None,
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// The two reachable display states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayState {
    ShowingUsers,
    ShowingClub,
}

/// Which section is visible. Starts on the employees section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabState {
    active: Section,
}

impl Default for TabState {
    fn default() -> Self {
        Self {
            active: Section::Employees,
        }
    }
}

impl TabState {
    pub fn active_section(&self) -> Section {
        self.active
    }

    pub fn active_tab(&self) -> Tab {
        self.active.tab()
    }

    pub fn display(&self) -> DisplayState {
        match self.active {
            Section::Employees => DisplayState::ShowingUsers,
            Section::Club => DisplayState::ShowingClub,
        }
    }

    pub fn is_visible(&self, section: Section) -> bool {
        self.active == section
    }

    pub(crate) fn activate(&mut self, section: Section) {
        self.active = section;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_id_round_trips_known_tabs() {
        for tab in Tab::ALL {
            assert_eq!(Tab::from_id(tab.id()), Some(tab));
        }
    }

    #[test]
    fn test_unknown_tab_id() {
        assert_eq!(Tab::from_id("reports"), None);
        assert_eq!(Tab::from_id("Users"), None);
        assert_eq!(Tab::from_id(""), None);
    }

    #[test]
    fn test_tab_targets() {
        assert_eq!(Tab::Users.section(), Some(Section::Employees));
        assert_eq!(Tab::Club.section(), Some(Section::Club));
        assert_eq!(Tab::Attendance.target(), TabTarget::Navigate("/attendance"));
        assert_eq!(Tab::Scan.target(), TabTarget::Navigate("/scan"));
        assert_eq!(Tab::Logout.target(), TabTarget::Navigate("/logout"));
    }

    #[test]
    fn test_initial_state_shows_users() {
        let state = TabState::default();
        assert_eq!(state.display(), DisplayState::ShowingUsers);
        assert_eq!(state.active_tab(), Tab::Users);
    }

    #[test]
    fn test_exactly_one_section_visible() {
        let mut state = TabState::default();
        for section in [Section::Club, Section::Employees, Section::Club, Section::Club] {
            state.activate(section);
            let visible = Section::ALL.iter().filter(|s| state.is_visible(**s)).count();
            assert_eq!(visible, 1);
            assert_eq!(state.active_section(), section);
        }
    }
}
