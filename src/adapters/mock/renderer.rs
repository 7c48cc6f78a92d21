//! Recording renderer for controller tests.
//!
//! Records every [`Renderer`] call in order so tests can assert on exactly
//! what the controller asked to be drawn.

use crate::models::{Club, ClubUser, Employee};
use crate::traits::{ListSlot, Placeholder, Renderer};
use crate::view_state::{PaginationView, Section, Tab};

/// One recorded renderer call.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCall {
    SectionVisible(Section, bool),
    TabActive(Tab, bool),
    Loading(ListSlot),
    Employees(Vec<Employee>),
    Pagination(PaginationView),
    Clubs(Vec<Club>),
    ClubMembers(i64, Vec<ClubUser>),
    Placeholder(ListSlot, Placeholder),
    CloseClubForm,
    CloseMemberForm,
    Alert(String),
    Navigate(String),
}

/// Renderer that keeps a log of every call it receives.
///
/// # Example
///
/// ```ignore
/// let mut app = App::new(provider, RecordingRenderer::new(), tx);
/// app.select_tab("club");
/// assert!(app.renderer().calls().contains(&RenderCall::SectionVisible(Section::Club, true)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    calls: Vec<RenderCall>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// All calls so far, oldest first.
    pub fn calls(&self) -> &[RenderCall] {
        &self.calls
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }

    /// The most recent pagination update, if any.
    pub fn last_pagination(&self) -> Option<PaginationView> {
        self.calls.iter().rev().find_map(|call| match call {
            RenderCall::Pagination(view) => Some(*view),
            _ => None,
        })
    }

    /// The most recent placeholder drawn into `slot`, if any.
    pub fn last_placeholder(&self, slot: ListSlot) -> Option<&Placeholder> {
        self.calls.iter().rev().find_map(|call| match call {
            RenderCall::Placeholder(s, placeholder) if *s == slot => Some(placeholder),
            _ => None,
        })
    }

    /// Every alert message, oldest first.
    pub fn alerts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                RenderCall::Alert(message) => Some(message.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Every navigation path, oldest first.
    pub fn navigations(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                RenderCall::Navigate(path) => Some(path.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Renderer for RecordingRenderer {
    fn set_section_visible(&mut self, section: Section, visible: bool) {
        self.calls.push(RenderCall::SectionVisible(section, visible));
    }

    fn set_tab_active(&mut self, tab: Tab, active: bool) {
        self.calls.push(RenderCall::TabActive(tab, active));
    }

    fn set_loading(&mut self, slot: ListSlot) {
        self.calls.push(RenderCall::Loading(slot));
    }

    fn render_employees(&mut self, employees: &[Employee]) {
        self.calls.push(RenderCall::Employees(employees.to_vec()));
    }

    fn render_pagination(&mut self, view: &PaginationView) {
        self.calls.push(RenderCall::Pagination(*view));
    }

    fn render_clubs(&mut self, clubs: &[Club]) {
        self.calls.push(RenderCall::Clubs(clubs.to_vec()));
    }

    fn render_club_members(&mut self, club_id: i64, members: &[ClubUser]) {
        self.calls
            .push(RenderCall::ClubMembers(club_id, members.to_vec()));
    }

    fn render_placeholder(&mut self, slot: ListSlot, placeholder: &Placeholder) {
        self.calls
            .push(RenderCall::Placeholder(slot, placeholder.clone()));
    }

    fn close_club_form(&mut self) {
        self.calls.push(RenderCall::CloseClubForm);
    }

    fn close_member_form(&mut self) {
        self.calls.push(RenderCall::CloseMemberForm);
    }

    fn alert(&mut self, message: &str) {
        self.calls.push(RenderCall::Alert(message.to_string()));
    }

    fn navigate(&mut self, path: &str) {
        self.calls.push(RenderCall::Navigate(path.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_calls_in_order() {
        let mut renderer = RecordingRenderer::new();
        renderer.set_loading(ListSlot::Clubs);
        renderer.alert("Club code must be 18 digits");
        renderer.navigate("/scan");

        assert_eq!(
            renderer.calls(),
            &[
                RenderCall::Loading(ListSlot::Clubs),
                RenderCall::Alert("Club code must be 18 digits".to_string()),
                RenderCall::Navigate("/scan".to_string()),
            ]
        );
        assert_eq!(renderer.alerts(), vec!["Club code must be 18 digits"]);
        assert_eq!(renderer.navigations(), vec!["/scan"]);
    }

    #[test]
    fn test_last_helpers() {
        let mut renderer = RecordingRenderer::new();
        assert!(renderer.last_pagination().is_none());

        renderer.render_placeholder(ListSlot::Employees, &Placeholder::Error("a".to_string()));
        renderer.render_placeholder(ListSlot::Clubs, &Placeholder::empty(ListSlot::Clubs));
        renderer.render_placeholder(ListSlot::Employees, &Placeholder::empty(ListSlot::Employees));
        renderer.render_pagination(&PaginationView::default());

        assert_eq!(
            renderer.last_placeholder(ListSlot::Employees),
            Some(&Placeholder::Empty("No users found."))
        );
        assert_eq!(renderer.last_pagination(), Some(PaginationView::default()));

        renderer.clear();
        assert!(renderer.calls().is_empty());
    }
}
