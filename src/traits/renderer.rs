//! Renderer capability injected into the controller.
//!
//! Every method has a no-op default. A renderer that has nothing to show for
//! a given call simply doesn't override it; the controller never needs to
//! know which bindings exist.

use crate::models::{Club, ClubUser, Employee};
use crate::view_state::{PaginationView, Section, Tab};

/// A list area that can hold records or a placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListSlot {
    Employees,
    Clubs,
    Members,
}

impl ListSlot {
    /// Message shown when a successful response contains no records.
    pub fn empty_message(self) -> &'static str {
        match self {
            ListSlot::Employees => "No users found.",
            ListSlot::Clubs => "No clubs found.",
            ListSlot::Members => "No members found.",
        }
    }
}

/// Content shown instead of records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placeholder {
    /// The request succeeded with zero records.
    Empty(&'static str),
    /// The request failed; the message is user-facing.
    Error(String),
}

impl Placeholder {
    pub fn empty(slot: ListSlot) -> Self {
        Placeholder::Empty(slot.empty_message())
    }

    pub fn message(&self) -> &str {
        match self {
            Placeholder::Empty(message) => message,
            Placeholder::Error(message) => message,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Placeholder::Error(_))
    }
}

/// Paints controller state.
pub trait Renderer {
    /// Show or hide a section.
    fn set_section_visible(&mut self, _section: Section, _visible: bool) {}

    /// Mark a tab as the active one, or clear the mark.
    fn set_tab_active(&mut self, _tab: Tab, _active: bool) {}

    /// A request for `slot` is in flight.
    fn set_loading(&mut self, _slot: ListSlot) {}

    /// Draw a page of employees. Never called with an empty slice.
    fn render_employees(&mut self, _employees: &[Employee]) {}

    /// Update the pagination label and the enabled state of prev/next.
    fn render_pagination(&mut self, _view: &PaginationView) {}

    /// Draw the club list. Never called with an empty slice.
    fn render_clubs(&mut self, _clubs: &[Club]) {}

    /// Draw the members of `club_id`. Never called with an empty slice.
    fn render_club_members(&mut self, _club_id: i64, _members: &[ClubUser]) {}

    /// Replace the contents of `slot` with a placeholder.
    fn render_placeholder(&mut self, _slot: ListSlot, _placeholder: &Placeholder) {}

    /// A club form was saved; hide it.
    fn close_club_form(&mut self) {}

    /// A member edit was saved; hide its form.
    fn close_member_form(&mut self) {}

    /// Show a blocking message that the user has to dismiss.
    fn alert(&mut self, _message: &str) {}

    /// Leave the dashboard for `path` on the backend.
    fn navigate(&mut self, _path: &str) {}
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn set_section_visible(&mut self, section: Section, visible: bool) {
        (**self).set_section_visible(section, visible)
    }

    fn set_tab_active(&mut self, tab: Tab, active: bool) {
        (**self).set_tab_active(tab, active)
    }

    fn set_loading(&mut self, slot: ListSlot) {
        (**self).set_loading(slot)
    }

    fn render_employees(&mut self, employees: &[Employee]) {
        (**self).render_employees(employees)
    }

    fn render_pagination(&mut self, view: &PaginationView) {
        (**self).render_pagination(view)
    }

    fn render_clubs(&mut self, clubs: &[Club]) {
        (**self).render_clubs(clubs)
    }

    fn render_club_members(&mut self, club_id: i64, members: &[ClubUser]) {
        (**self).render_club_members(club_id, members)
    }

    fn render_placeholder(&mut self, slot: ListSlot, placeholder: &Placeholder) {
        (**self).render_placeholder(slot, placeholder)
    }

    fn close_club_form(&mut self) {
        (**self).close_club_form()
    }

    fn close_member_form(&mut self) {
        (**self).close_member_form()
    }

    fn alert(&mut self, message: &str) {
        (**self).alert(message)
    }

    fn navigate(&mut self, path: &str) {
        (**self).navigate(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Unbound;
    impl Renderer for Unbound {}

    #[test]
    fn test_unbound_renderer_accepts_every_call() {
        let mut renderer: Box<dyn Renderer> = Box::new(Unbound);
        renderer.set_section_visible(Section::Club, true);
        renderer.set_tab_active(Tab::Club, true);
        renderer.set_loading(ListSlot::Clubs);
        renderer.render_employees(&[]);
        renderer.render_pagination(&PaginationView::default());
        renderer.render_placeholder(ListSlot::Employees, &Placeholder::empty(ListSlot::Employees));
        renderer.close_club_form();
        renderer.close_member_form();
        renderer.alert("hello");
        renderer.navigate("/scan");
    }

    #[test]
    fn test_placeholder_messages() {
        assert_eq!(
            Placeholder::empty(ListSlot::Employees).message(),
            "No users found."
        );
        let err = Placeholder::Error("offline".to_string());
        assert!(err.is_error());
        assert_eq!(err.message(), "offline");
    }
}
