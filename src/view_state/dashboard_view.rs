//! Dashboard view state
//!
//! [`DashboardView`] is the terminal's [`Renderer`]: the controller paints
//! into it and `ui::render` draws it. It also holds the purely visual state
//! (row selection, modals) that the controller never sees.

use std::fmt;

use crate::models::{Club, ClubDraft, ClubUser, Employee, UserDraft};
use crate::traits::{ListSlot, Placeholder, Renderer};

use super::{PaginationView, Section, Tab};

// ============================================================================
// ListContent
// ============================================================================

/// What a list area currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ListContent<T> {
    /// Nothing requested yet
    #[default]
    Idle,
    /// A request is in flight
    Loading,
    /// Records to draw
    Records(Vec<T>),
    /// An empty or error placeholder
    Placeholder(Placeholder),
}

impl<T> ListContent<T> {
    pub fn records(&self) -> &[T] {
        match self {
            ListContent::Records(records) => records,
            _ => &[],
        }
    }

    pub fn len(&self) -> usize {
        self.records().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records().is_empty()
    }
}

// ============================================================================
// Club form
// ============================================================================

/// Field of the club form that receives typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Code,
}

/// The create/edit club modal.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClubForm {
    /// `Some(id)` when editing an existing club
    pub editing: Option<i64>,
    pub club_name: String,
    pub club_code: String,
    pub focus: FormField,
}

impl ClubForm {
    /// An empty form for a new club.
    pub fn create() -> Self {
        Self::default()
    }

    /// A form pre-filled from an existing club.
    pub fn edit(club: &Club) -> Self {
        Self {
            editing: Some(club.id),
            club_name: club.club_name.clone(),
            club_code: club.club_code.clone(),
            focus: FormField::Name,
        }
    }

    pub fn title(&self) -> &'static str {
        if self.editing.is_some() {
            "Edit Club"
        } else {
            "Add Club"
        }
    }

    fn field_mut(&mut self) -> &mut String {
        match self.focus {
            FormField::Name => &mut self.club_name,
            FormField::Code => &mut self.club_code,
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.field_mut().push(c);
    }

    pub fn backspace(&mut self) {
        self.field_mut().pop();
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            FormField::Name => FormField::Code,
            FormField::Code => FormField::Name,
        };
    }

    /// The form contents as an unvalidated draft.
    pub fn draft(&self) -> ClubDraft {
        ClubDraft::new(self.club_name.clone(), self.club_code.clone())
    }
}

// ============================================================================
// Member form
// ============================================================================

/// Field of the member form that receives typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MemberField {
    #[default]
    Name,
    Username,
    Password,
    Mobile,
}

impl MemberField {
    fn next(self) -> Self {
        match self {
            MemberField::Name => MemberField::Username,
            MemberField::Username => MemberField::Password,
            MemberField::Password => MemberField::Mobile,
            MemberField::Mobile => MemberField::Name,
        }
    }
}

/// The edit member modal.
///
/// The password field starts blank; leaving it blank keeps the password the
/// backend already has.
#[derive(Clone, PartialEq, Eq)]
pub struct MemberForm {
    pub user_id: i64,
    pub name: String,
    pub username: String,
    pub password: String,
    pub mobile: String,
    pub focus: MemberField,
    current_password: String,
}

impl MemberForm {
    pub fn edit(member: &ClubUser) -> Self {
        Self {
            user_id: member.id,
            name: member.name.clone(),
            username: member.username.clone(),
            password: String::new(),
            mobile: member.mobile.clone(),
            focus: MemberField::Name,
            current_password: member.password.clone(),
        }
    }

    pub fn title(&self) -> &'static str {
        "Edit Member"
    }

    fn field_mut(&mut self) -> &mut String {
        match self.focus {
            MemberField::Name => &mut self.name,
            MemberField::Username => &mut self.username,
            MemberField::Password => &mut self.password,
            MemberField::Mobile => &mut self.mobile,
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.field_mut().push(c);
    }

    pub fn backspace(&mut self) {
        self.field_mut().pop();
    }

    pub fn next_field(&mut self) {
        self.focus = self.focus.next();
    }

    /// The form contents as an unvalidated draft.
    pub fn draft(&self) -> UserDraft {
        let password = if self.password.is_empty() {
            self.current_password.clone()
        } else {
            self.password.clone()
        };
        UserDraft {
            name: self.name.clone(),
            username: self.username.clone(),
            password,
            mobile: self.mobile.clone(),
        }
    }
}

impl fmt::Debug for MemberForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemberForm")
            .field("user_id", &self.user_id)
            .field("name", &self.name)
            .field("username", &self.username)
            .field("mobile", &self.mobile)
            .field("focus", &self.focus)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Modal
// ============================================================================

/// A record the user asked to delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteTarget {
    Employee(String),
    Club(i64),
    Member(i64),
}

/// A yes/no question guarding a delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirm {
    pub prompt: String,
    pub target: DeleteTarget,
}

impl Confirm {
    pub fn delete_employee(employee: &Employee) -> Self {
        Self {
            prompt: format!("Delete employee {} ({})?", employee.name, employee.id),
            target: DeleteTarget::Employee(employee.id.clone()),
        }
    }

    pub fn delete_club(club: &Club) -> Self {
        Self {
            prompt: format!("Delete club {}?", club.club_name),
            target: DeleteTarget::Club(club.id),
        }
    }

    pub fn delete_member(member: &ClubUser) -> Self {
        Self {
            prompt: format!("Remove {} ({}) from the club?", member.name, member.username),
            target: DeleteTarget::Member(member.id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// Blocking message, dismissed with Enter or Esc
    Alert(String),
    Confirm(Confirm),
    ClubForm(ClubForm),
    MemberForm(MemberForm),
}

/// Which list has the cursor while the club section is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClubFocus {
    #[default]
    Clubs,
    Members,
}

// ============================================================================
// DashboardView
// ============================================================================

/// Everything the terminal draws.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardView {
    pub visible: Section,
    pub active_tab: Tab,
    pub employees: ListContent<Employee>,
    pub pagination: PaginationView,
    pub clubs: ListContent<Club>,
    /// Club whose members are listed, if any
    pub members_club: Option<i64>,
    pub members: ListContent<ClubUser>,
    pub employee_selected: usize,
    pub club_selected: usize,
    pub member_selected: usize,
    pub club_focus: ClubFocus,
    /// Alerts queue up behind an open modal rather than replacing it. A
    /// message already waiting is not queued twice.
    pub alerts: Vec<String>,
    pub confirm: Option<Confirm>,
    pub form: Option<ClubForm>,
    pub member_form: Option<MemberForm>,
    pending_navigation: Option<String>,
}

impl Default for DashboardView {
    fn default() -> Self {
        Self {
            visible: Section::Employees,
            active_tab: Tab::Users,
            employees: ListContent::Idle,
            pagination: PaginationView::default(),
            clubs: ListContent::Idle,
            members_club: None,
            members: ListContent::Idle,
            employee_selected: 0,
            club_selected: 0,
            member_selected: 0,
            club_focus: ClubFocus::Clubs,
            alerts: Vec::new(),
            confirm: None,
            form: None,
            member_form: None,
            pending_navigation: None,
        }
    }
}

impl DashboardView {
    pub fn new() -> Self {
        Self::default()
    }

    /// The modal on top: alerts, then confirmations, then a form.
    pub fn modal(&self) -> Option<Modal> {
        if let Some(message) = self.alerts.first() {
            return Some(Modal::Alert(message.clone()));
        }
        if let Some(confirm) = &self.confirm {
            return Some(Modal::Confirm(confirm.clone()));
        }
        if let Some(form) = &self.form {
            return Some(Modal::ClubForm(form.clone()));
        }
        self.member_form.clone().map(Modal::MemberForm)
    }

    pub fn has_modal(&self) -> bool {
        !self.alerts.is_empty()
            || self.confirm.is_some()
            || self.form.is_some()
            || self.member_form.is_some()
    }

    /// Closes the topmost modal.
    pub fn dismiss(&mut self) {
        if !self.alerts.is_empty() {
            self.alerts.remove(0);
        } else if self.confirm.is_some() {
            self.confirm = None;
        } else if self.form.is_some() {
            self.form = None;
        } else {
            self.member_form = None;
        }
    }

    /// Types `c` into the focused field of the open form.
    pub fn form_insert_char(&mut self, c: char) {
        if let Some(form) = self.form.as_mut() {
            form.insert_char(c);
        } else if let Some(form) = self.member_form.as_mut() {
            form.insert_char(c);
        }
    }

    pub fn form_backspace(&mut self) {
        if let Some(form) = self.form.as_mut() {
            form.backspace();
        } else if let Some(form) = self.member_form.as_mut() {
            form.backspace();
        }
    }

    pub fn form_next_field(&mut self) {
        if let Some(form) = self.form.as_mut() {
            form.toggle_focus();
        } else if let Some(form) = self.member_form.as_mut() {
            form.next_field();
        }
    }

    /// Takes the pending confirmation, if one is showing.
    pub fn take_confirm(&mut self) -> Option<Confirm> {
        self.confirm.take()
    }

    /// Asks to delete whatever the cursor is on in the visible section.
    pub fn confirm_delete_selected(&mut self) {
        let confirm = match (self.visible, self.club_focus) {
            (Section::Employees, _) => self.selected_employee().map(Confirm::delete_employee),
            (Section::Club, ClubFocus::Clubs) => self.selected_club().map(Confirm::delete_club),
            (Section::Club, ClubFocus::Members) => {
                self.selected_member().map(Confirm::delete_member)
            }
        };
        if confirm.is_some() {
            self.confirm = confirm;
        }
    }

    /// Takes the navigation requested since the last call.
    pub fn take_navigation(&mut self) -> Option<String> {
        self.pending_navigation.take()
    }

    pub fn selected_employee(&self) -> Option<&Employee> {
        self.employees.records().get(self.employee_selected)
    }

    pub fn selected_club(&self) -> Option<&Club> {
        self.clubs.records().get(self.club_selected)
    }

    pub fn selected_member(&self) -> Option<&ClubUser> {
        self.members.records().get(self.member_selected)
    }

    /// Moves the cursor of the focused list by `delta` rows.
    pub fn move_selection(&mut self, delta: isize) {
        let (len, index) = match (self.visible, self.club_focus) {
            (Section::Employees, _) => (self.employees.len(), &mut self.employee_selected),
            (Section::Club, ClubFocus::Clubs) => (self.clubs.len(), &mut self.club_selected),
            (Section::Club, ClubFocus::Members) => (self.members.len(), &mut self.member_selected),
        };
        if len == 0 {
            *index = 0;
            return;
        }
        let next = (*index as isize + delta).clamp(0, len as isize - 1);
        *index = next as usize;
    }

    /// Switches the cursor between the club list and the member list.
    pub fn toggle_club_focus(&mut self) {
        self.club_focus = match self.club_focus {
            ClubFocus::Clubs if !self.members.is_empty() => ClubFocus::Members,
            _ => ClubFocus::Clubs,
        };
    }
}

fn clamp_selection(index: &mut usize, len: usize) {
    if *index >= len {
        *index = len.saturating_sub(1);
    }
}

impl Renderer for DashboardView {
    fn set_section_visible(&mut self, section: Section, visible: bool) {
        if visible {
            self.visible = section;
        }
    }

    fn set_tab_active(&mut self, tab: Tab, active: bool) {
        if active {
            self.active_tab = tab;
        }
    }

    fn set_loading(&mut self, slot: ListSlot) {
        match slot {
            ListSlot::Employees => self.employees = ListContent::Loading,
            ListSlot::Clubs => self.clubs = ListContent::Loading,
            ListSlot::Members => self.members = ListContent::Loading,
        }
    }

    fn render_employees(&mut self, employees: &[Employee]) {
        self.employees = ListContent::Records(employees.to_vec());
        clamp_selection(&mut self.employee_selected, employees.len());
    }

    fn render_pagination(&mut self, view: &PaginationView) {
        self.pagination = *view;
    }

    fn render_clubs(&mut self, clubs: &[Club]) {
        self.clubs = ListContent::Records(clubs.to_vec());
        clamp_selection(&mut self.club_selected, clubs.len());
    }

    fn render_club_members(&mut self, club_id: i64, members: &[ClubUser]) {
        if self.members_club != Some(club_id) {
            self.member_selected = 0;
        }
        self.members_club = Some(club_id);
        self.members = ListContent::Records(members.to_vec());
        clamp_selection(&mut self.member_selected, members.len());
    }

    fn render_placeholder(&mut self, slot: ListSlot, placeholder: &Placeholder) {
        let content = placeholder.clone();
        match slot {
            ListSlot::Employees => self.employees = ListContent::Placeholder(content),
            ListSlot::Clubs => self.clubs = ListContent::Placeholder(content),
            ListSlot::Members => {
                self.members = ListContent::Placeholder(content);
                self.club_focus = ClubFocus::Clubs;
            }
        }
    }

    fn close_club_form(&mut self) {
        self.form = None;
    }

    fn close_member_form(&mut self) {
        self.member_form = None;
    }

    fn alert(&mut self, message: &str) {
        if self.alerts.iter().any(|queued| queued == message) {
            return;
        }
        self.alerts.push(message.to_string());
    }

    fn navigate(&mut self, path: &str) {
        self.pending_navigation = Some(path.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(id: &str) -> Employee {
        Employee {
            id: id.to_string(),
            name: format!("Employee {}", id),
            member_code: None,
            image_path: None,
        }
    }

    fn club(id: i64) -> Club {
        Club {
            id,
            club_name: format!("Club {}", id),
            club_code: "123456789012345678".to_string(),
            url: None,
        }
    }

    #[test]
    fn test_section_and_tab_follow_active_calls() {
        let mut view = DashboardView::new();
        view.set_section_visible(Section::Employees, false);
        view.set_section_visible(Section::Club, true);
        view.set_tab_active(Tab::Users, false);
        view.set_tab_active(Tab::Club, true);

        assert_eq!(view.visible, Section::Club);
        assert_eq!(view.active_tab, Tab::Club);
    }

    #[test]
    fn test_selection_is_clamped_to_records() {
        let mut view = DashboardView::new();
        view.render_employees(&[employee("1"), employee("2"), employee("3")]);
        view.move_selection(10);
        assert_eq!(view.employee_selected, 2);

        view.render_employees(&[employee("4")]);
        assert_eq!(view.employee_selected, 0);
        assert_eq!(view.selected_employee().map(|e| e.id.as_str()), Some("4"));

        view.move_selection(-3);
        assert_eq!(view.employee_selected, 0);
    }

    #[test]
    fn test_placeholder_replaces_records() {
        let mut view = DashboardView::new();
        view.render_clubs(&[club(1)]);
        view.render_placeholder(ListSlot::Clubs, &Placeholder::empty(ListSlot::Clubs));

        assert!(view.selected_club().is_none());
        assert_eq!(
            view.clubs,
            ListContent::Placeholder(Placeholder::Empty("No clubs found."))
        );
    }

    #[test]
    fn test_alerts_stack_over_form() {
        let mut view = DashboardView::new();
        view.form = Some(ClubForm::create());
        view.alert("Club code must be 18 digits");

        assert_eq!(
            view.modal(),
            Some(Modal::Alert("Club code must be 18 digits".to_string()))
        );
        view.dismiss();
        assert!(matches!(view.modal(), Some(Modal::ClubForm(_))));
        view.dismiss();
        assert!(!view.has_modal());
    }

    #[test]
    fn test_repeated_alert_is_queued_once() {
        let mut view = DashboardView::new();
        for _ in 0..3 {
            view.alert("Unable to reach the server. Please check your connection.");
        }
        view.alert("User not found.");
        view.alert("Unable to reach the server. Please check your connection.");

        assert_eq!(view.alerts.len(), 2);
        view.dismiss();
        assert_eq!(view.modal(), Some(Modal::Alert("User not found.".to_string())));

        // Once dismissed, the same message may be shown again
        view.alert("User not found.");
        view.dismiss();
        view.alert("User not found.");
        assert_eq!(view.alerts, vec!["User not found.".to_string()]);
    }

    #[test]
    fn test_confirm_delete_follows_cursor() {
        let mut view = DashboardView::new();
        view.confirm_delete_selected();
        assert!(view.confirm.is_none());

        view.render_employees(&[employee("1"), employee("2")]);
        view.move_selection(1);
        view.confirm_delete_selected();
        assert_eq!(
            view.modal(),
            Some(Modal::Confirm(Confirm {
                prompt: "Delete employee Employee 2 (2)?".to_string(),
                target: DeleteTarget::Employee("2".to_string()),
            }))
        );

        let confirm = view.take_confirm().unwrap();
        assert_eq!(confirm.target, DeleteTarget::Employee("2".to_string()));
        assert!(!view.has_modal());

        view.set_section_visible(Section::Club, true);
        view.render_clubs(&[club(8)]);
        view.confirm_delete_selected();
        assert_eq!(view.confirm.as_ref().map(|c| &c.target), Some(&DeleteTarget::Club(8)));
        view.dismiss();
        assert!(view.confirm.is_none());
    }

    #[test]
    fn test_take_navigation_once() {
        let mut view = DashboardView::new();
        view.navigate("/attendance");
        assert_eq!(view.take_navigation().as_deref(), Some("/attendance"));
        assert_eq!(view.take_navigation(), None);
    }

    #[test]
    fn test_club_form_editing() {
        let mut form = ClubForm::edit(&club(3));
        assert_eq!(form.title(), "Edit Club");
        form.backspace();
        form.insert_char('!');
        form.toggle_focus();
        form.insert_char('9');

        let draft = form.draft();
        assert_eq!(draft.club_name, "Club !");
        assert_eq!(draft.club_code, "1234567890123456789");
        assert_eq!(ClubForm::create().title(), "Add Club");
    }

    #[test]
    fn test_member_form_blank_password_keeps_current() {
        let member = ClubUser {
            id: 5,
            name: "Bo".to_string(),
            username: "bo".to_string(),
            mobile: "555".to_string(),
            password: "old".to_string(),
        };
        let mut form = MemberForm::edit(&member);
        assert_eq!(form.password, "");
        form.next_field();
        form.insert_char('2');
        assert_eq!(form.draft().username, "bo2");
        assert_eq!(form.draft().password, "old");

        form.next_field();
        assert_eq!(form.focus, MemberField::Password);
        form.insert_char('n');
        form.insert_char('w');
        assert_eq!(form.draft().password, "nw");
        form.next_field();
        form.backspace();
        assert_eq!(form.draft().mobile, "55");
        form.next_field();
        assert_eq!(form.focus, MemberField::Name);

        let debug = format!("{:?}", form);
        assert!(!debug.contains("old"));
        assert!(!debug.contains("nw"));
    }

    #[test]
    fn test_form_input_goes_to_open_form() {
        let mut view = DashboardView::new();
        view.form_insert_char('x');
        assert!(!view.has_modal());

        view.member_form = Some(MemberForm::edit(&ClubUser {
            id: 1,
            name: "A".to_string(),
            username: "a".to_string(),
            mobile: String::new(),
            password: String::new(),
        }));
        view.form_insert_char('b');
        view.form_next_field();
        view.form_backspace();
        let form = view.member_form.clone().unwrap();
        assert_eq!(form.name, "Ab");
        assert_eq!(form.username, "");
        assert!(matches!(view.modal(), Some(Modal::MemberForm(_))));

        view.close_member_form();
        assert!(!view.has_modal());
    }

    #[test]
    fn test_member_focus_needs_members() {
        let mut view = DashboardView::new();
        view.toggle_club_focus();
        assert_eq!(view.club_focus, ClubFocus::Clubs);

        view.render_club_members(
            1,
            &[ClubUser {
                id: 5,
                name: "Bo".to_string(),
                username: "bo".to_string(),
                mobile: String::new(),
                password: String::new(),
            }],
        );
        view.toggle_club_focus();
        assert_eq!(view.club_focus, ClubFocus::Members);
        assert_eq!(view.selected_member().map(|m| m.id), Some(5));
    }
}
