//! UI rendering for the admin dashboard.
//!
//! Draws a [`DashboardView`]:
//! - Header with the title and the tab row
//! - The visible section (employees or clubs)
//! - Footer with key hints for the current context
//! - The topmost modal, if any
//!
//! ## Responsive Layout
//!
//! Every render function receives a [`LayoutContext`] built from the frame
//! size. Narrow terminals stack the club panels and drop secondary columns.

mod clubs;
mod components;
mod employees;
mod helpers;
mod layout;
mod modal;
mod theme;

pub use layout::{breakpoints, LayoutContext};
pub use theme::{COLOR_ACCENT, COLOR_ACTIVE, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_HEADER};

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::view_state::{ClubFocus, DashboardView, Section};
use clubs::render_club_section;
use components::render_tab_selector;
use employees::render_employees;
use modal::render_modal;

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Render the whole dashboard.
pub fn render(frame: &mut Frame, view: &DashboardView) {
    let area = frame.area();
    let ctx = LayoutContext::new(area.width, area.height);

    let [header_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(4),
        Constraint::Length(1),
    ])
    .areas(area);

    render_header(frame, header_area, view, &ctx);
    match view.visible {
        Section::Employees => render_employees(frame, body_area, view, &ctx),
        Section::Club => render_club_section(frame, body_area, view, &ctx),
    }
    frame.render_widget(Paragraph::new(footer_line(view, &ctx)), footer_area);

    if let Some(modal) = view.modal() {
        render_modal(frame, area, &modal, &ctx);
    }
}

fn render_header(frame: &mut Frame, area: Rect, view: &DashboardView, ctx: &LayoutContext) {
    let title = Line::from(vec![
        Span::styled(
            " Rollcall",
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" admin", Style::default().fg(COLOR_DIM)),
    ]);
    frame.render_widget(
        Paragraph::new(vec![title, render_tab_selector(view.active_tab, ctx)]),
        area,
    );
}

/// Key hints for what the user can do right now.
fn footer_line(view: &DashboardView, ctx: &LayoutContext) -> Line<'static> {
    let hints: &[(&str, &str)] = if view.has_modal() {
        &[]
    } else {
        match (view.visible, view.club_focus) {
            (Section::Employees, _) => &[
                ("←/→", "page"),
                ("↑/↓", "select"),
                ("d", "delete"),
                ("r", "reload"),
                ("q", "logout"),
            ],
            (Section::Club, ClubFocus::Clubs) => &[
                ("↵", "members"),
                ("c", "new"),
                ("e", "edit"),
                ("d", "delete"),
                ("Tab", "members"),
                ("q", "logout"),
            ],
            (Section::Club, ClubFocus::Members) => &[
                ("↑/↓", "select"),
                ("e", "edit"),
                ("d", "remove"),
                ("Tab", "clubs"),
                ("q", "logout"),
            ],
        }
    };

    let mut spans = vec![Span::raw(" ")];
    for (key, action) in hints {
        spans.push(Span::styled(
            key.to_string(),
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        ));
        if !ctx.is_extra_small() {
            spans.push(Span::styled(
                format!(" {}  ", action),
                Style::default().fg(COLOR_DIM),
            ));
        } else {
            spans.push(Span::raw(" "));
        }
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Club, Employee};
    use crate::traits::{ListSlot, Placeholder, Renderer};
    use crate::view_state::{PaginationView, Tab};
    use ratatui::{backend::TestBackend, Terminal};

    fn screen(view: &DashboardView, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| render(frame, view)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_employee_page_is_drawn() {
        let mut view = DashboardView::new();
        view.render_employees(&[Employee {
            id: "E1".to_string(),
            name: "Ana Lima".to_string(),
            member_code: Some("123456789012345678".to_string()),
            image_path: None,
        }]);
        view.render_pagination(&PaginationView {
            current_page: 2,
            total_pages: 3,
            total_count: 15,
            prev_enabled: true,
            next_enabled: true,
        });

        let text = screen(&view, 100, 24);
        assert!(text.contains("Ana Lima"));
        assert!(text.contains("Page 2 of 3"));
        assert!(text.contains("Employees"));
    }

    #[test]
    fn test_inline_error_replaces_list() {
        let mut view = DashboardView::new();
        view.render_placeholder(
            ListSlot::Employees,
            &Placeholder::Error("Could not reach the server.".to_string()),
        );

        let text = screen(&view, 100, 24);
        assert!(text.contains("Could not reach the server."));
    }

    #[test]
    fn test_club_section_without_selection() {
        let mut view = DashboardView::new();
        view.set_section_visible(Section::Club, true);
        view.set_tab_active(Tab::Club, true);
        view.render_clubs(&[Club {
            id: 1,
            club_name: "Chess".to_string(),
            club_code: "123456789012345678".to_string(),
            url: None,
        }]);

        let text = screen(&view, 120, 30);
        assert!(text.contains("Clubs"));
        assert!(text.contains("Chess"));
        assert!(text.contains("Select a club to see its members."));
    }

    #[test]
    fn test_alert_drawn_over_section() {
        let mut view = DashboardView::new();
        view.alert("Club code must be unique");

        let text = screen(&view, 100, 24);
        assert!(text.contains("Club code must be unique"));
        assert!(text.contains("Enter/Esc to close"));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let mut view = DashboardView::new();
        view.form = Some(Default::default());
        view.alert("x");
        screen(&view, 10, 5);
    }

    #[test]
    fn test_footer_hints_follow_focus() {
        let mut view = DashboardView::new();
        let ctx = LayoutContext::new(120, 40);
        let text = |line: Line| -> String { line.spans.iter().map(|s| s.content.as_ref()).collect() };

        assert!(text(footer_line(&view, &ctx)).contains("page"));

        view.visible = Section::Club;
        assert!(text(footer_line(&view, &ctx)).contains("new"));

        view.alert("x");
        assert_eq!(text(footer_line(&view, &ctx)), " ");
    }
}
