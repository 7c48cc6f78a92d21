//! Club section: the club list beside the members of the active club.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::helpers::{cell, list_status, scroll_offset};
use super::layout::LayoutContext;
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_SELECTED_BG};
use crate::app::NO_CLUB_SELECTED;
use crate::models::{Club, ClubUser};
use crate::view_state::{ClubFocus, DashboardView, ListContent};

const CODE_WIDTH: usize = 18;

pub fn render_club_section(
    frame: &mut Frame,
    area: Rect,
    view: &DashboardView,
    ctx: &LayoutContext,
) {
    let [clubs_area, members_area] = if ctx.should_stack_panels() {
        Layout::vertical([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(area)
    } else {
        Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)]).areas(area)
    };

    let clubs_focused = view.club_focus == ClubFocus::Clubs;
    let inner = panel(frame, clubs_area, " Clubs ".to_string(), clubs_focused);
    let lines = match list_status(&view.clubs) {
        Some(status) => vec![status],
        None => club_lines(view.clubs.records(), view.club_selected, inner, ctx),
    };
    frame.render_widget(Paragraph::new(lines), inner);

    let title = match members_title(view) {
        Some(name) => format!(" Members of {} ", name),
        None => " Members ".to_string(),
    };
    let inner = panel(frame, members_area, title, !clubs_focused);
    let lines = match (&view.members, list_status(&view.members)) {
        (ListContent::Idle, _) => vec![Line::from(Span::styled(
            NO_CLUB_SELECTED,
            Style::default().fg(COLOR_DIM),
        ))],
        (_, Some(status)) => vec![status],
        (_, None) => member_lines(
            view.members.records(),
            (!clubs_focused).then_some(view.member_selected),
            inner,
        ),
    };
    frame.render_widget(Paragraph::new(lines), inner);
}

fn members_title(view: &DashboardView) -> Option<&str> {
    let club_id = view.members_club?;
    view.clubs
        .records()
        .iter()
        .find(|club| club.id == club_id)
        .map(|club| club.club_name.as_str())
}

/// Bordered panel; the focused one gets a bright border.
fn panel(frame: &mut Frame, area: Rect, title: String, focused: bool) -> Rect {
    let border = if focused { COLOR_ACCENT } else { COLOR_BORDER };
    let block = Block::default()
        .title(Span::styled(
            title,
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

fn header(text: String) -> Line<'static> {
    Line::from(Span::styled(
        text,
        Style::default().fg(COLOR_DIM).add_modifier(Modifier::BOLD),
    ))
}

fn row_style(selected: bool) -> Style {
    if selected {
        Style::default().bg(COLOR_SELECTED_BG).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}

fn club_lines(clubs: &[Club], selected: usize, area: Rect, ctx: &LayoutContext) -> Vec<Line<'static>> {
    let width = area.width as usize;
    let show_url = ctx.should_show_club_urls();
    let name_width = if show_url {
        (width.saturating_sub(CODE_WIDTH + 2)) / 2
    } else {
        width.saturating_sub(CODE_WIDTH + 1)
    };
    let url_width = width.saturating_sub(name_width + CODE_WIDTH + 2);

    let mut title = format!("{} {}", cell("Name", name_width), cell("Code", CODE_WIDTH));
    if show_url {
        title.push(' ');
        title.push_str(&cell("Scan URL", url_width));
    }
    let mut lines = vec![header(title)];

    let rows = (area.height as usize).saturating_sub(1);
    let offset = scroll_offset(selected, rows);
    for (idx, club) in clubs.iter().enumerate().skip(offset).take(rows) {
        let mut text = format!(
            "{} {}",
            cell(&club.club_name, name_width),
            cell(&club.club_code, CODE_WIDTH)
        );
        if show_url {
            text.push(' ');
            text.push_str(&cell(club.url.as_deref().unwrap_or("-"), url_width));
        }
        lines.push(Line::from(Span::styled(text, row_style(idx == selected))));
    }
    lines
}

/// `selected` is `None` while the cursor is on the club list.
fn member_lines(members: &[ClubUser], selected: Option<usize>, area: Rect) -> Vec<Line<'static>> {
    let width = area.width as usize;
    let column = width.saturating_sub(2) / 3;

    let mut lines = vec![header(format!(
        "{} {} {}",
        cell("Name", column),
        cell("Username", column),
        cell("Mobile", column)
    ))];

    let rows = (area.height as usize).saturating_sub(1);
    let offset = scroll_offset(selected.unwrap_or(0), rows);
    for (idx, member) in members.iter().enumerate().skip(offset).take(rows) {
        let text = format!(
            "{} {} {}",
            cell(&member.name, column),
            cell(&member.username, column),
            cell(&member.mobile, column)
        );
        lines.push(Line::from(Span::styled(text, row_style(selected == Some(idx)))));
    }
    lines
}
