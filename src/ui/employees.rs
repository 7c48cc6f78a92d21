//! Employee section: the current page of employees and the pagination bar.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::helpers::{cell, list_status, scroll_offset};
use super::layout::LayoutContext;
use super::theme::{COLOR_ACTIVE, COLOR_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_SELECTED_BG};
use crate::models::Employee;
use crate::view_state::{DashboardView, PaginationView};

const ID_WIDTH: usize = 10;
const CODE_WIDTH: usize = 20;

pub fn render_employees(frame: &mut Frame, area: Rect, view: &DashboardView, ctx: &LayoutContext) {
    let [list_area, pager_area] =
        Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(area);

    let block = Block::default()
        .title(Span::styled(
            " Employees ",
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(list_area);
    frame.render_widget(block, list_area);

    let lines = match list_status(&view.employees) {
        Some(status) => vec![status],
        None => employee_lines(
            view.employees.records(),
            view.employee_selected,
            inner,
            ctx,
        ),
    };
    frame.render_widget(Paragraph::new(lines), inner);

    frame.render_widget(Paragraph::new(pagination_line(&view.pagination)), pager_area);
}

fn employee_lines(
    employees: &[Employee],
    selected: usize,
    area: Rect,
    ctx: &LayoutContext,
) -> Vec<Line<'static>> {
    let show_code = !ctx.is_narrow();
    let name_width = (area.width as usize)
        .saturating_sub(ID_WIDTH + 1)
        .saturating_sub(if show_code { CODE_WIDTH + 1 } else { 0 });

    let mut header = format!("{} {}", cell("ID", ID_WIDTH), cell("Name", name_width));
    if show_code {
        header.push(' ');
        header.push_str(&cell("Member code", CODE_WIDTH));
    }
    let mut lines = vec![Line::from(Span::styled(
        header,
        Style::default().fg(COLOR_DIM).add_modifier(Modifier::BOLD),
    ))];

    let rows = (area.height as usize).saturating_sub(1);
    let offset = scroll_offset(selected, rows);
    for (idx, employee) in employees.iter().enumerate().skip(offset).take(rows) {
        let mut text = format!(
            "{} {}",
            cell(&employee.id, ID_WIDTH),
            cell(&employee.name, name_width)
        );
        if show_code {
            text.push(' ');
            text.push_str(&cell(
                employee.member_code.as_deref().unwrap_or("-"),
                CODE_WIDTH,
            ));
        }
        let style = if idx == selected {
            Style::default().bg(COLOR_SELECTED_BG).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        lines.push(Line::from(Span::styled(text, style)));
    }
    lines
}

/// `◀ Prev   Page X of Y   Next ▶`, with unavailable directions dimmed.
pub fn pagination_line(view: &PaginationView) -> Line<'static> {
    let control = |label: &'static str, enabled: bool| {
        let style = if enabled {
            Style::default().fg(COLOR_ACTIVE)
        } else {
            Style::default().fg(COLOR_DIM)
        };
        Span::styled(label, style)
    };

    Line::from(vec![
        Span::raw(" "),
        control("◀ Prev", view.prev_enabled),
        Span::raw("   "),
        Span::styled(view.label(), Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("   "),
        control("Next ▶", view.next_enabled),
        Span::styled(
            format!("   {} total", view.total_count),
            Style::default().fg(COLOR_DIM),
        ),
    ])
}
