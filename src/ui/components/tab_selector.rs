//! Tab Selector Component
//!
//! The dashboard's tab row. The active tab gets a `▶` marker and each tab is
//! prefixed with the number key that selects it.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_ACCENT, COLOR_DIM};
use crate::view_state::Tab;

/// Render the tab row with `active` marked.
///
/// # Example
/// ```ignore
/// let line = render_tab_selector(Tab::Club, &ctx);
/// ```
pub fn render_tab_selector(active: Tab, ctx: &LayoutContext) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = vec![Span::raw(" ")];

    for (idx, tab) in Tab::ALL.iter().enumerate() {
        let label = if ctx.is_compact() {
            tab.label().to_string()
        } else {
            format!("{} {}", idx + 1, tab.label())
        };

        if *tab == active {
            spans.push(Span::styled(
                "▶ ",
                Style::default()
                    .fg(COLOR_ACCENT)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            let style = Style::default().fg(COLOR_DIM);
            spans.push(Span::styled("  ", style));
            spans.push(Span::styled(label, style));
        }

        if idx < Tab::ALL.len() - 1 {
            let spacing = if ctx.is_extra_small() { " " } else { "   " };
            spans.push(Span::raw(spacing));
        }
    }

    Line::from(spans)
}
