//! Helper functions for UI rendering
//!
//! Truncation, column padding and the text shown in place of a list.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

use crate::traits::Placeholder;
use crate::ui::theme::{COLOR_DIM, COLOR_ERROR, COLOR_LOADING};
use crate::view_state::ListContent;

/// Truncate a string to approximately max_len bytes, adding "..." if truncated.
/// Safely handles UTF-8 by finding the nearest char boundary.
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        let target = max_len.saturating_sub(3);
        let end = find_char_boundary(s, target);
        format!("{}...", &s[..end])
    }
}

/// Find the nearest valid UTF-8 char boundary at or before the given byte index.
pub fn find_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    let mut end = index;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    end
}

/// A table cell: truncated to `width` columns and padded with spaces to fill it.
pub fn cell(s: &str, width: usize) -> String {
    let mut text = truncate_string(s, width);
    // Wide characters can still overflow after a byte-based cut
    while text.width() > width {
        text.pop();
    }
    let padding = width - text.width();
    text.push_str(&" ".repeat(padding));
    text
}

/// First row to draw so that `selected` stays inside `height` rows.
pub fn scroll_offset(selected: usize, height: usize) -> usize {
    if height == 0 {
        0
    } else {
        (selected + 1).saturating_sub(height)
    }
}

/// The line shown instead of records, or `None` when there are records.
pub fn list_status<T>(content: &ListContent<T>) -> Option<Line<'static>> {
    match content {
        ListContent::Records(_) | ListContent::Idle => None,
        ListContent::Loading => Some(Line::from(Span::styled(
            "Loading...",
            Style::default()
                .fg(COLOR_LOADING)
                .add_modifier(Modifier::ITALIC),
        ))),
        ListContent::Placeholder(Placeholder::Empty(message)) => Some(Line::from(Span::styled(
            *message,
            Style::default().fg(COLOR_DIM),
        ))),
        ListContent::Placeholder(Placeholder::Error(message)) => Some(Line::from(vec![
            Span::styled("\u{2717} ", Style::default().fg(COLOR_ERROR)),
            Span::styled(message.clone(), Style::default().fg(COLOR_ERROR)),
        ])),
    }
}
