//! Input Field Component
//!
//! A labelled text field with a block cursor when focused.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::ui::theme::{COLOR_ACTIVE, COLOR_BORDER, COLOR_DIM};

/// Configuration for rendering an input field
#[derive(Debug, Clone)]
pub struct InputFieldConfig<'a> {
    /// Label displayed above the input
    pub label: &'a str,
    pub value: &'a str,
    pub focused: bool,
    /// Shown dimmed while the value is empty
    pub placeholder: Option<&'a str>,
}

impl<'a> InputFieldConfig<'a> {
    pub fn new(label: &'a str, value: &'a str) -> Self {
        Self {
            label,
            value,
            focused: false,
            placeholder: None,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }
}

/// Rows used by one field: the label plus a bordered box.
pub fn input_field_height() -> u16 {
    4
}

/// Render an input field and return the height it used.
///
/// Nothing is drawn when `area` is shorter than [`input_field_height`].
pub fn render_input_field(frame: &mut Frame, area: Rect, config: &InputFieldConfig) -> u16 {
    if area.height < input_field_height() {
        return 0;
    }

    let label_style = if config.focused {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(COLOR_DIM)
    };
    let label_area = Rect { height: 1, ..area };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(config.label, label_style))),
        label_area,
    );

    let input_area = Rect {
        y: area.y + 1,
        height: 3,
        ..area
    };
    let border_color = if config.focused {
        COLOR_ACTIVE
    } else {
        COLOR_BORDER
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color));

    let (text, style) = match config.placeholder {
        Some(placeholder) if config.value.is_empty() => {
            (placeholder.to_string(), Style::default().fg(COLOR_DIM))
        }
        _ => (config.value.to_string(), Style::default().fg(Color::White)),
    };
    let mut spans = vec![Span::styled(text, style)];
    if config.focused {
        spans.push(Span::styled("\u{2588}", Style::default().fg(Color::White)));
    }
    if config.focused && config.value.is_empty() {
        // Cursor before the placeholder
        spans.rotate_right(1);
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), input_area);
    input_field_height()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_input_field_config_builder() {
        let config = InputFieldConfig::new("Club code", "")
            .focused(true)
            .placeholder("18 digits");

        assert!(config.focused);
        assert_eq!(config.placeholder, Some("18 digits"));
    }

    #[test]
    fn test_renders_label_and_value() {
        let mut terminal = Terminal::new(TestBackend::new(30, 4)).unwrap();
        terminal
            .draw(|frame| {
                let config = InputFieldConfig::new("Club name", "Chess").focused(true);
                render_input_field(frame, frame.area(), &config);
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let row = |y: u16| -> String {
            (0..buffer.area.width)
                .map(|x| buffer[(x, y)].symbol().to_string())
                .collect()
        };
        assert!(row(0).starts_with("Club name"));
        assert!(row(2).contains("Chess\u{2588}"));
    }
}
