//! Modal overlays: alerts, delete confirmations and the record forms.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::components::{
    input_field_height, render_dialog_frame, render_input_field, DialogFrameConfig,
    InputFieldConfig,
};
use super::layout::LayoutContext;
use super::theme::{COLOR_DIM, COLOR_ERROR};
use crate::models::CLUB_CODE_LEN;
use crate::view_state::{ClubForm, Confirm, FormField, MemberField, MemberForm, Modal};

const MAX_WIDTH: u16 = 60;

pub fn render_modal(frame: &mut Frame, area: Rect, modal: &Modal, ctx: &LayoutContext) {
    match modal {
        Modal::Alert(message) => render_alert(frame, area, message, ctx),
        Modal::Confirm(confirm) => render_confirm(frame, area, confirm, ctx),
        Modal::ClubForm(form) => render_club_form(frame, area, form, ctx),
        Modal::MemberForm(form) => render_member_form(frame, area, form, ctx),
    }
}

fn hint(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(text, Style::default().fg(COLOR_DIM)))
}

/// Rows needed for `text` wrapped at `width` columns.
fn wrapped_height(text: &str, width: u16) -> u16 {
    let width = width.max(1) as usize;
    text.chars().count().div_ceil(width).max(1) as u16
}

fn render_alert(frame: &mut Frame, area: Rect, message: &str, ctx: &LayoutContext) {
    let text_height = wrapped_height(message, MAX_WIDTH.saturating_sub(2));
    let config = DialogFrameConfig::new("Alert", text_height + 2)
        .max_width(MAX_WIDTH)
        .border_color(COLOR_ERROR);
    let inner = render_dialog_frame(frame, area, ctx, &config);

    let lines = vec![
        Line::from(message.to_string()),
        Line::default(),
        hint("Enter/Esc to close"),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

fn render_confirm(frame: &mut Frame, area: Rect, confirm: &Confirm, ctx: &LayoutContext) {
    let text_height = wrapped_height(&confirm.prompt, MAX_WIDTH.saturating_sub(2));
    let config = DialogFrameConfig::new("Confirm", text_height + 2).max_width(MAX_WIDTH);
    let inner = render_dialog_frame(frame, area, ctx, &config);

    let lines = vec![
        Line::from(confirm.prompt.clone()),
        Line::default(),
        hint("y/Enter to delete, n/Esc to cancel"),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

fn render_club_form(frame: &mut Frame, area: Rect, form: &ClubForm, ctx: &LayoutContext) {
    let name = InputFieldConfig::new("Club name", &form.club_name)
        .focused(form.focus == FormField::Name)
        .placeholder("e.g. Chess Society");
    let code_label = format!("Club code ({} digits)", CLUB_CODE_LEN);
    let code = InputFieldConfig::new(&code_label, &form.club_code)
        .focused(form.focus == FormField::Code)
        .placeholder("123456789012345678");

    render_form(frame, area, form.title(), &[name, code], ctx);
}

fn render_member_form(frame: &mut Frame, area: Rect, form: &MemberForm, ctx: &LayoutContext) {
    let masked = "*".repeat(form.password.chars().count());
    let fields = [
        InputFieldConfig::new("Name", &form.name).focused(form.focus == MemberField::Name),
        InputFieldConfig::new("Username", &form.username)
            .focused(form.focus == MemberField::Username),
        InputFieldConfig::new("Password", &masked)
            .focused(form.focus == MemberField::Password)
            .placeholder("leave blank to keep"),
        InputFieldConfig::new("Mobile", &form.mobile).focused(form.focus == MemberField::Mobile),
    ];

    render_form(frame, area, form.title(), &fields, ctx);
}

/// A dialog with `fields` stacked top to bottom and the form key hint below.
fn render_form(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    fields: &[InputFieldConfig],
    ctx: &LayoutContext,
) {
    let field_height = input_field_height();
    let config = DialogFrameConfig::new(title, field_height * fields.len() as u16 + 2)
        .max_width(MAX_WIDTH);
    let inner = render_dialog_frame(frame, area, ctx, &config);

    let mut y = inner.y;
    for field in fields {
        let field_area = Rect {
            y,
            height: field_height.min((inner.y + inner.height).saturating_sub(y)),
            ..inner
        };
        y += render_input_field(frame, field_area, field);
    }

    if y + 1 < inner.y + inner.height {
        let hint_area = Rect {
            y: y + 1,
            height: 1,
            ..inner
        };
        frame.render_widget(
            Paragraph::new(hint("Tab next field, Enter save, Esc cancel")),
            hint_area,
        );
    }
}
