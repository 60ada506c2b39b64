//! Contact form rendering

use super::field_renderer::{draw_field, draw_help_text, FIELD_SLOT_HEIGHT};
use crate::app::App;
use crate::state::Form;
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use crate::ui::theme::Palette;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders},
    Frame,
};

/// Draw the contact form
pub fn draw_contact_form(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let form = &app.state.contact_form;

    let block = Block::default()
        .title(" Get In Touch ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.accent));
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),                 // Help text
            Constraint::Length(FIELD_SLOT_HEIGHT), // Name
            Constraint::Length(FIELD_SLOT_HEIGHT), // Email
            Constraint::Min(6),                    // Message
            Constraint::Length(BUTTON_HEIGHT),     // Button
        ])
        .margin(2)
        .split(area);

    draw_help_text(
        frame,
        chunks[0],
        "Send me a message. Enter adds a new line in the message box.",
        palette,
    );

    let active = form.active_field();
    draw_field(frame, chunks[1], &form.name, active == 0, palette);
    draw_field(frame, chunks[2], &form.email, active == 1, palette);
    draw_field(frame, chunks[3], &form.message, active == 2, palette);

    let button_area = Rect {
        width: chunks[4].width.min(20),
        ..chunks[4]
    };
    render_button(
        frame,
        button_area,
        &form.submit.label,
        form.is_button_row_active(),
        form.submit.enabled,
        palette,
    );
}
