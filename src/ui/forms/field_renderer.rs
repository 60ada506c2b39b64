//! Field rendering utilities for forms

use crate::state::FormField;
use crate::ui::theme::Palette;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows taken by a single-line field slot: bordered input plus its error line
pub const FIELD_SLOT_HEIGHT: u16 = 4;

/// Draw a field slot: the bordered input and the error line under it
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    palette: &Palette,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Input box
            Constraint::Length(1), // Error slot
        ])
        .split(area);

    let border_style = Style::default().fg(palette.field_border(field.indicator, is_active));
    let text_style = Style::default().fg(palette.text);
    let cursor = if is_active { "▌" } else { "" };

    let content = if field.is_multiline {
        let mut lines: Vec<Line> = field
            .display_value()
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), text_style)))
            .collect();
        if is_active {
            if let Some(last) = lines.last_mut() {
                last.spans
                    .push(Span::styled(cursor, Style::default().fg(palette.accent)));
            }
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(field.display_value(), text_style),
            Span::styled(cursor, Style::default().fg(palette.accent)),
        ]))
    };

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), chunks[0]);

    if let Some(error) = &field.error {
        let error_line = Paragraph::new(Span::styled(
            format!(" {error}"),
            Style::default()
                .fg(palette.error_text())
                .add_modifier(Modifier::ITALIC),
        ));
        frame.render_widget(error_line, chunks[1]);
    }
}

/// Draw a line of dim help text
pub fn draw_help_text(frame: &mut Frame, area: Rect, text: &str, palette: &Palette) {
    let help = Paragraph::new(Span::styled(text, Style::default().fg(palette.muted)))
        .wrap(Wrap { trim: true });
    frame.render_widget(help, area);
}
