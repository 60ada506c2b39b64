//! Layout components (tab bar, status bar)

use super::theme::Palette;
use crate::app::App;
use crate::platform::{SUBMIT_SHORTCUT, THEME_SHORTCUT};
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Tabs in display order with their function keys
const TABS: &[(&str, View)] = &[("F1", View::Resume), ("F2", View::Contact)];

/// Split the screen into tab bar, content and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Tab bar
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Draw the tab bar
pub fn draw_tab_bar(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let mut spans = vec![Span::styled(
        " Portfolio ",
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD),
    )];

    for (key, view) in TABS {
        let style = if app.state.current_view == *view {
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(palette.muted)
        };
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(format!("{key} {}", view.title()), style));
    }
    spans.push(Span::raw(" | "));
    spans.push(Span::styled("F3 View resume", Style::default().fg(palette.muted)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let mut spans = vec![Span::raw(" "), Span::raw(view_hints(&app.state.current_view))];

    if app.state.contact_form.is_submitting() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            "Sending message...",
            Style::default().fg(palette.accent),
        ));
    }

    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(palette.error_text())));
    }

    let theme = if app.state.dark_mode { "dark" } else { "light" };
    spans.push(Span::raw(" | "));
    spans.push(Span::raw(format!("{THEME_SHORTCUT}:theme ({theme})  ^C:quit")));

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(palette.status_bar));
    frame.render_widget(status, area);
}

/// Get keyboard hints for the current view
fn view_hints(view: &View) -> String {
    match view {
        View::Resume => format!("Tab:next  Enter/{SUBMIT_SHORTCUT}:download"),
        View::Contact => format!("Tab:next  {SUBMIT_SHORTCUT}:send"),
    }
}
