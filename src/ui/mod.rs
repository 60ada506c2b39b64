//! UI module for rendering the TUI
//!
//! Drawing only reads state. Field feedback arrives here already bound onto
//! the field slots by the forms.

mod components;
mod forms;
mod layout;
mod theme;

use crate::app::App;
use crate::state::View;
use components::{render_alert_dialog, render_resume_modal};
use ratatui::{style::Style, widgets::Block, Frame};
use theme::Palette;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let palette = Palette::for_mode(app.state.dark_mode);
    let area = frame.area();

    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background)),
        area,
    );

    let (tab_area, main_area, status_area) = layout::create_layout(area);
    layout::draw_tab_bar(frame, tab_area, app, &palette);

    match app.state.current_view {
        View::Resume => forms::draw_resume_form(frame, main_area, app, &palette),
        View::Contact => forms::draw_contact_form(frame, main_area, app, &palette),
    }

    layout::draw_status_bar(frame, status_area, app, &palette);

    // Overlays, alert on top
    if app.state.show_resume_modal {
        render_resume_modal(frame, &app.config.resume_path, &palette);
    }
    if let Some(alert) = app.state.current_alert() {
        render_alert_dialog(frame, alert, &palette);
    }
}
