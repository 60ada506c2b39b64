//! Alert dialog component

use super::base::{dismiss_hint, render_dialog, DialogConfig};
use crate::state::Alert;
use crate::ui::theme::Palette;
use ratatui::{style::Color, Frame};

/// Render the front alert centered on the screen
pub fn render_alert_dialog(frame: &mut Frame, alert: &Alert, palette: &Palette) {
    let (title, color) = match alert {
        Alert::Info(_) => ("Notice", Color::Green),
        Alert::Error(_) => ("Error", Color::Red),
    };

    render_dialog(
        frame,
        DialogConfig {
            title,
            title_color: color,
            border_color: color,
            background: palette.background,
            message: alert.message(),
            hint: Some(dismiss_hint(palette)),
            max_width: 60,
        },
    );
}
