//! Resume preview modal

use super::base::{dismiss_hint, render_dialog, DialogConfig};
use crate::ui::theme::Palette;
use ratatui::Frame;

/// Render the resume modal pointing at the document path
pub fn render_resume_modal(frame: &mut Frame, resume_path: &str, palette: &Palette) {
    let message = format!(
        "My resume lives at {resume_path}.\n\nFill in the resume form to open it."
    );

    render_dialog(
        frame,
        DialogConfig {
            title: "Resume",
            title_color: palette.accent,
            border_color: palette.accent,
            background: palette.background,
            message: &message,
            hint: Some(dismiss_hint(palette)),
            max_width: 64,
        },
    );
}
