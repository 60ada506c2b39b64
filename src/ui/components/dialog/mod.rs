//! Dialog components for TUI

mod alert_dialog;
mod base;
mod resume_modal;

pub use alert_dialog::render_alert_dialog;
pub use resume_modal::render_resume_modal;
