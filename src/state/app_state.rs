//! Application state definitions

use super::forms::{ContactForm, Form, FormField, ResumeForm};
use std::collections::VecDeque;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Resume,
    Contact,
}

impl View {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Resume => "Resume",
            Self::Contact => "Contact",
        }
    }
}

/// Blocking message shown over the current view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Alert {
    Info(String),
    Error(String),
}

impl Alert {
    pub fn message(&self) -> &str {
        match self {
            Self::Info(m) | Self::Error(m) => m,
        }
    }
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    // Navigation
    pub current_view: View,

    // Forms
    pub resume_form: ResumeForm,
    pub contact_form: ContactForm,

    // Overlays
    pub alerts: VecDeque<Alert>,
    pub show_resume_modal: bool,

    // Theme
    pub dark_mode: bool,
}

impl AppState {
    pub fn new(contact_endpoint: impl Into<String>) -> Self {
        Self {
            current_view: View::default(),
            resume_form: ResumeForm::new(),
            contact_form: ContactForm::new(contact_endpoint),
            alerts: VecDeque::new(),
            show_resume_modal: false,
            dark_mode: false,
        }
    }

    pub fn push_alert(&mut self, alert: Alert) {
        self.alerts.push_back(alert);
    }

    pub fn current_alert(&self) -> Option<&Alert> {
        self.alerts.front()
    }

    pub fn dismiss_alert(&mut self) {
        self.alerts.pop_front();
    }

    pub fn has_overlay(&self) -> bool {
        !self.alerts.is_empty() || self.show_resume_modal
    }

    pub fn next_form_field(&mut self) {
        match self.current_view {
            View::Resume => self.resume_form.next_field(),
            View::Contact => self.contact_form.next_field(),
        }
    }

    pub fn prev_form_field(&mut self) {
        match self.current_view {
            View::Resume => self.resume_form.prev_field(),
            View::Contact => self.contact_form.prev_field(),
        }
    }

    pub fn active_field_mut(&mut self) -> Option<&mut FormField> {
        match self.current_view {
            View::Resume => self.resume_form.get_active_field_mut(),
            View::Contact => self.contact_form.get_active_field_mut(),
        }
    }

    pub fn is_active_field_multiline(&self) -> bool {
        match self.current_view {
            View::Resume => self
                .resume_form
                .get_field(self.resume_form.active_field())
                .is_some_and(|f| f.is_multiline),
            View::Contact => self
                .contact_form
                .get_field(self.contact_form.active_field())
                .is_some_and(|f| f.is_multiline),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_view_is_resume() {
        let state = AppState::new("x");
        assert_eq!(state.current_view, View::Resume);
        assert!(!state.has_overlay());
    }

    #[test]
    fn test_alerts_are_fifo() {
        let mut state = AppState::new("x");
        state.push_alert(Alert::Info("first".to_string()));
        state.push_alert(Alert::Error("second".to_string()));
        assert_eq!(state.current_alert().map(Alert::message), Some("first"));
        state.dismiss_alert();
        assert_eq!(state.current_alert().map(Alert::message), Some("second"));
        state.dismiss_alert();
        assert!(state.current_alert().is_none());
    }

    #[test]
    fn test_navigation_targets_current_view() {
        let mut state = AppState::new("x");
        state.current_view = View::Contact;
        state.next_form_field();
        state.next_form_field();
        assert_eq!(state.contact_form.active_field_index, 2);
        assert_eq!(state.resume_form.active_field_index, 0);
        assert!(state.is_active_field_multiline());
    }

    #[test]
    fn test_active_field_mut_none_on_button_row() {
        let mut state = AppState::new("x");
        state.prev_form_field();
        assert!(state.resume_form.is_button_row_active());
        assert!(state.active_field_mut().is_none());
    }

    #[test]
    fn test_resume_modal_counts_as_overlay() {
        let mut state = AppState::new("x");
        state.show_resume_modal = true;
        assert!(state.has_overlay());
    }
}
