//! Application state and core logic

use crate::config::{AppConfig, Preferences};
use crate::platform::{DocumentOpener, SystemOpener};
use crate::state::{Alert, AppState, Form, View};
use crate::submit::{ContactClient, ContactSubmission, ContactSubmitter, SubmissionOutcome};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot::{self, error::TryRecvError};

/// How long shutdown waits for an in-flight contact submission
pub const SHUTDOWN_GRACE: Duration = Duration::from_secs(3);

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Static settings
    pub config: AppConfig,
    /// Persisted preference flag
    preferences: Preferences,
    /// Posts the contact form
    submitter: Arc<dyn ContactSubmitter>,
    /// Opens the resume document
    opener: Box<dyn DocumentOpener>,
    /// Outcome of the in-flight contact submission
    pending: Option<oneshot::Receiver<SubmissionOutcome>>,
    /// Whether the app should quit
    quit: bool,
    /// Transient status bar message
    pub status_message: Option<String>,
}

impl App {
    /// Create a new App instance wired to the real HTTP client and opener
    pub fn new() -> Result<Self> {
        let config = AppConfig::from_env();
        let preferences = Preferences::load()?;
        let submitter = Arc::new(ContactClient::new()?);
        Ok(Self::with_parts(
            config,
            preferences,
            submitter,
            Box::new(SystemOpener),
        ))
    }

    /// Assemble an App from its collaborators
    pub fn with_parts(
        config: AppConfig,
        preferences: Preferences,
        submitter: Arc<dyn ContactSubmitter>,
        opener: Box<dyn DocumentOpener>,
    ) -> Self {
        let mut state = AppState::new(config.contact_endpoint.clone());
        state.dark_mode = preferences.is_dark_mode();

        Self {
            state,
            config,
            preferences,
            submitter,
            opener,
            pending: None,
            quit: false,
            status_message: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn quit(&mut self) {
        self.quit = true;
    }

    /// Whether a contact submission is in flight
    pub fn has_pending_submission(&self) -> bool {
        self.pending.is_some()
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Overlays swallow every key until dismissed
        if self.state.has_overlay() {
            self.handle_overlay_key(key);
            return Ok(());
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::F(1) => self.state.current_view = View::Resume,
            KeyCode::F(2) => self.state.current_view = View::Contact,
            KeyCode::F(3) => self.state.show_resume_modal = true,
            KeyCode::Char('t') if ctrl => self.toggle_theme(),
            KeyCode::Char('s') if ctrl => self.submit_current_form(),
            KeyCode::Tab => self.state.next_form_field(),
            KeyCode::BackTab => self.state.prev_form_field(),
            KeyCode::Enter => {
                if self.state.is_active_field_multiline() {
                    if let Some(field) = self.state.active_field_mut() {
                        field.push_char('\n');
                    }
                } else {
                    // Enter in a single-line field submits, like a browser form
                    self.submit_current_form();
                }
            }
            KeyCode::Char(c) if !ctrl => {
                if let Some(field) = self.state.active_field_mut() {
                    field.push_char(c);
                    self.field_edited();
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = self.state.active_field_mut() {
                    field.pop_char();
                    self.field_edited();
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_overlay_key(&mut self, key: KeyEvent) {
        let dismiss = matches!(key.code, KeyCode::Enter | KeyCode::Esc);
        if self.state.current_alert().is_some() {
            if dismiss {
                self.state.dismiss_alert();
            }
        } else if dismiss || key.code == KeyCode::F(3) {
            self.state.show_resume_modal = false;
        }
    }

    fn submit_current_form(&mut self) {
        match self.state.current_view {
            View::Resume => {
                self.submit_resume_form();
            }
            View::Contact => {
                self.submit_contact_form();
            }
        }
    }

    /// Live feedback after the active field changed
    fn field_edited(&mut self) {
        if self.state.current_view != View::Resume {
            return;
        }
        let form = &mut self.state.resume_form;
        match form.active_field() {
            0 => form.name_changed(),
            1 => form.email_changed(),
            _ => {}
        }
    }

    /// Validate the resume form and, when valid, open the resume.
    /// Returns true when the document was requested.
    pub fn submit_resume_form(&mut self) -> bool {
        let form = &mut self.state.resume_form;
        form.reset_feedback();
        let result = form.validate();
        form.bind(&result);

        if !result.is_valid() {
            tracing::debug!(errors = ?result.field_errors, "Resume form rejected");
            return false;
        }

        match self.opener.open(&self.config.resume_path) {
            Ok(()) => {
                let name = self.state.resume_form.greeting_name();
                let message = format!("Resume opened! Thank you, {name}");
                tracing::info!(path = %self.config.resume_path, "Resume opened");
                self.state.push_alert(Alert::Info(message));
            }
            Err(e) => {
                tracing::warn!(error = %e, "Could not open resume");
                self.state.push_alert(Alert::Error(e.to_string()));
            }
        }
        true
    }

    /// Validate the contact form and, when valid, start posting it.
    /// Returns true when a request was started.
    pub fn submit_contact_form(&mut self) -> bool {
        let form = &mut self.state.contact_form;
        if form.is_submitting() {
            tracing::debug!("Contact submission already in flight");
            return false;
        }

        form.reset_feedback();
        let result = form.validate();
        form.bind(&result);

        if !result.is_valid() {
            tracing::debug!(errors = ?result.field_errors, "Contact form rejected");
            return false;
        }

        form.begin_submission();
        let submission = ContactSubmission {
            endpoint: form.endpoint.clone(),
            fields: form.payload(),
        };

        let submitter = Arc::clone(&self.submitter);
        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            let outcome = submitter.submit(submission).await;
            // Receiver only goes away when the app is shutting down
            let _ = tx.send(outcome);
        });
        self.pending = Some(rx);
        true
    }

    /// Apply the contact outcome if it has arrived
    pub fn poll_contact_submission(&mut self) -> Option<SubmissionOutcome> {
        let rx = self.pending.as_mut()?;
        let outcome = match rx.try_recv() {
            Ok(outcome) => outcome,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Closed) => lost_outcome(),
        };
        self.pending = None;
        self.finish_contact_submission(&outcome);
        Some(outcome)
    }

    /// Wait for the in-flight contact submission and apply its outcome
    pub async fn wait_contact_submission(&mut self) -> Option<SubmissionOutcome> {
        let rx = self.pending.take()?;
        let outcome = rx.await.unwrap_or_else(|_| lost_outcome());
        self.finish_contact_submission(&outcome);
        Some(outcome)
    }

    /// Wait at most `limit` for the in-flight submission.
    /// A request still hanging after that is abandoned and the button released.
    pub async fn settle_contact_submission(
        &mut self,
        limit: Duration,
    ) -> Option<SubmissionOutcome> {
        if self.pending.is_none() {
            return None;
        }
        match tokio::time::timeout(limit, self.wait_contact_submission()).await {
            Ok(outcome) => outcome,
            Err(_) => {
                tracing::warn!(?limit, "Abandoning contact submission still in flight");
                self.pending = None;
                self.state.contact_form.end_submission();
                None
            }
        }
    }

    fn finish_contact_submission(&mut self, outcome: &SubmissionOutcome) {
        match outcome {
            SubmissionOutcome::Success => {
                tracing::info!("Contact form sent");
                self.state.contact_form.reset();
                self.state.push_alert(Alert::Info(outcome.user_message()));
            }
            SubmissionOutcome::ServerError(_) => {
                self.state.push_alert(Alert::Error(outcome.user_message()));
            }
            SubmissionOutcome::NetworkError(detail) => {
                tracing::error!(error = %detail, "Form submission error");
                self.state.push_alert(Alert::Error(outcome.user_message()));
            }
        }
        self.state.contact_form.end_submission();
    }

    /// Flip the theme and persist the flag
    pub fn toggle_theme(&mut self) {
        self.state.dark_mode = !self.state.dark_mode;
        self.preferences.set_dark_mode(self.state.dark_mode);
        if let Err(e) = self.preferences.save() {
            tracing::warn!(error = %e, "Failed to save theme preference");
            self.status_message = Some("Theme preference not saved".to_string());
        }
    }
}

/// Outcome used when the submission task ended without reporting
fn lost_outcome() -> SubmissionOutcome {
    SubmissionOutcome::NetworkError("submission task ended without a result".to_string())
}
