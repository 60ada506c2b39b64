//! Form state management and form structs

use super::field::FormField;
use super::validation::{validate_email, validate_required, ValidationResult};

/// Label of the contact submit button while idle
pub const SEND_LABEL: &str = "Send Message";
/// Label of the contact submit button while a request is in flight
pub const SENDING_LABEL: &str = "Sending...";

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    /// Text field under the cursor, `None` on the button row
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
    fn get_field(&self, index: usize) -> Option<&FormField>;
    /// Clear every error slot and indicator
    fn reset_feedback(&mut self);
    /// Validate the current field values from scratch
    fn validate(&self) -> ValidationResult;
    /// Render a validation result onto the field slots
    fn bind(&mut self, result: &ValidationResult);

    fn is_button_row_active(&self) -> bool {
        self.active_field() == self.field_count() - 1
    }
}

fn bind_field(field: &mut FormField, result: &ValidationResult) {
    if let Some(message) = result.error_for(&field.name) {
        field.mark_invalid(message);
    }
}

/// Submit button of a form that performs network I/O
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitButton {
    pub enabled: bool,
    pub label: String,
}

impl SubmitButton {
    pub fn new(label: &str) -> Self {
        Self {
            enabled: true,
            label: label.to_string(),
        }
    }
}

// Resume Request Form
#[derive(Debug, Clone)]
pub struct ResumeForm {
    pub name: FormField,
    pub email: FormField,
    pub active_field_index: usize,
}

impl ResumeForm {
    pub fn new() -> Self {
        Self {
            name: FormField::text("name", "Full Name", false),
            email: FormField::text("email", "Email Address", false),
            active_field_index: 0,
        }
    }

    /// Advisory feedback while typing in the name field.
    /// Length is counted in UTF-16 units, as a browser input reports it.
    pub fn name_changed(&mut self) {
        if self.name.trimmed().encode_utf16().count() >= 2 {
            self.name.mark_valid();
        }
    }

    /// Advisory feedback while typing in the email field
    pub fn email_changed(&mut self) {
        if super::validation::is_email_shaped(self.email.trimmed()) {
            self.email.mark_valid();
        }
    }

    /// Name used in the acknowledgment, `"User"` when blank
    pub fn greeting_name(&self) -> &str {
        let name = self.name.trimmed();
        if name.is_empty() {
            "User"
        } else {
            name
        }
    }
}

impl Default for ResumeForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for ResumeForm {
    fn field_count(&self) -> usize {
        3 // name, email, button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(2);
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        match self.active_field_index {
            0 => Some(&mut self.name),
            1 => Some(&mut self.email),
            _ => None,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.name),
            1 => Some(&self.email),
            _ => None,
        }
    }
    fn reset_feedback(&mut self) {
        self.name.reset_feedback();
        self.email.reset_feedback();
    }
    fn validate(&self) -> ValidationResult {
        let name = validate_required(self.name.as_text(), "your full name");
        let email = validate_email(
            self.email.as_text(),
            "your email address",
            "a valid email address",
        );
        ValidationResult::from_fields([
            (self.name.name.as_str(), &name),
            (self.email.name.as_str(), &email),
        ])
    }
    fn bind(&mut self, result: &ValidationResult) {
        bind_field(&mut self.name, result);
        bind_field(&mut self.email, result);
    }
}

// Contact Form
#[derive(Debug, Clone)]
pub struct ContactForm {
    pub name: FormField,
    pub email: FormField,
    pub message: FormField,
    pub submit: SubmitButton,
    /// Where submissions are posted
    pub endpoint: String,
    pub active_field_index: usize,
}

impl ContactForm {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            name: FormField::text("name", "Name", false),
            email: FormField::text("email", "Email", false),
            message: FormField::text("message", "Message", true),
            submit: SubmitButton::new(SEND_LABEL),
            endpoint: endpoint.into(),
            active_field_index: 0,
        }
    }

    /// Field set posted to the endpoint, untrimmed like a browser form
    pub fn payload(&self) -> Vec<(String, String)> {
        [&self.name, &self.email, &self.message]
            .into_iter()
            .map(|f| (f.name.clone(), f.value.clone()))
            .collect()
    }

    pub fn is_submitting(&self) -> bool {
        !self.submit.enabled
    }

    /// Disable the button for the duration of a request
    pub fn begin_submission(&mut self) {
        self.submit.enabled = false;
        self.submit.label = SENDING_LABEL.to_string();
    }

    /// Re-enable the button and restore its label
    pub fn end_submission(&mut self) {
        self.submit.enabled = true;
        self.submit.label = SEND_LABEL.to_string();
    }

    /// Empty every field
    pub fn reset(&mut self) {
        for field in [&mut self.name, &mut self.email, &mut self.message] {
            field.clear();
            field.reset_feedback();
        }
    }
}

impl Form for ContactForm {
    fn field_count(&self) -> usize {
        4 // name, email, message, button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(3);
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        match self.active_field_index {
            0 => Some(&mut self.name),
            1 => Some(&mut self.email),
            2 => Some(&mut self.message),
            _ => None,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.name),
            1 => Some(&self.email),
            2 => Some(&self.message),
            _ => None,
        }
    }
    fn reset_feedback(&mut self) {
        self.name.reset_feedback();
        self.email.reset_feedback();
        self.message.reset_feedback();
    }
    fn validate(&self) -> ValidationResult {
        let name = validate_required(self.name.as_text(), "your name");
        let email = validate_email(self.email.as_text(), "your email", "a valid email");
        let message = validate_required(self.message.as_text(), "your message");
        ValidationResult::from_fields([
            (self.name.name.as_str(), &name),
            (self.email.name.as_str(), &email),
            (self.message.name.as_str(), &message),
        ])
    }
    fn bind(&mut self, result: &ValidationResult) {
        bind_field(&mut self.name, result);
        bind_field(&mut self.email, result);
        bind_field(&mut self.message, result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::FieldIndicator;

    fn filled_contact(name: &str, email: &str, message: &str) -> ContactForm {
        let mut form = ContactForm::new("https://forms.example.test/f/abc");
        form.name.set_text(name);
        form.email.set_text(email);
        form.message.set_text(message);
        form
    }

    mod resume_form {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_has_correct_defaults() {
            let form = ResumeForm::new();
            assert_eq!(form.active_field_index, 0);
            assert_eq!(form.name.name, "name");
            assert_eq!(form.email.name, "email");
        }

        #[test]
        fn test_field_navigation_wraps() {
            let mut form = ResumeForm::new();
            form.prev_field();
            assert_eq!(form.active_field_index, 2);
            assert!(form.is_button_row_active());
            form.next_field();
            assert_eq!(form.active_field_index, 0);
        }

        #[test]
        fn test_button_row_has_no_text_field() {
            let mut form = ResumeForm::new();
            form.set_active_field(100);
            assert_eq!(form.active_field_index, 2);
            assert!(form.get_active_field_mut().is_none());
            assert!(form.get_field(2).is_none());
        }

        #[test]
        fn test_empty_name_uses_full_name_message() {
            let mut form = ResumeForm::new();
            form.email.set_text("ada@example.com");
            let result = form.validate();
            assert_eq!(result.error_for("name"), Some("Please enter your full name"));
            assert_eq!(result.error_for("email"), None);
        }

        #[test]
        fn test_bad_email_uses_resume_wording() {
            let mut form = ResumeForm::new();
            form.name.set_text("Ada");
            form.email.set_text("ada");
            assert_eq!(
                form.validate().error_for("email"),
                Some("Please enter a valid email address")
            );
            form.email.set_text("");
            assert_eq!(
                form.validate().error_for("email"),
                Some("Please enter your email address")
            );
        }

        #[test]
        fn test_bind_marks_only_invalid_fields() {
            let mut form = ResumeForm::new();
            form.name.set_text("Ada");
            let result = form.validate();
            form.bind(&result);
            assert_eq!(form.name.indicator, FieldIndicator::Neutral);
            assert_eq!(form.email.indicator, FieldIndicator::Invalid);
        }

        #[test]
        fn test_name_changed_needs_two_chars() {
            let mut form = ResumeForm::new();
            form.name.mark_invalid("Please enter your full name");
            form.name.set_text(" A ");
            form.name_changed();
            assert_eq!(form.name.indicator, FieldIndicator::Invalid);
            form.name.set_text(" Ad ");
            form.name_changed();
            assert_eq!(form.name.indicator, FieldIndicator::Valid);
            assert!(form.name.error.is_none());
        }

        #[test]
        fn test_name_length_counts_utf16_units() {
            let mut form = ResumeForm::new();
            form.name.mark_invalid("Please enter your full name");
            form.name.set_text("é");
            form.name_changed();
            assert_eq!(form.name.indicator, FieldIndicator::Invalid);
            // One astral character is two UTF-16 units
            form.name.set_text("𝓐");
            form.name_changed();
            assert_eq!(form.name.indicator, FieldIndicator::Valid);
        }

        #[test]
        fn test_email_changed_needs_email_shape() {
            let mut form = ResumeForm::new();
            form.email.mark_invalid("Please enter a valid email address");
            form.email.set_text("ada@example");
            form.email_changed();
            assert!(form.email.error.is_some());
            form.email.set_text("ada@example.com ");
            form.email_changed();
            assert_eq!(form.email.indicator, FieldIndicator::Valid);
            assert!(form.email.error.is_none());
        }

        #[test]
        fn test_greeting_name_falls_back() {
            let mut form = ResumeForm::new();
            assert_eq!(form.greeting_name(), "User");
            form.name.set_text("  Grace ");
            assert_eq!(form.greeting_name(), "Grace");
        }
    }

    mod contact_form {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_has_idle_button() {
            let form = ContactForm::new("https://forms.example.test/f/abc");
            assert_eq!(form.submit, SubmitButton::new(SEND_LABEL));
            assert!(!form.is_submitting());
            assert!(form.message.is_multiline);
        }

        #[test]
        fn test_field_count_includes_button() {
            let form = ContactForm::new("x");
            assert_eq!(form.field_count(), 4);
            assert_eq!(form.get_field(2).map(|f| f.name.as_str()), Some("message"));
            assert!(form.get_field(3).is_none());
        }

        #[test]
        fn test_only_name_rejected() {
            let form = filled_contact("", "a@b.com", "hi");
            let result = form.validate();
            assert_eq!(result.field_errors.len(), 1);
            assert_eq!(result.error_for("name"), Some("Please enter your name"));
        }

        #[test]
        fn test_contact_wording() {
            let form = filled_contact("Ada", "a@b", " ");
            let result = form.validate();
            assert_eq!(result.error_for("email"), Some("Please enter a valid email"));
            assert_eq!(result.error_for("message"), Some("Please enter your message"));
            let form = filled_contact("Ada", "", "hi");
            assert_eq!(form.validate().error_for("email"), Some("Please enter your email"));
        }

        #[test]
        fn test_submission_toggles_button() {
            let mut form = ContactForm::new("x");
            form.begin_submission();
            assert!(form.is_submitting());
            assert_eq!(form.submit.label, SENDING_LABEL);
            form.end_submission();
            assert!(!form.is_submitting());
            assert_eq!(form.submit.label, SEND_LABEL);
        }

        #[test]
        fn test_payload_has_all_fields() {
            let form = filled_contact("Ada", "a@b.com", "hi");
            assert_eq!(
                form.payload(),
                vec![
                    ("name".to_string(), "Ada".to_string()),
                    ("email".to_string(), "a@b.com".to_string()),
                    ("message".to_string(), "hi".to_string()),
                ]
            );
        }

        #[test]
        fn test_reset_empties_fields() {
            let mut form = filled_contact("Ada", "a@b.com", "hi");
            form.reset();
            assert_eq!(form.name.as_text(), "");
            assert_eq!(form.email.as_text(), "");
            assert_eq!(form.message.as_text(), "");
            assert_eq!(form.endpoint, "https://forms.example.test/f/abc");
        }
    }
}
