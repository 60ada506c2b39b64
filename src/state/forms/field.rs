//! Form field slots

/// Visual state of a field slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldIndicator {
    #[default]
    Neutral,
    Valid,
    Invalid,
}

/// A single field slot: the input text plus its error display and indicator
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub value: String,
    pub is_multiline: bool,
    pub error: Option<String>,
    pub indicator: FieldIndicator,
}

impl FormField {
    /// Create a new empty text field
    pub fn text(name: &str, label: &str, is_multiline: bool) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: String::new(),
            is_multiline,
            error: None,
            indicator: FieldIndicator::Neutral,
        }
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    pub fn trimmed(&self) -> &str {
        self.value.trim()
    }

    #[allow(dead_code)] // key input goes through push_char; tests set whole values
    pub fn set_text(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// Drop any error text and return the slot to its neutral look
    pub fn reset_feedback(&mut self) {
        self.error = None;
        self.indicator = FieldIndicator::Neutral;
    }

    /// Show an error in this slot
    pub fn mark_invalid(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.indicator = FieldIndicator::Invalid;
    }

    /// Clear the error and show the slot as accepted
    pub fn mark_valid(&mut self) {
        self.error = None;
        self.indicator = FieldIndicator::Valid;
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> &str {
        &self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_field_is_neutral_and_empty() {
        let field = FormField::text("name", "Full Name", false);
        assert_eq!(field.as_text(), "");
        assert!(field.error.is_none());
        assert_eq!(field.indicator, FieldIndicator::Neutral);
    }

    #[test]
    fn test_push_and_pop_char() {
        let mut field = FormField::text("name", "Full Name", false);
        field.push_char('a');
        field.push_char('b');
        field.pop_char();
        assert_eq!(field.as_text(), "a");
    }

    #[test]
    fn test_trimmed_strips_whitespace() {
        let mut field = FormField::text("name", "Full Name", false);
        field.set_text("  Ada  ");
        assert_eq!(field.trimmed(), "Ada");
    }

    #[test]
    fn test_mark_invalid_sets_error() {
        let mut field = FormField::text("name", "Full Name", false);
        field.mark_invalid("Please enter your full name");
        assert_eq!(field.error.as_deref(), Some("Please enter your full name"));
        assert_eq!(field.indicator, FieldIndicator::Invalid);
    }

    #[test]
    fn test_mark_valid_clears_error() {
        let mut field = FormField::text("name", "Full Name", false);
        field.mark_invalid("Please enter your full name");
        field.mark_valid();
        assert!(field.error.is_none());
        assert_eq!(field.indicator, FieldIndicator::Valid);
    }

    #[test]
    fn test_reset_feedback_clears_error() {
        let mut field = FormField::text("name", "Full Name", false);
        field.mark_invalid("bad");
        field.reset_feedback();
        assert!(field.error.is_none());
        assert_eq!(field.indicator, FieldIndicator::Neutral);
    }
}
