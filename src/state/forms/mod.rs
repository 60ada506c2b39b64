//! Form domain layer
//!
//! Field slots, the two portfolio forms and the pure validators they share.

mod field;
mod form_state;
mod validation;

pub use field::{FieldIndicator, FormField};
pub use form_state::{ContactForm, Form, ResumeForm};

#[cfg(test)]
pub use form_state::{SENDING_LABEL, SEND_LABEL};
