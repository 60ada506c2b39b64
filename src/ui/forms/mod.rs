//! Form rendering module
//!
//! - `field_renderer`: field slot rendering
//! - `resume_form`: resume request form
//! - `contact_form`: contact form

mod contact_form;
mod field_renderer;
mod resume_form;

pub use contact_form::draw_contact_form;
pub use resume_form::draw_resume_form;
