//! Contact form submission over HTTP

mod client;
mod outcome;
mod traits;

pub use client::ContactClient;
pub use outcome::{ContactSubmission, SubmissionOutcome};
pub use traits::ContactSubmitter;

#[cfg(test)]
pub use traits::MockContactSubmitter;
