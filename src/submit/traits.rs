//! Trait abstraction for the contact submitter to enable mocking in tests

use super::outcome::{ContactSubmission, SubmissionOutcome};
use async_trait::async_trait;

/// Delivers a contact submission to its endpoint.
///
/// Every failure is folded into the returned outcome; a submitter never
/// errors out, so the caller always has exactly one outcome to act on.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactSubmitter: Send + Sync {
    /// Post the field set and classify the response
    async fn submit(&self, submission: ContactSubmission) -> SubmissionOutcome;
}
