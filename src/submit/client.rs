//! HTTP client for the contact form endpoint
//!
//! Posts the form's field set form-encoded with `Accept: application/json`
//! and classifies the response into a [`SubmissionOutcome`].

use super::outcome::{ContactSubmission, SubmissionOutcome};
use super::traits::ContactSubmitter;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use serde::Deserialize;

/// Error body of a rejected submission
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

/// Client for posting contact submissions
#[derive(Debug, Clone)]
pub struct ContactClient {
    client: reqwest::Client,
}

impl ContactClient {
    /// Create a new contact client.
    /// No request timeout is set; a hung request stays in flight.
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { client })
    }
}

#[async_trait]
impl ContactSubmitter for ContactClient {
    async fn submit(&self, submission: ContactSubmission) -> SubmissionOutcome {
        tracing::debug!(endpoint = %submission.endpoint, "Posting contact form");

        let response = match self
            .client
            .post(&submission.endpoint)
            .header(ACCEPT, "application/json")
            .form(&submission.fields)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => return SubmissionOutcome::NetworkError(e.to_string()),
        };

        let status = response.status();
        if status.is_success() {
            return SubmissionOutcome::Success;
        }

        // Anything other than `{"error": "<text>"}` falls back to the generic message
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.error)
            .filter(|e| !e.is_empty());
        tracing::warn!(%status, error = ?message, "Contact endpoint rejected submission");

        SubmissionOutcome::ServerError(message)
    }
}
