//! Submission request and outcome types

const SUCCESS_MESSAGE: &str = "Thank you! Your message has been sent successfully.";
const GENERIC_SERVER_MESSAGE: &str = "Something went wrong. Please try again.";
const NETWORK_MESSAGE: &str = "Network error. Please check your connection and try again.";

/// One POST of a form's field set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub endpoint: String,
    pub fields: Vec<(String, String)>,
}

/// Result of a single remote submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// 2xx response
    Success,
    /// Non-2xx response, with the body's `error` text when there was one
    ServerError(Option<String>),
    /// The request never completed. The detail is for logs only.
    NetworkError(String),
}

impl SubmissionOutcome {
    /// Text of the alert shown for this outcome
    pub fn user_message(&self) -> String {
        match self {
            Self::Success => SUCCESS_MESSAGE.to_string(),
            Self::ServerError(Some(message)) => format!("Error: {message}"),
            Self::ServerError(None) => GENERIC_SERVER_MESSAGE.to_string(),
            Self::NetworkError(_) => NETWORK_MESSAGE.to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}
