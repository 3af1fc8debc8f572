use serde_json::Value as JsonValue;
use thiserror::Error;

/// Failure of a call against the panel API.
///
/// Mirrors what a browser HTTP client reports: either the server answered
/// with a non-success status (and possibly a body), or the request never got
/// a usable answer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HttpError {
    /// The panel answered with a non-2xx status.
    #[error("Request failed with status code {status}")]
    Status {
        status: u16,
        /// Raw response body, if any was readable.
        body: Option<String>,
    },
    /// Connection refused, DNS failure, aborted request and the like.
    #[error("Network Error: {0}")]
    Network(String),
    /// The panel answered 2xx but the body was not the expected resource.
    #[error("Invalid response body: {0}")]
    Decode(String),
}

impl HttpError {
    pub fn status(&self) -> Option<u16> {
        match self {
            HttpError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    fn body_json(&self) -> Option<JsonValue> {
        match self {
            // Non-JSON responses can still carry the error as a JSON block
            HttpError::Status { body: Some(body), .. } => serde_json::from_str(body).ok(),
            _ => None,
        }
    }
}

/// Turns an API failure into the message shown to the user.
///
/// Prefers the first `errors[].detail` of the panel's error document, then a
/// plain string `error` field (used by the daemon for uploads), and falls back
/// to the error's own description.
pub fn http_error_to_human(error: &HttpError) -> String {
    if let Some(data) = error.body_json() {
        if let Some(detail) = data
            .get("errors")
            .and_then(|e| e.get(0))
            .and_then(|e| e.get("detail"))
            .and_then(|d| d.as_str())
            .filter(|d| !d.is_empty())
        {
            return detail.to_string();
        }
        if let Some(msg) = data
            .get("error")
            .and_then(|e| e.as_str())
            .filter(|m| !m.is_empty())
        {
            return msg.to_string();
        }
    }
    error.to_string()
}

/// A validation failure attached to a single form field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// All field errors of one validation pass. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("validation failed for {} field(s)", .0.len())]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    /// Message for `field`, for rendering next to the input.
    pub fn for_field(&self, field: &str) -> Option<&str> {
        self.0.iter().find(|e| e.field == field).map(|e| e.message.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }
}

/// Why a submit did not start a remote call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitRejected {
    #[error("the dialog is not open")]
    Closed,
    #[error("a submission is already in flight")]
    AlreadySubmitting,
    #[error(transparent)]
    Invalid(#[from] ValidationErrors),
}
