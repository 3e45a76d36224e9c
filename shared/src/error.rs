use thiserror::Error;

use crate::ErrorBody;

/// Failure of a single round trip to the REST backend
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response
    #[error("Network error: {0}")]
    Network(String),

    /// The backend answered with a non-2xx status
    #[error("Server error {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Http { status: u16, message: Option<String> },

    /// A 2xx response whose body did not match the expected shape
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// The request body could not be serialized
    #[error("Failed to serialize request: {0}")]
    Encode(String),
}

impl ApiError {
    /// Build an `Http` error from a status and raw body text.
    ///
    /// The body is expected to look like `{ "error": "..." }` but anything
    /// else (HTML error pages, empty bodies) just yields no message.
    pub fn from_error_body(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|body| body.error)
            .filter(|message| !message.is_empty());
        ApiError::Http { status, message }
    }

    /// The backend's own error message, if it sent one
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            ApiError::Http { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Text to show the user: the backend message verbatim, else `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        self.backend_message().unwrap_or(fallback).to_string()
    }
}
