//! Wire types for the messenger backend.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::cookies::CookieDescriptor;
use crate::core::state::FormState;

/// Body of `POST /send`, URL-encoded.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct MessageForm {
    pub message_url: String,
    pub message: String,
}

/// The URL goes out trimmed, the same value validation accepted.
impl From<&FormState> for MessageForm {
    fn from(form: &FormState) -> Self {
        Self {
            message_url: form.message_url.trim().to_string(),
            message: form.message.clone(),
        }
    }
}

/// Body of `POST /set-cookies`, JSON.
#[derive(Serialize, Debug)]
pub struct SetCookiesRequest<'a> {
    pub cookies: &'a [CookieDescriptor],
}

/// Error payload the backend attaches to failed responses: `{"error": "..."}`.
#[derive(Deserialize, Debug, Default)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    /// Extracts a non-empty `error` string from a response body, if there is one.
    pub fn server_message(body: &str) -> Option<String> {
        serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.error)
            .filter(|msg| !msg.is_empty())
    }
}

/// Failure of a backend call. A 2xx response is never an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The backend answered with a non-2xx status.
    Api { status: u16, message: Option<String> },
    /// No response at all (connection refused, DNS, reset).
    Network(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Api { status, .. } => Some(*status),
            ApiError::Network(_) => None,
        }
    }

    /// Backend-supplied error text, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Api { message, .. } => message.as_deref(),
            ApiError::Network(_) => None,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Api { status, message } => match message {
                Some(msg) => write!(f, "backend error (HTTP {status}): {msg}"),
                None => write!(f, "backend error (HTTP {status})"),
            },
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}
