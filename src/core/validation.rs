//! Pre-submit checks, the terminal stand-in for the browser's `required`
//! and `type="url"` constraint validation.
//!
//! A failed check blocks submission entirely: no status change, no request.

use std::fmt;

use reqwest::Url;

use crate::core::state::FormState;

/// Which input a validation error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    MessageUrl,
    Message,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    MissingUrl,
    InvalidUrl,
    MissingMessage,
}

impl ValidationError {
    pub fn field(&self) -> Field {
        match self {
            ValidationError::MissingUrl | ValidationError::InvalidUrl => Field::MessageUrl,
            ValidationError::MissingMessage => Field::Message,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingUrl | ValidationError::MissingMessage => {
                write!(f, "Please fill out this field.")
            }
            ValidationError::InvalidUrl => write!(f, "Please enter a URL."),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Checks fields in form order and reports the first failure.
///
/// The URL is trimmed before checking, the way a browser sanitizes
/// `type="url"` values. The message is only required to be non-empty.
pub fn validate(form: &FormState) -> Result<(), ValidationError> {
    let url = form.message_url.trim();
    if url.is_empty() {
        return Err(ValidationError::MissingUrl);
    }
    if Url::parse(url).is_err() {
        return Err(ValidationError::InvalidUrl);
    }
    if form.message.is_empty() {
        return Err(ValidationError::MissingMessage);
    }
    Ok(())
}
