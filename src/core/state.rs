//! # Application State
//!
//! Everything the message form holds between events. Presentation-only state
//! (focus, cursor) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── form: FormState                   // the two controlled fields
//! ├── status: Status                    // banner kind + text
//! └── validation: Option<ValidationError> // blocked submit, if any
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::validation::ValidationError;

/// The two controlled fields. Both always hold a string, possibly empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub message_url: String,
    pub message: String,
}

impl FormState {
    pub fn clear(&mut self) {
        self.message_url.clear();
        self.message.clear();
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusKind {
    #[default]
    None,
    Info,
    Success,
    Error,
}

/// Outcome of the last operation. Always replaced wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Status {
    pub kind: StatusKind,
    pub text: String,
}

impl Status {
    pub fn info(text: impl Into<String>) -> Self {
        Self { kind: StatusKind::Info, text: text.into() }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self { kind: StatusKind::Success, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: StatusKind::Error, text: text.into() }
    }

    /// The banner is only shown when there is something to say.
    pub fn is_visible(&self) -> bool {
        !self.text.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct App {
    pub form: FormState,
    pub status: Status,
    /// Set when the last submit was blocked before reaching the network.
    pub validation: Option<ValidationError>,
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }
}
