//! # Actions
//!
//! Everything that can happen to the form becomes an `Action`.
//! User presses Ctrl+S? That's `Action::Submit`.
//! Backend answers? That's `Action::SendFinished(result)`.
//!
//! `update()` applies an action to the state and returns the `Effect` the
//! adapter must carry out. Network I/O happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{error, info};

use crate::api::{ApiError, MessageForm};
use crate::core::state::{App, Status};
use crate::core::validation::validate;

pub const SENDING: &str = "Sending message...";
pub const SEND_SUCCEEDED: &str = "Message sent successfully!";
pub const SEND_FALLBACK: &str = "Failed to send message. Please try again.";
pub const AUTH_FAILED: &str =
    "Authentication failed. Please check your browser cookies and try again.";
pub const TRANSFER_SUCCEEDED: &str = "Browser session transferred successfully!";
pub const TRANSFER_FAILED: &str = "Failed to transfer browser session. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Controlled-field edit: the full new value of the URL input.
    SetMessageUrl(String),
    /// Controlled-field edit: the full new value of the message input.
    SetMessage(String),
    Submit,
    TransferSession,
    SendFinished(Result<(), ApiError>),
    /// The error is the diagnostic text of whatever failed (cookie store or backend).
    TransferFinished(Result<(), String>),
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    /// POST this snapshot to `/send`.
    SpawnSend(MessageForm),
    /// Harvest cookies and POST them to `/set-cookies`.
    SpawnTransfer,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::SetMessageUrl(value) => {
            app.form.message_url = value;
            app.validation = None;
            Effect::None
        }
        Action::SetMessage(value) => {
            app.form.message = value;
            app.validation = None;
            Effect::None
        }
        Action::Submit => {
            if let Err(e) = validate(&app.form) {
                info!("Submit blocked: {:?}", e);
                app.validation = Some(e);
                return Effect::None;
            }
            app.validation = None;
            app.status = Status::info(SENDING);
            Effect::SpawnSend(MessageForm::from(&app.form))
        }
        Action::TransferSession => Effect::SpawnTransfer,
        Action::SendFinished(Ok(())) => {
            app.status = Status::success(SEND_SUCCEEDED);
            app.form.clear();
            Effect::None
        }
        Action::SendFinished(Err(e)) => {
            error!("Error: {}", e);
            app.status = Status::error(send_error_text(&e));
            Effect::None
        }
        Action::TransferFinished(Ok(())) => {
            app.status = Status::success(TRANSFER_SUCCEEDED);
            Effect::None
        }
        Action::TransferFinished(Err(e)) => {
            error!("Error transferring cookies: {}", e);
            app.status = Status::error(TRANSFER_FAILED);
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

/// User-facing text for a failed send, chosen by status code.
pub fn send_error_text(err: &ApiError) -> String {
    let server_message = err.server_message().unwrap_or(SEND_FALLBACK);
    match err.status() {
        Some(401) => AUTH_FAILED.to_string(),
        Some(500) => format!(
            "Server error: {}. Check the console for more details.",
            server_message
        ),
        _ => server_message.to_string(),
    }
}
