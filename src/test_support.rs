//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Mutex;

use async_trait::async_trait;

use crate::api::{ApiError, Backend, MessageForm};
use crate::core::cookies::{CookieDescriptor, CookieStore, CookieStoreError};
use crate::core::state::{App, FormState};

/// A backend that records every call and answers with a fixed result.
pub struct RecordingBackend {
    result: Result<(), ApiError>,
    forms: Mutex<Vec<MessageForm>>,
    cookies: Mutex<Vec<Vec<CookieDescriptor>>>,
}

impl RecordingBackend {
    pub fn ok() -> Self {
        Self::with_result(Ok(()))
    }

    pub fn failing(err: ApiError) -> Self {
        Self::with_result(Err(err))
    }

    fn with_result(result: Result<(), ApiError>) -> Self {
        Self {
            result,
            forms: Mutex::new(Vec::new()),
            cookies: Mutex::new(Vec::new()),
        }
    }

    pub fn sent_forms(&self) -> Vec<MessageForm> {
        self.forms.lock().unwrap().clone()
    }

    pub fn cookie_calls(&self) -> Vec<Vec<CookieDescriptor>> {
        self.cookies.lock().unwrap().clone()
    }
}

#[async_trait]
impl Backend for RecordingBackend {
    async fn send_message(&self, form: &MessageForm) -> Result<(), ApiError> {
        self.forms.lock().unwrap().push(form.clone());
        self.result.clone()
    }

    async fn set_cookies(&self, cookies: &[CookieDescriptor]) -> Result<(), ApiError> {
        self.cookies.lock().unwrap().push(cookies.to_vec());
        self.result.clone()
    }
}

/// A cookie store whose file never exists.
pub struct FailingCookieStore;

impl CookieStore for FailingCookieStore {
    fn read(&self) -> Result<String, CookieStoreError> {
        Err(CookieStoreError::Io {
            path: "cookies.txt".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        })
    }
}

/// Creates an empty App.
pub fn test_app() -> App {
    App::new()
}

/// Creates an App whose form passes validation.
pub fn filled_app() -> App {
    let mut app = App::new();
    app.form = FormState {
        message_url: "https://wellfound.com/u/jane".to_string(),
        message: "Hello Jane".to_string(),
    };
    app
}
