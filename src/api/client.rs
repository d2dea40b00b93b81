//! HTTP client for the messenger backend.
//!
//! Every call returns an explicit `Result<(), ApiError>`: a 2xx is `Ok`, a
//! non-2xx carries the status code and the backend's `error` text, and a
//! request that never got an answer is `ApiError::Network`.

use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::header::CONTENT_TYPE;

use super::types::{ApiError, ErrorBody, MessageForm, SetCookiesRequest};
use crate::core::cookies::CookieDescriptor;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";

/// The two endpoints the form talks to.
#[async_trait]
pub trait Backend: Send + Sync {
    /// `POST /send` with the form URL-encoded. Response body is ignored on success.
    async fn send_message(&self, form: &MessageForm) -> Result<(), ApiError>;

    /// `POST /set-cookies` with `{"cookies": [...]}` as JSON.
    async fn set_cookies(&self, cookies: &[CookieDescriptor]) -> Result<(), ApiError>;
}

pub struct HttpBackend {
    base_url: String,
    client: reqwest::Client,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Maps a response onto the tagged result, reading the error body on failure.
async fn check_response(response: reqwest::Response) -> Result<(), ApiError> {
    let status = response.status();
    debug!("Backend response status: {}", status);

    if status.is_success() {
        return Ok(());
    }

    let body = response.text().await.unwrap_or_default();
    warn!("Backend error: {} - {}", status.as_u16(), body);
    Err(ApiError::Api {
        status: status.as_u16(),
        message: ErrorBody::server_message(&body),
    })
}

#[async_trait]
impl Backend for HttpBackend {
    async fn send_message(&self, form: &MessageForm) -> Result<(), ApiError> {
        info!("Sending message to {}", form.message_url);

        let response = self
            .client
            .post(self.endpoint("/send"))
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .form(form)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        check_response(response).await
    }

    async fn set_cookies(&self, cookies: &[CookieDescriptor]) -> Result<(), ApiError> {
        info!("Transferring {} cookies", cookies.len());

        let response = self
            .client
            .post(self.endpoint("/set-cookies"))
            .json(&SetCookiesRequest { cookies })
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        check_response(response).await
    }
}
