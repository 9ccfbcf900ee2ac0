//! HTTP client for the ResumeTwin backend.
//!
//! Provides a minimal client with generic POST helpers, the four domain
//! methods (upload, suggest skills, download report, send email) and the
//! `ResumeBackend` trait the view controller talks to.

pub mod api;
pub mod backend;

use anyhow::Context;
use bytes::Bytes;
use reqwest::{Client, Response};
use resumetwin_core::{AppError, ClientConfig, MessageResponse};
use serde::de::DeserializeOwned;
use std::time::Duration;

pub use backend::ResumeBackend;

/// HTTP client for the ResumeTwin backend.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: String, timeout: Duration) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, AppError> {
        config.validate()?;
        Self::new(config.api_url.clone(), config.timeout())
    }

    /// Create client from environment: RESUMETWIN_API_URL (or API_URL), RESUMETWIN_TIMEOUT_SECS.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_config(&ClientConfig::from_env()?)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// POST JSON body and deserialize response.
    pub async fn post_json<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        let url = self.build_url(path);
        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .context("Failed to send request")?;

        let response = ensure_success(response).await?;
        let body: T = response
            .json()
            .await
            .context("Failed to parse response as JSON")?;

        Ok(body)
    }

    /// POST multipart form and deserialize response.
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T, AppError> {
        let url = self.build_url(path);
        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .context("Failed to send request")?;

        let response = ensure_success(response).await?;
        let body: T = response
            .json()
            .await
            .context("Failed to parse response as JSON")?;

        Ok(body)
    }

    /// POST JSON body and return the raw response bytes.
    pub async fn post_json_for_bytes<B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Bytes, AppError> {
        let url = self.build_url(path);
        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .context("Failed to send request")?;

        let response = ensure_success(response).await?;
        let bytes = response
            .bytes()
            .await
            .context("Failed to read response body")?;

        Ok(bytes)
    }

    /// Raw client for custom requests.
    pub fn client(&self) -> &Client {
        &self.client
    }
}

/// Turn a non-success status into `AppError::Api`, keeping the backend's
/// `{"message": ...}` when the body has one.
async fn ensure_success(response: Response) -> Result<Response, AppError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let error_text = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());

    Err(AppError::Api {
        status: status.as_u16(),
        message: api_error_message(&error_text),
        body: error_text.trim().to_string(),
    })
}

/// The `message` of a JSON error body. HTML or plain-text bodies yield `None`.
fn api_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<MessageResponse>(body)
        .ok()
        .map(|parsed| parsed.message)
        .filter(|message| !message.is_empty())
}
