// src/client/mod.rs
// Zephyr Scale Cloud v2 REST client

pub mod cases;
pub mod cycles;
pub mod environments;
mod error;
pub mod executions;
pub mod folders;
pub mod links;
pub mod plans;
pub mod priorities;
pub mod statuses;

pub use error::ApiError;

use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Request timeout for a single API call
const REQUEST_TIMEOUT_SECS: u64 = 60;
/// Connect timeout
const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Thin client over the Zephyr Scale v2 REST API.
///
/// Holds one long-lived reqwest client; every method issues exactly one
/// request and returns the response body as opaque JSON. No retries, no
/// caching - a failed call surfaces immediately as an [`ApiError`].
pub struct ZephyrClient {
    http: reqwest::Client,
    base_url: String,
    api_token: String,
}

impl ZephyrClient {
    pub fn new(base_url: impl Into<String>, api_token: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_token: api_token.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) async fn get(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Value, ApiError> {
        debug!(path, "GET");
        let response = self
            .http
            .get(self.url(path))
            .bearer_auth(&self.api_token)
            .query(query)
            .send()
            .await?;
        Self::read_json(response).await
    }

    pub(crate) async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Value, ApiError> {
        debug!(path, "POST");
        let response = self
            .http
            .post(self.url(path))
            .bearer_auth(&self.api_token)
            .json(body)
            .send()
            .await?;
        Self::read_json(response).await
    }

    pub(crate) async fn put<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Value, ApiError> {
        debug!(path, "PUT");
        let response = self
            .http
            .put(self.url(path))
            .bearer_auth(&self.api_token)
            .json(body)
            .send()
            .await?;
        Self::read_json(response).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<Value, ApiError> {
        debug!(path, "DELETE");
        let response = self
            .http
            .delete(self.url(path))
            .bearer_auth(&self.api_token)
            .send()
            .await?;
        Self::read_json(response).await
    }

    /// Turn a response into JSON, classifying non-2xx answers as
    /// [`ApiError::Status`] with whatever body the API sent.
    async fn read_json(response: reqwest::Response) -> Result<Value, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let body = serde_json::from_str(&text).unwrap_or(Value::String(text));
            return Err(ApiError::Status {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or("").to_string(),
                body,
            });
        }

        let text = response.text().await?;
        // PUT/DELETE endpoints answer with an empty body.
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text)?)
    }
}
