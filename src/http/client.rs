//! HTTP client for the CMS admin API
//!
//! Thin wrapper over `reqwest` that posts JSON bodies against a base URL,
//! optionally carrying a bearer token.

use reqwest::{header::AUTHORIZATION, Client};
use serde::Serialize;
use serde_json::Value;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::debug;

/// Longest slice of a response body kept in an error message
const MAX_ERROR_BODY_SIZE: usize = 200;

/// HTTP client errors
#[derive(Error, Debug)]
pub enum HttpError {
    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Timeout after {0} seconds")]
    Timeout(u64),

    #[error("Connection refused to {0}")]
    ConnectionRefused(String),

    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Invalid JSON response: {0}")]
    InvalidJson(String),

    #[error("Missing field `{0}` in response")]
    MissingField(&'static str),
}

/// HTTP client bound to one CMS instance
#[derive(Clone, Debug)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    bearer: Option<String>,
    timeout_secs: Option<u64>,
}

impl HttpClient {
    /// Create a client for `base_url`. Requests never time out unless
    /// `timeout_secs` is set.
    pub fn new(base_url: impl Into<String>, timeout_secs: Option<u64>) -> Result<Self, HttpError> {
        let mut builder = Client::builder();
        if let Some(secs) = timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| HttpError::RequestFailed(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            bearer: None,
            timeout_secs,
        })
    }

    /// Attach a bearer token to every subsequent request
    pub fn with_bearer(mut self, token: impl Into<String>) -> Self {
        self.bearer = Some(token.into());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build full URL
    fn build_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// POST a JSON body to `path` and collect the response
    pub async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<HttpResponse, HttpError> {
        let url = self.build_url(path);
        debug!("Sending POST request to {}", url);

        let mut req_builder = self.client.post(&url).json(body);
        if let Some(token) = &self.bearer {
            req_builder = req_builder.header(AUTHORIZATION, format!("Bearer {token}"));
        }

        let start = Instant::now();

        let response = req_builder.send().await.map_err(|e| {
            if let (true, Some(secs)) = (e.is_timeout(), self.timeout_secs) {
                HttpError::Timeout(secs)
            } else if e.is_connect() {
                HttpError::ConnectionRefused(url.clone())
            } else {
                HttpError::RequestFailed(e.to_string())
            }
        })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| HttpError::RequestFailed(format!("failed to read response body: {e}")))?;
        let duration_ms = start.elapsed().as_millis() as u64;

        debug!(
            "Response: {} {} in {}ms",
            status.as_u16(),
            status.canonical_reason().unwrap_or(""),
            duration_ms
        );

        Ok(HttpResponse {
            status_code: status.as_u16(),
            body,
        })
    }
}

/// HTTP response
#[derive(Clone, Debug)]
pub struct HttpResponse {
    pub status_code: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    /// Parse the body as JSON, rejecting non-2xx responses first
    pub fn into_json(self) -> Result<Value, HttpError> {
        if !self.is_success() {
            return Err(HttpError::Status {
                status: self.status_code,
                message: self.error_message(),
            });
        }
        serde_json::from_str(&self.body).map_err(|e| HttpError::InvalidJson(e.to_string()))
    }

    /// Best-effort error description from a failed response.
    ///
    /// Strapi wraps errors as `{"error": {"message": ...}}`; anything else
    /// falls back to the (truncated) raw body.
    pub fn error_message(&self) -> String {
        let from_json = serde_json::from_str::<Value>(&self.body)
            .ok()
            .and_then(|v| {
                v.pointer("/error/message")
                    .and_then(Value::as_str)
                    .map(str::to_string)
            });

        match from_json {
            Some(message) => message,
            None if self.body.trim().is_empty() => "empty response body".to_string(),
            None => truncate(self.body.trim(), MAX_ERROR_BODY_SIZE),
        }
    }
}

/// Look up a nested field by JSON pointer
pub fn require_field<'a>(value: &'a Value, pointer: &'static str) -> Result<&'a Value, HttpError> {
    match value.pointer(pointer) {
        Some(Value::Null) | None => Err(HttpError::MissingField(pointer)),
        Some(found) => Ok(found),
    }
}

fn truncate(text: &str, max: usize) -> String {
    if text.len() <= max {
        return text.to_string();
    }
    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &text[..end])
}
