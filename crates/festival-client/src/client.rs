//! The HTTP client: single point of contact with the remote API.

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, StatusCode};
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::case::{keys_to_camel, keys_to_snake};
use crate::config::{ApiConfig, RequestPolicy, is_absolute, join};
use crate::error::{ApiError, Result};

const RETRY_DELAY: Duration = Duration::from_millis(250);

/// Outbound request body.
pub enum RequestBody {
    /// JSON payload; keys are rewritten to snake_case on the way out.
    Json(Value),
    /// JSON payload sent exactly as given, for endpoints that expect
    /// their wire shape verbatim.
    Verbatim(Value),
    /// Plain text, sent unmodified.
    Text(String),
    /// Multipart form; bypasses key rewriting entirely, and any
    /// configured content-type header is stripped so the transport can
    /// set the boundary itself.
    Multipart(reqwest::multipart::Form),
}

impl RequestBody {
    fn is_multipart(&self) -> bool {
        matches!(self, RequestBody::Multipart(_))
    }
}

/// HTTP client wrapping reqwest with base-URL resolution, default
/// headers, bidirectional key-case translation and the [`ApiError`]
/// contract.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Resolve a request path against the configured base URL with
    /// exactly one separating slash. Absolute URLs bypass the base.
    pub fn resolve_url(&self, path: &str) -> String {
        if is_absolute(path) {
            path.to_string()
        } else {
            join(&self.config.base_url, path)
        }
    }

    /// Perform a read under the configured default policy. Transient
    /// failures (transport errors and 5xx) are retried up to its bound.
    pub async fn get(&self, path: &str) -> Result<Option<Value>> {
        self.get_with_policy(path, &self.config.policy).await
    }

    /// Perform a read under an explicit request policy, overriding the
    /// configured default for this one call.
    #[instrument(skip(self, policy))]
    pub async fn get_with_policy(
        &self,
        path: &str,
        policy: &RequestPolicy,
    ) -> Result<Option<Value>> {
        let url = self.resolve_url(path);
        let mut attempt = 0u32;
        loop {
            attempt += 1;
            match self.send(Method::GET, &url, None, None).await {
                Err(error) if error.is_transient() && attempt <= policy.retry => {
                    warn!(%error, attempt, "transient read failure, retrying");
                    tokio::time::sleep(RETRY_DELAY * attempt).await;
                }
                outcome => return outcome,
            }
        }
    }

    /// Perform a write. Never retried; an `expect_status` narrows
    /// success to one specific code.
    #[instrument(skip(self, body))]
    pub async fn post(
        &self,
        path: &str,
        body: RequestBody,
        expect_status: Option<u16>,
    ) -> Result<Option<Value>> {
        let url = self.resolve_url(path);
        self.send(Method::POST, &url, Some(body), expect_status).await
    }

    async fn send(
        &self,
        method: Method,
        url: &str,
        body: Option<RequestBody>,
        expect_status: Option<u16>,
    ) -> Result<Option<Value>> {
        let multipart = body.as_ref().is_some_and(RequestBody::is_multipart);
        let mut request = self.http.request(method, url);
        for (name, value) in &self.config.default_headers {
            if multipart && name.eq_ignore_ascii_case("content-type") {
                continue;
            }
            request = request.header(name, value);
        }
        request = match body {
            None => request,
            Some(RequestBody::Json(payload)) => request
                .header(CONTENT_TYPE, "application/json")
                .json(&keys_to_snake(&payload)),
            Some(RequestBody::Verbatim(payload)) => request
                .header(CONTENT_TYPE, "application/json")
                .json(&payload),
            Some(RequestBody::Text(text)) => {
                request.header(CONTENT_TYPE, "text/plain").body(text)
            }
            Some(RequestBody::Multipart(form)) => request.multipart(form),
        };

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;
        let parsed: Option<Value> = if text.is_empty() {
            None
        } else {
            serde_json::from_str(&text).ok()
        };

        let expectation_failed = expect_status.is_some_and(|code| code != status.as_u16());
        if !status.is_success() || expectation_failed {
            let message = parsed
                .as_ref()
                .and_then(|payload| payload.get("message"))
                .and_then(Value::as_str)
                .map(String::from)
                .unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("unexpected status")
                        .to_string()
                });
            return Err(ApiError::Http {
                status: status.as_u16(),
                message,
                payload: parsed,
            });
        }

        if status == StatusCode::NO_CONTENT || text.is_empty() {
            return Ok(None);
        }
        match parsed {
            Some(json) => Ok(Some(keys_to_camel(&json))),
            None => {
                // Some endpoints answer with plain text.
                debug!(url, "non-JSON response body, passing through as text");
                Ok(Some(Value::String(text)))
            }
        }
    }
}
