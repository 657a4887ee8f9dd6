// SPDX-FileCopyrightText: 2026 ProxHogar Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP gateway for the ProxHogar backend.
//!
//! Provides [`ApiClient`], which builds every outbound request: it prefixes
//! the configured base URL, attaches the bearer token of the persisted
//! session, turns non-2xx bodies into [`ProxHogarError::Api`], and resolves
//! empty successful responses to `{}`.

use std::sync::Arc;
use std::time::Duration;

use proxhogar_config::model::ApiConfig;
use proxhogar_core::{ProxHogarError, Session, SessionStore};
use reqwest::header::{AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

/// Message used when a failed response carries no body at all.
pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred";

/// HTTP client for the ProxHogar REST API.
///
/// Cheap to clone; the underlying connection pool and session store are shared.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    store: Arc<dyn SessionStore>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("store", &self.store.location())
            .finish()
    }
}

impl ApiClient {
    /// Creates a client for `base_url`.
    ///
    /// `timeout` of `None` leaves requests unbounded.
    pub fn new(
        base_url: impl Into<String>,
        timeout: Option<Duration>,
        store: Arc<dyn SessionStore>,
    ) -> Result<Self, ProxHogarError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(|e| ProxHogarError::Network {
            message: format!("failed to build HTTP client: {e}"),
            source: Some(Box::new(e)),
        })?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            store,
        })
    }

    /// Creates a client from the `[api]` configuration section.
    pub fn from_config(
        config: &ApiConfig,
        store: Arc<dyn SessionStore>,
    ) -> Result<Self, ProxHogarError> {
        Self::new(
            config.base_url.clone(),
            config.timeout_secs.map(Duration::from_secs),
            store,
        )
    }

    /// The base URL every endpoint is appended to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sends `method` to `endpoint` (path plus query string) and returns the
    /// decoded JSON body.
    ///
    /// A 204 response, or one with `content-length: 0`, yields an empty
    /// object without attempting to parse the body.
    pub async fn api_call(
        &self,
        endpoint: &str,
        method: Method,
        body: Option<&Value>,
    ) -> Result<Value, ProxHogarError> {
        let url = format!("{}{endpoint}", self.base_url);
        let mut request = self.http.request(method.clone(), &url);

        if let Some(token) = self.bearer_token().await {
            request = request.header(AUTHORIZATION, format!("Bearer {token}"));
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        debug!(%method, endpoint, "sending request");
        let response = request.send().await.map_err(|e| ProxHogarError::Network {
            message: format!("request to {endpoint} failed: {e}"),
            source: Some(Box::new(e)),
        })?;

        let status = response.status();
        debug!(%method, endpoint, status = status.as_u16(), "response received");

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(ProxHogarError::Api {
                status: status.as_u16(),
                message: error_message(&text),
            });
        }

        if status == StatusCode::NO_CONTENT || has_zero_content_length(response.headers()) {
            return Ok(Value::Object(serde_json::Map::new()));
        }

        let text = response.text().await.map_err(|e| ProxHogarError::Network {
            message: format!("failed to read response body from {endpoint}: {e}"),
            source: Some(Box::new(e)),
        })?;
        serde_json::from_str(&text).map_err(|e| ProxHogarError::Decode {
            message: format!("invalid JSON from {endpoint}: {e}"),
            source: Some(Box::new(e)),
        })
    }

    /// Like [`ApiClient::api_call`], deserializing the body into `T`.
    pub async fn call<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        method: Method,
        body: Option<&Value>,
    ) -> Result<T, ProxHogarError> {
        let value = self.api_call(endpoint, method, body).await?;
        serde_json::from_value(value).map_err(|e| ProxHogarError::Decode {
            message: format!("unexpected response shape from {endpoint}: {e}"),
            source: Some(Box::new(e)),
        })
    }

    /// Token of the persisted session, if one is stored and readable.
    ///
    /// An unreadable or corrupt record means the request goes out anonymous.
    async fn bearer_token(&self) -> Option<String> {
        let record = match self.store.load().await {
            Ok(record) => record?,
            Err(e) => {
                warn!(error = %e, "could not read session store, sending request without token");
                return None;
            }
        };
        match serde_json::from_str::<Session>(&record) {
            Ok(session) if !session.token.is_empty() => Some(session.token),
            Ok(_) => None,
            Err(e) => {
                warn!(error = %e, "stored session is not valid JSON, sending request without token");
                None
            }
        }
    }
}

fn has_zero_content_length(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.trim() == "0")
}

/// Extracts the user-facing message from a failed response body.
///
/// A JSON object with a string `message` yields that message. Any other
/// non-empty body is returned verbatim; an empty body yields
/// [`UNKNOWN_ERROR_MESSAGE`].
pub fn error_message(body: &str) -> String {
    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(body)
        && let Some(Value::String(message)) = map.get("message")
    {
        return message.clone();
    }
    if body.is_empty() {
        UNKNOWN_ERROR_MESSAGE.to_string()
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_message_is_extracted() {
        assert_eq!(error_message(r#"{"message":"Bad input"}"#), "Bad input");
    }

    #[test]
    fn plain_text_is_returned_verbatim() {
        assert_eq!(error_message("Gateway Timeout"), "Gateway Timeout");
    }

    #[test]
    fn empty_body_gets_generic_message() {
        assert_eq!(error_message(""), UNKNOWN_ERROR_MESSAGE);
    }

    #[test]
    fn json_without_string_message_falls_back_to_text() {
        assert_eq!(error_message(r#"{"error":"nope"}"#), r#"{"error":"nope"}"#);
        assert_eq!(error_message(r#"{"message":42}"#), r#"{"message":42}"#);
    }

    #[test]
    fn zero_content_length_is_detected() {
        let mut headers = HeaderMap::new();
        assert!(!has_zero_content_length(&headers));
        headers.insert(CONTENT_LENGTH, HeaderValue::from_static("0"));
        assert!(has_zero_content_length(&headers));
        headers.insert(CONTENT_LENGTH, HeaderValue::from_static("12"));
        assert!(!has_zero_content_length(&headers));
    }
}
