// SPDX-FileCopyrightText: 2026 ProxHogar Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! [`TextCompleter`] implementations.

use std::time::Duration;

use async_trait::async_trait;
use proxhogar_core::{ProxHogarError, TextCompleter};
use reqwest::header::{HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use crate::types::{GenerateRequest, GenerateResponse};

/// Returned when the service answers without any candidate text.
pub const NO_COMPLETION_TEXT: &str = "No se pudo generar.";

/// Client for a Gemini-compatible `generateContent` endpoint.
#[derive(Debug, Clone)]
pub struct GeminiCompleter {
    client: reqwest::Client,
    api_key: SecretString,
    model: String,
    base_url: String,
}

impl GeminiCompleter {
    pub fn new(
        api_key: SecretString,
        model: String,
        base_url: String,
    ) -> Result<Self, ProxHogarError> {
        let mut headers = HeaderMap::new();
        headers.insert("content-type", HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| ProxHogarError::Completion(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key,
            model,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url,
            self.model,
            self.api_key.expose_secret()
        )
    }
}

#[async_trait]
impl TextCompleter for GeminiCompleter {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn complete(&self, prompt: &str) -> Result<String, ProxHogarError> {
        let response = self
            .client
            .post(self.endpoint())
            .json(&GenerateRequest::from_prompt(prompt))
            .send()
            .await
            .map_err(|e| ProxHogarError::Completion(format!("request failed: {}", e.without_url())))?;

        let status = response.status();
        debug!(model = %self.model, status = status.as_u16(), "completion response received");
        if !status.is_success() {
            return Err(ProxHogarError::Completion(format!(
                "service returned {status}"
            )));
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| ProxHogarError::Completion(format!("invalid response: {}", e.without_url())))?;

        Ok(body
            .first_text()
            .unwrap_or(NO_COMPLETION_TEXT)
            .to_string())
    }
}

/// Offline stand-in used when no API key is configured.
///
/// Always answers with the prompt wrapped in a fixed marker after `delay`.
#[derive(Debug, Clone, Default)]
pub struct StubCompleter {
    delay: Duration,
}

impl StubCompleter {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn render(prompt: &str) -> String {
        format!("(IA): Descripción mejorada para: \"{prompt}\"")
    }
}

#[async_trait]
impl TextCompleter for StubCompleter {
    fn name(&self) -> &str {
        "stub"
    }

    async fn complete(&self, prompt: &str) -> Result<String, ProxHogarError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Ok(Self::render(prompt))
    }
}
