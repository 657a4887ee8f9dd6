// SPDX-FileCopyrightText: 2026 ProxHogar Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Text completion for the ProxHogar client.
//!
//! [`from_config`] picks the Gemini-compatible client when an API key is
//! configured and the deterministic [`StubCompleter`] otherwise.

pub mod client;
pub mod types;

use std::sync::Arc;
use std::time::Duration;

use proxhogar_config::model::CompletionConfig;
use proxhogar_core::{ProxHogarError, TextCompleter};
use secrecy::SecretString;
use tracing::debug;

pub use client::{GeminiCompleter, NO_COMPLETION_TEXT, StubCompleter};

/// Builds the completer described by the `[completion]` section.
pub fn from_config(config: &CompletionConfig) -> Result<Arc<dyn TextCompleter>, ProxHogarError> {
    match config.api_key.as_deref().map(str::trim) {
        Some(key) if !key.is_empty() => {
            debug!(model = %config.model, "using remote completion service");
            Ok(Arc::new(GeminiCompleter::new(
                SecretString::from(key.to_string()),
                config.model.clone(),
                config.base_url.clone(),
            )?))
        }
        _ => {
            debug!("no completion API key configured, using stub");
            Ok(Arc::new(StubCompleter::new(Duration::from_millis(
                config.stub_delay_ms,
            ))))
        }
    }
}
