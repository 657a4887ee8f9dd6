// SPDX-FileCopyrightText: 2026 ProxHogar Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the ProxHogar client.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default backend endpoint when nothing overrides `api.base_url`.
pub const DEFAULT_API_BASE_URL: &str = "https://proxhogar-api-264213836001.us-east1.run.app/api";

/// Top-level ProxHogar configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable overrides.
/// All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ProxHogarConfig {
    /// Backend REST API settings.
    #[serde(default)]
    pub api: ApiConfig,

    /// Session persistence settings.
    #[serde(default)]
    pub session: SessionConfig,

    /// Text-completion service settings.
    #[serde(default)]
    pub completion: CompletionConfig,

    /// Simulated verification collaborators.
    #[serde(default)]
    pub verification: VerificationConfig,

    /// Simulated payment processing.
    #[serde(default)]
    pub payment: PaymentConfig,

    /// Logging settings.
    #[serde(default)]
    pub log: LogConfig,
}

/// Backend REST API configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ApiConfig {
    /// Base URL every endpoint path is appended to.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout. `None` waits indefinitely.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

/// Session persistence configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SessionConfig {
    /// Path of the JSON file holding the serialized session.
    #[serde(default = "default_session_path")]
    pub path: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            path: default_session_path(),
        }
    }
}

fn default_session_path() -> String {
    dirs::data_dir()
        .map(|p| p.join("proxhogar").join("session.json"))
        .unwrap_or_else(|| PathBuf::from("session.json"))
        .to_string_lossy()
        .into_owned()
}

/// Text-completion service configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CompletionConfig {
    /// API key. `None` selects the offline stub.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Model identifier.
    #[serde(default = "default_completion_model")]
    pub model: String,

    /// Base URL of the generative-language API.
    #[serde(default = "default_completion_base_url")]
    pub base_url: String,

    /// Artificial latency of the stub, in milliseconds.
    #[serde(default = "default_stub_delay_ms")]
    pub stub_delay_ms: u64,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_completion_model(),
            base_url: default_completion_base_url(),
            stub_delay_ms: default_stub_delay_ms(),
        }
    }
}

fn default_completion_model() -> String {
    "gemini-2.5-flash-preview-09-2025".to_string()
}

fn default_completion_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_stub_delay_ms() -> u64 {
    1000
}

/// Simulated verification collaborators.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct VerificationConfig {
    /// Latency of each simulated step, in milliseconds.
    #[serde(default = "default_step_delay_ms")]
    pub step_delay_ms: u64,

    /// Probability that the DNI check rejects the applicant.
    #[serde(default = "default_identity_failure_rate")]
    pub identity_failure_rate: f64,

    /// Probability that the background check fails.
    #[serde(default = "default_background_failure_rate")]
    pub background_failure_rate: f64,

    /// Location reported by the simulated GPS.
    #[serde(default = "default_latitude")]
    pub latitude: f64,

    #[serde(default = "default_longitude")]
    pub longitude: f64,

    /// URL returned by the simulated selfie camera.
    #[serde(default = "default_selfie_url")]
    pub selfie_url: String,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            step_delay_ms: default_step_delay_ms(),
            identity_failure_rate: default_identity_failure_rate(),
            background_failure_rate: default_background_failure_rate(),
            latitude: default_latitude(),
            longitude: default_longitude(),
            selfie_url: default_selfie_url(),
        }
    }
}

fn default_step_delay_ms() -> u64 {
    1500
}

fn default_identity_failure_rate() -> f64 {
    0.1
}

fn default_background_failure_rate() -> f64 {
    0.05
}

fn default_latitude() -> f64 {
    -8.11
}

fn default_longitude() -> f64 {
    -79.03
}

fn default_selfie_url() -> String {
    "https://this-person-does-not-exist.com/img/avatar-1126a908256a7e1329a3512b963155d0.jpg"
        .to_string()
}

/// Simulated payment processing.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PaymentConfig {
    /// Latency of the simulated processor, in milliseconds.
    #[serde(default = "default_processing_delay_ms")]
    pub processing_delay_ms: u64,
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            processing_delay_ms: default_processing_delay_ms(),
        }
    }
}

fn default_processing_delay_ms() -> u64 {
    1500
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}
