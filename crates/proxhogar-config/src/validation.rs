// SPDX-FileCopyrightText: 2026 ProxHogar Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde attributes,
//! such as URL schemes, probability ranges, and known log levels.

use crate::diagnostic::ConfigError;
use crate::model::ProxHogarConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &ProxHogarConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let base_url = config.api.base_url.trim();
    if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
        errors.push(ConfigError::Validation {
            message: format!("api.base_url `{base_url}` must start with http:// or https://"),
        });
    }

    if config.api.timeout_secs == Some(0) {
        errors.push(ConfigError::Validation {
            message: "api.timeout_secs must be greater than 0 when set".to_string(),
        });
    }

    if config.session.path.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "session.path must not be empty".to_string(),
        });
    }

    if config.completion.model.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "completion.model must not be empty".to_string(),
        });
    }

    for (key, rate) in [
        (
            "verification.identity_failure_rate",
            config.verification.identity_failure_rate,
        ),
        (
            "verification.background_failure_rate",
            config.verification.background_failure_rate,
        ),
    ] {
        if !(0.0..=1.0).contains(&rate) {
            errors.push(ConfigError::Validation {
                message: format!("{key} must be between 0 and 1, got {rate}"),
            });
        }
    }

    let level = config.log.level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "log.level `{}` is not one of {}",
                config.log.level,
                LOG_LEVELS.join(", ")
            ),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
