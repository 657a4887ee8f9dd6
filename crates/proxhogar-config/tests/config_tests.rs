// SPDX-FileCopyrightText: 2026 ProxHogar Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the ProxHogar configuration system.

use std::io::Write;

use proxhogar_config::diagnostic::ConfigError;
use proxhogar_config::model::{DEFAULT_API_BASE_URL, ProxHogarConfig};
use proxhogar_config::{
    load_and_validate_path, load_and_validate_str, load_config_from_path, load_config_from_str,
};
use serial_test::serial;

#[test]
fn valid_toml_deserializes_into_config() {
    let toml = r#"
[api]
base_url = "http://localhost:8080/api"
timeout_secs = 15

[session]
path = "/tmp/proxhogar/session.json"

[completion]
api_key = "AIza-test"
model = "gemini-test"
stub_delay_ms = 0

[verification]
step_delay_ms = 0
identity_failure_rate = 0.0
background_failure_rate = 1.0

[payment]
processing_delay_ms = 0

[log]
level = "debug"
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.api.base_url, "http://localhost:8080/api");
    assert_eq!(config.api.timeout_secs, Some(15));
    assert_eq!(config.session.path, "/tmp/proxhogar/session.json");
    assert_eq!(config.completion.api_key.as_deref(), Some("AIza-test"));
    assert_eq!(config.completion.model, "gemini-test");
    assert_eq!(config.completion.stub_delay_ms, 0);
    assert_eq!(config.verification.identity_failure_rate, 0.0);
    assert_eq!(config.verification.background_failure_rate, 1.0);
    assert_eq!(config.payment.processing_delay_ms, 0);
    assert_eq!(config.log.level, "debug");
}

#[test]
fn missing_sections_use_defaults() {
    let config = load_config_from_str("").expect("empty TOML should use defaults");

    assert_eq!(config.api.base_url, DEFAULT_API_BASE_URL);
    assert!(config.api.timeout_secs.is_none());
    assert!(config.session.path.ends_with("session.json"));
    assert!(config.completion.api_key.is_none());
    assert_eq!(config.completion.stub_delay_ms, 1000);
    assert_eq!(config.verification.identity_failure_rate, 0.1);
    assert_eq!(config.verification.background_failure_rate, 0.05);
    assert_eq!(config.verification.latitude, -8.11);
    assert_eq!(config.verification.longitude, -79.03);
    assert_eq!(config.log.level, "warn");
}

#[test]
fn unknown_field_is_rejected_with_suggestion() {
    let toml = r#"
[api]
base_ulr = "http://localhost"
"#;

    let errors = load_and_validate_str(toml).expect_err("should reject unknown field");
    assert!(
        errors.iter().any(|e| matches!(
            e,
            ConfigError::UnknownKey { key, suggestion, .. }
                if key == "base_ulr" && suggestion.as_deref() == Some("base_url")
        )),
        "expected an unknown-key diagnostic, got: {errors:?}"
    );
}

#[test]
fn unknown_section_is_rejected() {
    let toml = r#"
[telemetry]
enabled = true
"#;
    assert!(load_config_from_str(toml).is_err());
}

#[test]
fn wrong_type_is_reported() {
    let toml = r#"
[api]
timeout_secs = "soon"
"#;
    let errors = load_and_validate_str(toml).expect_err("should reject wrong type");
    assert!(
        errors
            .iter()
            .any(|e| matches!(e, ConfigError::InvalidType { .. } | ConfigError::Other(_))),
        "got: {errors:?}"
    );
}

#[test]
fn semantic_errors_surface_through_load_and_validate() {
    let toml = r#"
[verification]
identity_failure_rate = 2.0
"#;
    let errors = load_and_validate_str(toml).expect_err("rate out of range");
    assert!(errors.iter().any(
        |e| matches!(e, ConfigError::Validation { message } if message.contains("identity_failure_rate"))
    ));
}

#[test]
fn explicit_path_that_does_not_exist_is_an_error() {
    let errors = load_and_validate_path(std::path::Path::new("/nonexistent/proxhogar.toml"))
        .expect_err("missing file");
    assert!(matches!(&errors[0], ConfigError::Other(m) if m.contains("does not exist")));
}

#[test]
#[serial]
fn env_var_overrides_base_url_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[api]\nbase_url = \"http://from-file/api\"").unwrap();

    // SAFETY: test-only env mutation, serialized with #[serial].
    unsafe { std::env::set_var("PROXHOGAR_API_BASE_URL", "http://from-env/api") };
    let config = load_config_from_path(file.path());
    unsafe { std::env::remove_var("PROXHOGAR_API_BASE_URL") };

    assert_eq!(config.unwrap().api.base_url, "http://from-env/api");
}

#[test]
#[serial]
fn env_var_sets_completion_api_key() {
    let file = tempfile::NamedTempFile::new().unwrap();

    unsafe { std::env::set_var("PROXHOGAR_COMPLETION_API_KEY", "key-from-env") };
    let config = load_config_from_path(file.path());
    unsafe { std::env::remove_var("PROXHOGAR_COMPLETION_API_KEY") };

    assert_eq!(
        config.unwrap().completion.api_key.as_deref(),
        Some("key-from-env")
    );
}

#[test]
fn default_config_round_trips_through_toml() {
    let config = ProxHogarConfig::default();
    let rendered = toml::to_string(&config).expect("defaults serialize");
    let parsed = load_config_from_str(&rendered).expect("rendered defaults parse");
    assert_eq!(parsed.api.base_url, config.api.base_url);
    assert_eq!(parsed.session.path, config.session.path);
}
