// SPDX-FileCopyrightText: 2026 ProxHogar Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `proxhogar doctor` command implementation.
//!
//! Runs diagnostic checks against the local setup: configuration, the
//! stored session, backend reachability and the completion service.

use std::sync::Arc;
use std::time::{Duration, Instant};

use colored::Colorize;
use proxhogar_api::ApiClient;
use proxhogar_config::ProxHogarConfig;
use proxhogar_config::model::{ApiConfig, CompletionConfig};
use proxhogar_core::{Session, SessionStore};
use proxhogar_session::{FileSessionStore, MemorySessionStore};

use crate::render::Output;

const BACKEND_TIMEOUT: Duration = Duration::from_secs(5);

/// Status of a diagnostic check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckStatus {
    Pass,
    Warn,
    Fail,
}

/// Result of a single diagnostic check.
#[derive(Debug, Clone)]
pub struct CheckResult {
    pub name: String,
    pub status: CheckStatus,
    pub message: String,
    pub duration: Duration,
}

impl CheckResult {
    fn new(name: &str, status: CheckStatus, message: impl Into<String>, start: Instant) -> Self {
        Self {
            name: name.to_string(),
            status,
            message: message.into(),
            duration: start.elapsed(),
        }
    }
}

/// Run the `proxhogar doctor` command.
pub async fn run_doctor(config: &ProxHogarConfig, out: Output) {
    let start = Instant::now();
    let results = vec![
        CheckResult::new("Configuración", CheckStatus::Pass, "válida", start),
        check_session(&config.session.path).await,
        check_backend(&config.api).await,
        check_completion(&config.completion),
    ];

    println!();
    println!("  proxhogar doctor");
    println!("  {}", "-".repeat(50));

    let mut issues = 0;
    for result in &results {
        let duration_ms = result.duration.as_millis();
        let line = match (&result.status, out.color) {
            (CheckStatus::Pass, true) => format!(
                "    {} {:<16} {} ({duration_ms}ms)",
                "✓".green(),
                result.name,
                result.message
            ),
            (CheckStatus::Warn, true) => format!(
                "    {} {:<16} {} ({duration_ms}ms)",
                "!".yellow(),
                result.name,
                result.message.yellow()
            ),
            (CheckStatus::Fail, true) => format!(
                "    {} {:<16} {} ({duration_ms}ms)",
                "✗".red(),
                result.name,
                result.message.red()
            ),
            (status, false) => {
                let tag = match status {
                    CheckStatus::Pass => "[OK]  ",
                    CheckStatus::Warn => "[WARN]",
                    CheckStatus::Fail => "[FAIL]",
                };
                format!(
                    "    {tag} {:<16} {} ({duration_ms}ms)",
                    result.name, result.message
                )
            }
        };
        if result.status != CheckStatus::Pass {
            issues += 1;
        }
        println!("{line}");
    }

    println!();
    match issues {
        0 => println!("  All checks passed."),
        1 => println!("  1 issue found."),
        n => println!("  {n} issues found."),
    }
    println!();
}

/// Check the stored session record is readable.
async fn check_session(path: &str) -> CheckResult {
    let start = Instant::now();
    let store = FileSessionStore::new(path);
    match store.load().await {
        Ok(None) => CheckResult::new(
            "Sesión",
            CheckStatus::Warn,
            "sin sesión guardada (usa `proxhogar login`)",
            start,
        ),
        Ok(Some(record)) => match serde_json::from_str::<Session>(&record) {
            Ok(session) => CheckResult::new(
                "Sesión",
                CheckStatus::Pass,
                format!("{} ({path})", session.email),
                start,
            ),
            Err(e) => CheckResult::new(
                "Sesión",
                CheckStatus::Fail,
                format!("registro ilegible en {path}: {e}"),
                start,
            ),
        },
        Err(e) => CheckResult::new("Sesión", CheckStatus::Fail, e.to_string(), start),
    }
}

/// Check the backend answers the public category listing.
async fn check_backend(config: &ApiConfig) -> CheckResult {
    let start = Instant::now();
    let timeout = config
        .timeout_secs
        .map(Duration::from_secs)
        .unwrap_or(BACKEND_TIMEOUT);
    let client = match ApiClient::new(
        config.base_url.clone(),
        Some(timeout),
        Arc::new(MemorySessionStore::default()),
    ) {
        Ok(client) => client,
        Err(e) => return CheckResult::new("Backend", CheckStatus::Fail, e.to_string(), start),
    };

    match client.categories().await {
        Ok(categories) => CheckResult::new(
            "Backend",
            CheckStatus::Pass,
            format!("{} ({} categorías)", config.base_url, categories.len()),
            start,
        ),
        Err(e) => CheckResult::new(
            "Backend",
            CheckStatus::Fail,
            format!("{}: {e}", config.base_url),
            start,
        ),
    }
}

fn check_completion(config: &CompletionConfig) -> CheckResult {
    let start = Instant::now();
    let configured = config
        .api_key
        .as_deref()
        .is_some_and(|k| !k.trim().is_empty());
    if configured {
        CheckResult::new(
            "Asistente IA",
            CheckStatus::Pass,
            format!("modelo {}", config.model),
            start,
        )
    } else {
        CheckResult::new(
            "Asistente IA",
            CheckStatus::Warn,
            "sin API key, se usan sugerencias locales",
            start,
        )
    }
}
