// SPDX-FileCopyrightText: 2026 ProxHogar Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./proxhogar.toml` > `~/.config/proxhogar/proxhogar.toml`
//! > `/etc/proxhogar/proxhogar.toml` with environment variable overrides via
//! the `PROXHOGAR_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::ProxHogarConfig;

const LOCAL_CONFIG: &str = "proxhogar.toml";
const SYSTEM_CONFIG: &str = "/etc/proxhogar/proxhogar.toml";

/// Path of the per-user config file.
pub fn user_config_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("proxhogar").join(LOCAL_CONFIG))
        .unwrap_or_default()
}

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/proxhogar/proxhogar.toml` (system-wide)
/// 3. `~/.config/proxhogar/proxhogar.toml` (user XDG config)
/// 4. `./proxhogar.toml` (local directory)
/// 5. `PROXHOGAR_*` environment variables
pub fn load_config() -> Result<ProxHogarConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
pub fn load_config_from_str(toml_content: &str) -> Result<ProxHogarConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(ProxHogarConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<ProxHogarConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(ProxHogarConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used for the standard hierarchy (exposed for diagnostic use).
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(ProxHogarConfig::default()))
        .merge(Toml::file(SYSTEM_CONFIG))
        .merge(Toml::file(user_config_path()))
        .merge(Toml::file(LOCAL_CONFIG))
        .merge(env_provider())
}

/// Every file the standard hierarchy reads, lowest precedence first.
pub fn standard_paths() -> Vec<PathBuf> {
    vec![
        PathBuf::from(SYSTEM_CONFIG),
        user_config_path(),
        std::env::current_dir()
            .map(|d| d.join(LOCAL_CONFIG))
            .unwrap_or_else(|_| PathBuf::from(LOCAL_CONFIG)),
    ]
}

/// Config sections addressable from the environment.
const ENV_SECTIONS: &[&str] = &["api", "session", "completion", "verification", "payment", "log"];

/// Environment provider with explicit section-to-dot mapping.
///
/// Only the first `_` after a known section name becomes a dot, so
/// `PROXHOGAR_API_BASE_URL` maps to `api.base_url` and
/// `PROXHOGAR_COMPLETION_API_KEY` to `completion.api_key`.
fn env_provider() -> Env {
    Env::prefixed("PROXHOGAR_").map(|key| map_env_key(key.as_str()).into())
}

/// Maps a lowercased, prefix-stripped env var name to a config key path.
pub fn map_env_key(key: &str) -> String {
    for section in ENV_SECTIONS {
        if let Some(rest) = key
            .strip_prefix(section)
            .and_then(|r| r.strip_prefix('_'))
        {
            return format!("{section}.{rest}");
        }
    }
    key.to_string()
}
