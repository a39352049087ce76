// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./switchyard.toml` > `~/.config/switchyard/switchyard.toml`
//! > `/etc/switchyard/switchyard.toml` with environment variable overrides via the
//! `SWITCHYARD_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::SwitchyardConfig;

/// File name looked up in every directory of the hierarchy.
pub const CONFIG_FILE_NAME: &str = "switchyard.toml";

/// System-wide configuration path.
pub const SYSTEM_CONFIG_PATH: &str = "/etc/switchyard/switchyard.toml";

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/switchyard/switchyard.toml` (system-wide)
/// 3. `~/.config/switchyard/switchyard.toml` (user XDG config)
/// 4. `./switchyard.toml` (local directory)
/// 5. `OPENAI_API_KEY`, then `SWITCHYARD_*` environment variables
pub fn load_config() -> Result<SwitchyardConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env vars).
///
/// Used for testing and explicit inline configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<SwitchyardConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(SwitchyardConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<SwitchyardConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(SwitchyardConfig::default()))
        .merge(Toml::file(path))
        .merge(openai_key_provider())
        .merge(env_provider())
        .extract()
}

/// Build the Figment used internally for config loading (exposed for diagnostic use).
///
/// Returns the Figment before extraction so callers can inspect metadata.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(SwitchyardConfig::default()))
        .merge(Toml::file(SYSTEM_CONFIG_PATH))
        .merge(Toml::file(user_config_path().unwrap_or_default()))
        .merge(Toml::file(CONFIG_FILE_NAME))
        .merge(openai_key_provider())
        .merge(env_provider())
}

/// Path of the per-user config file, if the platform has a config dir.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("switchyard").join(CONFIG_FILE_NAME))
}

/// The conventional `OPENAI_API_KEY` variable, mapped onto the credentials section.
fn openai_key_provider() -> Env {
    Env::raw()
        .only(&["OPENAI_API_KEY"])
        .map(|_| "credentials.openai_api_key".into())
}

/// Create the environment variable provider using explicit `map()` for section-to-dot mapping.
///
/// Uses `Env::map()` rather than `Env::split("_")` because key names contain
/// underscores: `SWITCHYARD_ANALYZER_MAX_PROMPT_CHARS` must map to
/// `analyzer.max_prompt_chars`, not `analyzer.max.prompt.chars`.
fn env_provider() -> Env {
    Env::prefixed("SWITCHYARD_").map(|key| {
        // `key` keeps the variable's case, with the prefix stripped.
        let key_str = key.as_str().to_ascii_lowercase();
        let mapped = ["router", "analyzer", "classifier", "credentials"]
            .iter()
            .find_map(|section| {
                key_str
                    .strip_prefix(section)
                    .and_then(|rest| rest.strip_prefix('_'))
                    .map(|field| format!("{section}.{field}"))
            })
            .unwrap_or(key_str);
        mapped.into()
    })
}
