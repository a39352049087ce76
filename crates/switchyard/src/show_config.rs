// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `switchyard config` command implementation.

use std::process::ExitCode;

use switchyard_config::SwitchyardConfig;
use switchyard_core::SwitchyardError;

const REDACTED: &str = "[REDACTED]";

/// Run the `switchyard config` command.
pub fn run_config(config: &SwitchyardConfig) -> Result<ExitCode, SwitchyardError> {
    print!("{}", render_config(config)?);
    Ok(ExitCode::SUCCESS)
}

/// The effective configuration as TOML, credentials redacted.
pub fn render_config(config: &SwitchyardConfig) -> Result<String, SwitchyardError> {
    let mut shown = config.clone();
    if shown.credentials.openai_api_key.is_some() {
        shown.credentials.openai_api_key = Some(REDACTED.to_string());
    }
    toml::to_string_pretty(&shown)
        .map_err(|e| SwitchyardError::Internal(format!("failed to render config: {e}")))
}
