// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `switchyard models` command implementation.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::process::ExitCode;

use switchyard_config::SwitchyardConfig;
use switchyard_core::SwitchyardError;
use switchyard_router::{ModelProfile, ModelRouter};

/// Run the `switchyard models` command.
pub fn run_models(
    config: &SwitchyardConfig,
    json: bool,
    use_color: bool,
) -> Result<ExitCode, SwitchyardError> {
    let router = ModelRouter::new(config)?;
    let models = router.list_models();

    if json {
        let out = serde_json::to_string_pretty(&models)
            .map_err(|e| SwitchyardError::Internal(format!("failed to serialize models: {e}")))?;
        println!("{out}");
    } else {
        print!("{}", render_models(&models, use_color));
    }
    Ok(ExitCode::SUCCESS)
}

/// One block per registered model, ordered by name.
pub fn render_models(models: &BTreeMap<String, ModelProfile>, use_color: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out);
    let _ = writeln!(out, "  switchyard models ({})", models.len());
    let _ = writeln!(out, "  {}", "-".repeat(35));

    if models.is_empty() {
        let _ = writeln!(out, "    (none registered)");
    }

    for (key, model) in models {
        if use_color {
            use colored::Colorize;
            let _ = writeln!(out, "    {} - {}", key.bold(), model.name());
        } else {
            let _ = writeln!(out, "    {key} - {}", model.name());
        }
        let _ = writeln!(
            out,
            "      {} via {}, up to {}, {} tokens",
            model.model_id(),
            model.provider(),
            model.complexity_threshold(),
            model.max_tokens()
        );
        let _ = writeln!(
            out,
            "      ${} per token, ~{} ms",
            model.cost_per_token(),
            model.response_time_ms()
        );
        let capabilities = model
            .capabilities()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(out, "      {capabilities}");
        if !model.description().is_empty() {
            let _ = writeln!(out, "      {}", model.description());
        }
    }
    let _ = writeln!(out);
    out
}
