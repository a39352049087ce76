// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde attributes,
//! such as ascending analyzer thresholds and non-negative model costs.

use std::collections::HashSet;

use crate::diagnostic::ConfigError;
use crate::model::{ModelConfig, SwitchyardConfig};

/// Names accepted in `router.presets`.
pub const KNOWN_PRESETS: &[&str] = &["fast-text", "creative-writer", "code-expert", "multilingual"];

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &SwitchyardConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();
    let mut fail = |message: String| errors.push(ConfigError::Validation { message });

    let level = config.router.log_level.trim().to_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        fail(format!(
            "router.log_level `{}` is not one of {}",
            config.router.log_level,
            LOG_LEVELS.join(", ")
        ));
    }

    for preset in &config.router.presets {
        if !KNOWN_PRESETS.contains(&preset.as_str()) {
            fail(format!(
                "router.presets contains unknown preset `{preset}` (known: {})",
                KNOWN_PRESETS.join(", ")
            ));
        }
    }

    if config.router.history_limit == Some(0) {
        fail("router.history_limit must be at least 1 when set".to_string());
    }

    let analyzer = &config.analyzer;
    if analyzer.max_prompt_chars == 0 {
        fail("analyzer.max_prompt_chars must be positive".to_string());
    }
    if !(analyzer.tokens_per_word.is_finite() && analyzer.tokens_per_word > 0.0) {
        fail(format!(
            "analyzer.tokens_per_word must be positive, got {}",
            analyzer.tokens_per_word
        ));
    }
    if analyzer.length_norm_words == 0 {
        fail("analyzer.length_norm_words must be positive".to_string());
    }
    let thresholds = [
        ("medium_threshold", analyzer.medium_threshold),
        ("high_threshold", analyzer.high_threshold),
        ("expert_threshold", analyzer.expert_threshold),
    ];
    for (name, value) in thresholds {
        if !(value.is_finite() && value > 0.0) {
            fail(format!("analyzer.{name} must be positive, got {value}"));
        }
    }
    if !(analyzer.medium_threshold < analyzer.high_threshold
        && analyzer.high_threshold < analyzer.expert_threshold)
    {
        fail(format!(
            "analyzer thresholds must be strictly ascending (medium {} < high {} < expert {})",
            analyzer.medium_threshold, analyzer.high_threshold, analyzer.expert_threshold
        ));
    }

    if config.classifier.timeout_ms == 0 {
        fail("classifier.timeout_ms must be positive".to_string());
    }

    let mut seen_keys = HashSet::new();
    for (i, model) in config.models.iter().enumerate() {
        if !seen_keys.insert(model.key.as_str()) {
            fail(format!("duplicate model key `{}` in [[models]] array", model.key));
        }
        for message in validate_model(i, model) {
            fail(message);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_model(index: usize, model: &ModelConfig) -> Vec<String> {
    let mut problems = Vec::new();
    let at = format!("models[{index}]");

    if model.key.trim().is_empty() {
        problems.push(format!("{at}.key must not be empty"));
    }
    if model.name.trim().is_empty() {
        problems.push(format!("{at}.name must not be empty"));
    }
    if model.model_id.trim().is_empty() {
        problems.push(format!("{at}.model_id must not be empty"));
    }
    if model.max_tokens == 0 {
        problems.push(format!("{at}.max_tokens must be positive"));
    }
    if model.capabilities.is_empty() {
        problems.push(format!("{at}.capabilities must list at least one capability"));
    }
    if !(model.cost_per_token.is_finite() && model.cost_per_token >= 0.0) {
        problems.push(format!(
            "{at}.cost_per_token must be non-negative, got {}",
            model.cost_per_token
        ));
    }
    if !(model.response_time_ms.is_finite() && model.response_time_ms >= 0.0) {
        problems.push(format!(
            "{at}.response_time_ms must be non-negative, got {}",
            model.response_time_ms
        ));
    }

    problems
}
