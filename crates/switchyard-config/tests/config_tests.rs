// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the Switchyard configuration system.

use figment::Jail;
use switchyard_config::diagnostic::ConfigError;
use switchyard_config::{load_and_validate_str, load_config, load_config_from_str};
use switchyard_core::{Capability, ComplexityLevel, Priority};

/// Valid TOML with every section deserializes successfully.
#[test]
fn valid_toml_deserializes_into_switchyard_config() {
    let toml = r#"
[router]
log_level = "debug"
default_models = false
presets = ["fast-text", "code-expert"]
history_limit = 500

[analyzer]
max_prompt_chars = 4000
tokens_per_word = 1.5
default_priority = "cost"

[classifier]
timeout_ms = 750

[credentials]
openai_api_key = "sk-test"

[[models]]
key = "local-llama"
name = "Local Llama"
model_id = "llama-3-8b"
provider = "ollama"
max_tokens = 8192
capabilities = ["text_generation", "code_generation"]
complexity_threshold = "medium"
cost_per_token = 0.0
response_time_ms = 900.0
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.router.log_level, "debug");
    assert!(!config.router.default_models);
    assert_eq!(config.router.presets, vec!["fast-text", "code-expert"]);
    assert_eq!(config.router.history_limit, Some(500));
    assert_eq!(config.analyzer.max_prompt_chars, 4000);
    assert!((config.analyzer.tokens_per_word - 1.5).abs() < f64::EPSILON);
    assert_eq!(config.analyzer.default_priority, Priority::Cost);
    assert_eq!(config.classifier.timeout_ms, 750);
    assert_eq!(config.credentials.openai_api_key.as_deref(), Some("sk-test"));

    assert_eq!(config.models.len(), 1);
    let model = &config.models[0];
    assert_eq!(model.key, "local-llama");
    assert_eq!(model.provider, "ollama");
    assert_eq!(
        model.capabilities,
        vec![Capability::TextGeneration, Capability::CodeGeneration]
    );
    assert_eq!(model.complexity_threshold, ComplexityLevel::Medium);
    assert!(model.description.is_empty());
}

/// Missing optional sections use defaults without error.
#[test]
fn missing_optional_sections_use_defaults() {
    let config = load_config_from_str("").expect("empty TOML should use defaults");

    assert_eq!(config.router.log_level, "info");
    assert!(config.router.default_models);
    assert!(config.router.presets.is_empty());
    assert!(config.router.history_limit.is_none());
    assert_eq!(config.analyzer.max_prompt_chars, 32_000);
    assert!((config.analyzer.tokens_per_word - 1.3).abs() < f64::EPSILON);
    assert_eq!(config.analyzer.length_norm_words, 200);
    assert_eq!(config.analyzer.default_priority, Priority::Accuracy);
    assert_eq!(config.classifier.timeout_ms, 2000);
    assert!(config.models.is_empty());
}

/// Unknown field in [analyzer] produces an UnknownKey diagnostic with a suggestion.
#[test]
fn unknown_field_produces_suggestion() {
    let toml = r#"
[analyzer]
max_prompt_char = 10
"#;

    let errors = load_and_validate_str(toml).expect_err("should reject unknown field");
    let suggestion = errors.iter().find_map(|e| match e {
        ConfigError::UnknownKey {
            key, suggestion, ..
        } if key == "max_prompt_char" => suggestion.clone(),
        _ => None,
    });
    assert_eq!(suggestion.as_deref(), Some("max_prompt_chars"));
}

/// A model entry missing a required field is reported as a missing key.
#[test]
fn model_missing_required_field_is_reported() {
    let toml = r#"
[[models]]
key = "half"
name = "Half Model"
max_tokens = 100
capabilities = ["text_generation"]
complexity_threshold = "low"
cost_per_token = 0.001
response_time_ms = 100.0
"#;

    let errors = load_and_validate_str(toml).expect_err("model_id is required");
    assert!(errors.iter().any(
        |e| matches!(e, ConfigError::MissingKey { key } if key.ends_with("model_id"))
    ));
}

/// An unknown capability tag is reported instead of silently dropped.
#[test]
fn unknown_capability_is_rejected() {
    let toml = r#"
[[models]]
key = "x"
name = "X"
model_id = "x-1"
max_tokens = 100
capabilities = ["telepathy"]
complexity_threshold = "low"
cost_per_token = 0.001
response_time_ms = 100.0
"#;

    let errors = load_and_validate_str(toml).expect_err("telepathy is not a capability");
    assert!(!errors.is_empty());
}

/// Semantic validation runs after successful deserialization.
#[test]
fn validation_errors_are_collected() {
    let toml = r#"
[router]
log_level = "loud"

[analyzer]
medium_threshold = 3.0
high_threshold = 2.0
"#;

    let errors = load_and_validate_str(toml).expect_err("two validation problems");
    assert_eq!(errors.len(), 2);
    assert!(errors
        .iter()
        .all(|e| matches!(e, ConfigError::Validation { .. })));
}

/// Environment variables override file values, section by section.
#[test]
fn env_vars_override_local_file() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "switchyard.toml",
            r#"
[analyzer]
max_prompt_chars = 1000

[router]
log_level = "warn"
"#,
        )?;
        jail.set_env("SWITCHYARD_ANALYZER_MAX_PROMPT_CHARS", "2500");
        jail.set_env("SWITCHYARD_CLASSIFIER_TIMEOUT_MS", "300");

        let config = load_config()?;
        assert_eq!(config.analyzer.max_prompt_chars, 2500);
        assert_eq!(config.classifier.timeout_ms, 300);
        assert_eq!(config.router.log_level, "warn");
        Ok(())
    });
}

/// Uppercase variable names map onto every section's snake_case fields.
#[test]
fn env_vars_reach_every_section() {
    Jail::expect_with(|jail| {
        jail.set_env("SWITCHYARD_ROUTER_LOG_LEVEL", "debug");
        jail.set_env("SWITCHYARD_ROUTER_HISTORY_LIMIT", "50");
        jail.set_env("SWITCHYARD_ANALYZER_DEFAULT_PRIORITY", "speed");
        jail.set_env("SWITCHYARD_ANALYZER_TOKENS_PER_WORD", "2.0");

        let config = load_config()?;
        assert_eq!(config.router.log_level, "debug");
        assert_eq!(config.router.history_limit, Some(50));
        assert_eq!(config.analyzer.default_priority, Priority::Speed);
        assert_eq!(config.analyzer.tokens_per_word, 2.0);
        Ok(())
    });
}

/// The conventional OPENAI_API_KEY variable fills the credential.
#[test]
fn openai_api_key_env_var_is_honored() {
    Jail::expect_with(|jail| {
        jail.set_env("OPENAI_API_KEY", "sk-from-env");
        let config = load_config()?;
        assert_eq!(
            config.credentials.openai_api_key.as_deref(),
            Some("sk-from-env")
        );
        Ok(())
    });
}

/// The prefixed variable wins over the conventional one.
#[test]
fn prefixed_credential_wins_over_conventional_var() {
    Jail::expect_with(|jail| {
        jail.set_env("OPENAI_API_KEY", "sk-conventional");
        jail.set_env("SWITCHYARD_CREDENTIALS_OPENAI_API_KEY", "sk-prefixed");
        let config = load_config()?;
        assert_eq!(
            config.credentials.openai_api_key.as_deref(),
            Some("sk-prefixed")
        );
        Ok(())
    });
}

/// Credentials never leak through Debug output.
#[test]
fn credentials_are_redacted_in_debug() {
    let config = load_config_from_str(
        r#"
[credentials]
openai_api_key = "sk-very-secret"
"#,
    )
    .unwrap();
    let debug = format!("{:?}", config.credentials);
    assert!(!debug.contains("sk-very-secret"));
    assert!(debug.contains("REDACTED"));
}
