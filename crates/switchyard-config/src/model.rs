// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Switchyard router.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};
use switchyard_core::{Capability, ComplexityLevel, Priority};

/// Top-level Switchyard configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable overrides.
/// All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SwitchyardConfig {
    /// Router-wide settings: logging, registry seeding, history bounds.
    #[serde(default)]
    pub router: RouterConfig,

    /// Heuristic prompt analyzer tuning.
    #[serde(default)]
    pub analyzer: AnalyzerConfig,

    /// Optional external classifier settings.
    #[serde(default)]
    pub classifier: ClassifierConfig,

    /// Provider credentials, passed through untouched.
    #[serde(default)]
    pub credentials: CredentialsConfig,

    /// Custom model entries merged over the defaults and presets.
    #[serde(default)]
    pub models: Vec<ModelConfig>,
}

/// Router-wide configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RouterConfig {
    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Seed the registry with the built-in OpenAI model profiles.
    #[serde(default = "default_true")]
    pub default_models: bool,

    /// Names of predefined factory profiles to register
    /// (`fast-text`, `creative-writer`, `code-expert`, `multilingual`).
    #[serde(default)]
    pub presets: Vec<String>,

    /// Keep at most this many routing decisions in history. `None` keeps all.
    #[serde(default)]
    pub history_limit: Option<usize>,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            default_models: true,
            presets: Vec::new(),
            history_limit: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

/// Thresholds and constants for the heuristic prompt analyzer.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AnalyzerConfig {
    /// Prompts longer than this many characters are rejected.
    #[serde(default = "default_max_prompt_chars")]
    pub max_prompt_chars: usize,

    /// Average tokens per whitespace-delimited word.
    #[serde(default = "default_tokens_per_word")]
    pub tokens_per_word: f64,

    /// Word count at which the length signal reaches its maximum.
    #[serde(default = "default_length_norm_words")]
    pub length_norm_words: usize,

    /// Minimum complexity score for MEDIUM.
    #[serde(default = "default_medium_threshold")]
    pub medium_threshold: f64,

    /// Minimum complexity score for HIGH.
    #[serde(default = "default_high_threshold")]
    pub high_threshold: f64,

    /// Minimum complexity score for EXPERT.
    #[serde(default = "default_expert_threshold")]
    pub expert_threshold: f64,

    /// Priority used when the prompt carries no urgency or budget markers.
    #[serde(default)]
    pub default_priority: Priority,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            max_prompt_chars: default_max_prompt_chars(),
            tokens_per_word: default_tokens_per_word(),
            length_norm_words: default_length_norm_words(),
            medium_threshold: default_medium_threshold(),
            high_threshold: default_high_threshold(),
            expert_threshold: default_expert_threshold(),
            default_priority: Priority::default(),
        }
    }
}

fn default_max_prompt_chars() -> usize {
    32_000
}

fn default_tokens_per_word() -> f64 {
    1.3
}

fn default_length_norm_words() -> usize {
    200
}

fn default_medium_threshold() -> f64 {
    1.0
}

fn default_high_threshold() -> f64 {
    2.0
}

fn default_expert_threshold() -> f64 {
    3.5
}

/// External classifier configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ClassifierConfig {
    /// Upper bound on a single classifier call, in milliseconds.
    #[serde(default = "default_classifier_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_classifier_timeout_ms(),
        }
    }
}

fn default_classifier_timeout_ms() -> u64 {
    2000
}

/// Provider credentials. Opaque to the router.
#[derive(Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CredentialsConfig {
    /// OpenAI API key. Falls back to the `OPENAI_API_KEY` environment variable.
    #[serde(default)]
    pub openai_api_key: Option<String>,
}

impl std::fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field(
                "openai_api_key",
                &self.openai_api_key.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

/// A custom model entry from a `[[models]]` table.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ModelConfig {
    /// Registry key the model is stored under.
    pub key: String,

    /// Display name.
    pub name: String,

    /// Provider-side model identifier.
    pub model_id: String,

    /// Provider name.
    #[serde(default = "default_provider")]
    pub provider: String,

    /// Maximum prompt tokens the model accepts.
    pub max_tokens: u32,

    /// Task types the model handles.
    pub capabilities: Vec<Capability>,

    /// Highest complexity level the model handles competently.
    pub complexity_threshold: ComplexityLevel,

    /// Cost per token in USD.
    pub cost_per_token: f64,

    /// Typical response time in milliseconds.
    pub response_time_ms: f64,

    /// Free-form description.
    #[serde(default)]
    pub description: String,
}

fn default_provider() -> String {
    "custom".to_string()
}
