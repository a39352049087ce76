// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in model profiles and factory shortcuts.
//!
//! The factory functions return pre-filled builders, so callers can adjust
//! any field before calling [`ModelProfileBuilder::build`].

use switchyard_config::validation::KNOWN_PRESETS;
use switchyard_core::{Capability, ComplexityLevel, SwitchyardError};

use crate::profile::{ModelProfile, ModelProfileBuilder};

/// Every capability except reasoning.
const GENERAL_CAPABILITIES: [Capability; 8] = [
    Capability::TextGeneration,
    Capability::CodeGeneration,
    Capability::Analysis,
    Capability::CreativeWriting,
    Capability::TechnicalWriting,
    Capability::Translation,
    Capability::Summarization,
    Capability::QuestionAnswering,
];

/// A fast, cheap LOW-ceiling model for simple text tasks.
pub fn fast_model(name: impl Into<String>, model_id: impl Into<String>) -> ModelProfileBuilder {
    ModelProfile::builder(name, model_id)
        .max_tokens(2048)
        .capabilities([
            Capability::TextGeneration,
            Capability::Summarization,
            Capability::QuestionAnswering,
        ])
        .complexity_threshold(ComplexityLevel::Low)
        .cost_per_token(0.0001)
        .response_time_ms(500.0)
        .description("Fast, cheap model for simple tasks")
}

/// A MEDIUM-ceiling general purpose model.
pub fn balanced_model(name: impl Into<String>, model_id: impl Into<String>) -> ModelProfileBuilder {
    ModelProfile::builder(name, model_id)
        .max_tokens(4096)
        .capabilities([
            Capability::TextGeneration,
            Capability::CodeGeneration,
            Capability::Analysis,
            Capability::CreativeWriting,
            Capability::TechnicalWriting,
            Capability::Summarization,
            Capability::QuestionAnswering,
        ])
        .complexity_threshold(ComplexityLevel::Medium)
        .cost_per_token(0.0005)
        .response_time_ms(1500.0)
        .description("Balanced model for medium complexity tasks")
}

/// An EXPERT-ceiling model covering every general capability.
pub fn expert_model(name: impl Into<String>, model_id: impl Into<String>) -> ModelProfileBuilder {
    ModelProfile::builder(name, model_id)
        .max_tokens(8192)
        .capabilities(GENERAL_CAPABILITIES)
        .complexity_threshold(ComplexityLevel::Expert)
        .cost_per_token(0.002)
        .response_time_ms(3000.0)
        .description("Expert model for complex tasks")
}

/// A model limited to `capabilities`. The description lists them.
pub fn specialized_model(
    name: impl Into<String>,
    model_id: impl Into<String>,
    capabilities: &[Capability],
    threshold: ComplexityLevel,
) -> ModelProfileBuilder {
    let listed = capabilities
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    ModelProfile::builder(name, model_id)
        .max_tokens(4096)
        .capabilities(capabilities.iter().copied())
        .complexity_threshold(threshold)
        .cost_per_token(0.001)
        .response_time_ms(2000.0)
        .description(format!("Specialized model for {listed}"))
}

/// The three OpenAI models a router starts with, keyed by registry name.
pub fn default_models() -> Result<Vec<(String, ModelProfile)>, SwitchyardError> {
    let turbo_35 = ModelProfile::builder("GPT-3.5 Turbo", "gpt-3.5-turbo")
        .provider("openai")
        .max_tokens(4096)
        .capabilities(GENERAL_CAPABILITIES)
        .complexity_threshold(ComplexityLevel::High)
        .cost_per_token(0.0005)
        .response_time_ms(2000.0)
        .description("Fast and efficient for most tasks")
        .build()?;
    let gpt_4 = ModelProfile::builder("GPT-4", "gpt-4")
        .provider("openai")
        .max_tokens(8192)
        .capabilities(GENERAL_CAPABILITIES)
        .capability(Capability::Reasoning)
        .complexity_threshold(ComplexityLevel::Expert)
        .cost_per_token(0.03)
        .response_time_ms(5000.0)
        .description("Most capable model")
        .build()?;
    let gpt_4_turbo = ModelProfile::builder("GPT-4 Turbo", "gpt-4-turbo-preview")
        .provider("openai")
        .max_tokens(128_000)
        .capabilities(GENERAL_CAPABILITIES)
        .capability(Capability::Reasoning)
        .complexity_threshold(ComplexityLevel::Expert)
        .cost_per_token(0.01)
        .response_time_ms(3000.0)
        .description("High capacity and speed")
        .build()?;

    Ok(vec![
        ("gpt-3.5-turbo".to_string(), turbo_35),
        ("gpt-4".to_string(), gpt_4),
        ("gpt-4-turbo".to_string(), gpt_4_turbo),
    ])
}

/// A named preset, keyed by its model identifier.
///
/// Fails with [`SwitchyardError::Config`] for names outside
/// `fast-text`, `creative-writer`, `code-expert` and `multilingual`.
pub fn predefined(name: &str) -> Result<(String, ModelProfile), SwitchyardError> {
    let builder = match name {
        "fast-text" => fast_model("Fast Text Model", "fast-text-v1")
            .description("Fast model for text tasks"),
        "creative-writer" => specialized_model(
            "Creative Writer Model",
            "creative-writer-v1",
            &[
                Capability::TextGeneration,
                Capability::CreativeWriting,
                Capability::Translation,
            ],
            ComplexityLevel::High,
        )
        .cost_per_token(0.0008)
        .response_time_ms(1500.0)
        .description("Specialized for creative writing"),
        "code-expert" => specialized_model(
            "Code Expert Model",
            "code-expert-v1",
            &[
                Capability::CodeGeneration,
                Capability::Analysis,
                Capability::TechnicalWriting,
            ],
            ComplexityLevel::Expert,
        )
        .max_tokens(8192)
        .cost_per_token(0.002)
        .response_time_ms(2500.0)
        .description("Expert model for coding tasks"),
        "multilingual" => specialized_model(
            "Multilingual Model",
            "multilingual-v1",
            &[
                Capability::TextGeneration,
                Capability::Translation,
                Capability::Summarization,
            ],
            ComplexityLevel::Medium,
        )
        .cost_per_token(0.0006)
        .response_time_ms(1200.0)
        .description("Specialized for multilingual tasks"),
        other => {
            return Err(SwitchyardError::Config(format!(
                "unknown preset `{other}` (known: {})",
                KNOWN_PRESETS.join(", ")
            )));
        }
    };
    let profile = builder.build()?;
    Ok((profile.model_id().to_string(), profile))
}

/// All named presets.
pub fn predefined_models() -> Result<Vec<(String, ModelProfile)>, SwitchyardError> {
    KNOWN_PRESETS.iter().map(|name| predefined(name)).collect()
}
