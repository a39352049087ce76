// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Model profiles and routers shared across integration tests.

use switchyard_config::model::AnalyzerConfig;
use switchyard_core::{Capability, ComplexityLevel, Priority};
use switchyard_router::{
    ModelProfile, ModelRegistry, ModelRouter, PromptAnalyzer, RoutingHistory,
};

const ALL_CAPABILITIES: [Capability; 9] = [
    Capability::TextGeneration,
    Capability::CodeGeneration,
    Capability::Analysis,
    Capability::CreativeWriting,
    Capability::TechnicalWriting,
    Capability::Translation,
    Capability::Summarization,
    Capability::QuestionAnswering,
    Capability::Reasoning,
];

/// LOW ceiling, cheapest and fastest (500 ms). Handles short code requests.
pub fn fast_model() -> ModelProfile {
    ModelProfile::builder("Fast", "fast-1")
        .max_tokens(2048)
        .capabilities([
            Capability::TextGeneration,
            Capability::CodeGeneration,
            Capability::Summarization,
            Capability::QuestionAnswering,
        ])
        .complexity_threshold(ComplexityLevel::Low)
        .cost_per_token(0.0001)
        .response_time_ms(500.0)
        .description("fast fixture")
        .build()
        .expect("fast fixture is valid")
}

/// HIGH ceiling, mid-priced, 1500 ms.
pub fn balanced_model() -> ModelProfile {
    ModelProfile::builder("Balanced", "balanced-1")
        .max_tokens(4096)
        .capabilities([
            Capability::TextGeneration,
            Capability::CodeGeneration,
            Capability::Analysis,
            Capability::CreativeWriting,
            Capability::Summarization,
            Capability::QuestionAnswering,
        ])
        .complexity_threshold(ComplexityLevel::High)
        .cost_per_token(0.0005)
        .response_time_ms(1500.0)
        .description("balanced fixture")
        .build()
        .expect("balanced fixture is valid")
}

/// EXPERT ceiling, every capability, most expensive and slowest.
pub fn expert_model() -> ModelProfile {
    ModelProfile::builder("Expert", "expert-1")
        .max_tokens(8192)
        .capabilities(ALL_CAPABILITIES)
        .complexity_threshold(ComplexityLevel::Expert)
        .cost_per_token(0.002)
        .response_time_ms(3000.0)
        .description("expert fixture")
        .build()
        .expect("expert fixture is valid")
}

/// A router over exactly `models`, with `default_priority` for prompts
/// that carry no urgency or budget markers.
pub fn router_with(models: Vec<(&str, ModelProfile)>, default_priority: Priority) -> ModelRouter {
    let analyzer = PromptAnalyzer::new(AnalyzerConfig {
        default_priority,
        ..AnalyzerConfig::default()
    });
    let registry = ModelRegistry::with_models(
        models
            .into_iter()
            .map(|(name, profile)| (name.to_string(), profile)),
    );
    ModelRouter::from_parts(analyzer, registry, RoutingHistory::new())
}

/// `fast` and `expert` only.
pub fn fast_and_expert_router(default_priority: Priority) -> ModelRouter {
    router_with(
        vec![("fast", fast_model()), ("expert", expert_model())],
        default_priority,
    )
}

/// `fast`, `balanced` and `expert`.
pub fn three_tier_router(default_priority: Priority) -> ModelRouter {
    router_with(
        vec![
            ("fast", fast_model()),
            ("balanced", balanced_model()),
            ("expert", expert_model()),
        ],
        default_priority,
    )
}

/// A router with no models at all.
pub fn empty_router() -> ModelRouter {
    router_with(Vec::new(), Priority::default())
}
