// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Static model profiles and their validating builder.
//!
//! A [`ModelProfile`] can only be obtained through [`ModelProfileBuilder::build`]
//! (or the `TryFrom<&ModelConfig>` conversion, which uses it), so every profile
//! in a registry has passed validation. Profiles are immutable; replacing one
//! means registering a new profile under the same name.

use std::collections::BTreeSet;

use serde::Serialize;
use switchyard_config::model::ModelConfig;
use switchyard_core::{Capability, ComplexityLevel, SwitchyardError};

/// Capabilities, limits, cost and latency of one backend model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelProfile {
    name: String,
    model_id: String,
    provider: String,
    max_tokens: u32,
    capabilities: BTreeSet<Capability>,
    complexity_threshold: ComplexityLevel,
    cost_per_token: f64,
    response_time_ms: f64,
    description: String,
}

impl ModelProfile {
    /// Start building a profile. Unset fields take the builder defaults.
    pub fn builder(name: impl Into<String>, model_id: impl Into<String>) -> ModelProfileBuilder {
        ModelProfileBuilder::new(name, model_id)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    pub fn provider(&self) -> &str {
        &self.provider
    }

    pub fn max_tokens(&self) -> u32 {
        self.max_tokens
    }

    pub fn capabilities(&self) -> &BTreeSet<Capability> {
        &self.capabilities
    }

    pub fn complexity_threshold(&self) -> ComplexityLevel {
        self.complexity_threshold
    }

    pub fn cost_per_token(&self) -> f64 {
        self.cost_per_token
    }

    pub fn response_time_ms(&self) -> f64 {
        self.response_time_ms
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether the model handles prompts assessed at `level`.
    pub fn can_handle(&self, level: ComplexityLevel) -> bool {
        self.complexity_threshold >= level
    }

    /// Whether the model offers every capability in `required`.
    pub fn supports_all(&self, required: &BTreeSet<Capability>) -> bool {
        required.is_subset(&self.capabilities)
    }
}

/// Builder for [`ModelProfile`].
///
/// Defaults: provider `custom`, 4096 max tokens, no capabilities, MEDIUM
/// threshold, zero cost, 1000 ms response time, empty description.
#[derive(Debug, Clone)]
pub struct ModelProfileBuilder {
    name: String,
    model_id: String,
    provider: String,
    max_tokens: u32,
    capabilities: BTreeSet<Capability>,
    complexity_threshold: ComplexityLevel,
    cost_per_token: f64,
    response_time_ms: f64,
    description: String,
}

impl ModelProfileBuilder {
    fn new(name: impl Into<String>, model_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            model_id: model_id.into(),
            provider: "custom".to_string(),
            max_tokens: 4096,
            capabilities: BTreeSet::new(),
            complexity_threshold: ComplexityLevel::Medium,
            cost_per_token: 0.0,
            response_time_ms: 1000.0,
            description: String::new(),
        }
    }

    pub fn provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = provider.into();
        self
    }

    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Replace the capability set.
    pub fn capabilities(mut self, capabilities: impl IntoIterator<Item = Capability>) -> Self {
        self.capabilities = capabilities.into_iter().collect();
        self
    }

    /// Add a single capability to the set.
    pub fn capability(mut self, capability: Capability) -> Self {
        self.capabilities.insert(capability);
        self
    }

    pub fn complexity_threshold(mut self, level: ComplexityLevel) -> Self {
        self.complexity_threshold = level;
        self
    }

    pub fn cost_per_token(mut self, cost: f64) -> Self {
        self.cost_per_token = cost;
        self
    }

    pub fn response_time_ms(mut self, millis: f64) -> Self {
        self.response_time_ms = millis;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Validate and produce the profile.
    ///
    /// Fails with [`SwitchyardError::InvalidModelProfile`] when the name or
    /// identifier is blank, `max_tokens` is zero, the capability set is
    /// empty, or cost / response time is negative or not finite.
    pub fn build(self) -> Result<ModelProfile, SwitchyardError> {
        let label = if self.name.trim().is_empty() {
            self.model_id.clone()
        } else {
            self.name.clone()
        };
        let reject = |reason: String| -> Result<ModelProfile, SwitchyardError> {
            Err(SwitchyardError::invalid_profile(label.clone(), reason))
        };

        if self.name.trim().is_empty() {
            return reject("name must not be empty".to_string());
        }
        if self.model_id.trim().is_empty() {
            return reject("model_id must not be empty".to_string());
        }
        if self.max_tokens == 0 {
            return reject("max_tokens must be positive".to_string());
        }
        if self.capabilities.is_empty() {
            return reject("at least one capability is required".to_string());
        }
        if !(self.cost_per_token.is_finite() && self.cost_per_token >= 0.0) {
            return reject(format!(
                "cost_per_token must be non-negative, got {}",
                self.cost_per_token
            ));
        }
        if !(self.response_time_ms.is_finite() && self.response_time_ms >= 0.0) {
            return reject(format!(
                "response_time_ms must be non-negative, got {}",
                self.response_time_ms
            ));
        }

        Ok(ModelProfile {
            name: self.name,
            model_id: self.model_id,
            provider: self.provider,
            max_tokens: self.max_tokens,
            capabilities: self.capabilities,
            complexity_threshold: self.complexity_threshold,
            cost_per_token: self.cost_per_token,
            response_time_ms: self.response_time_ms,
            description: self.description,
        })
    }
}

impl TryFrom<&ModelConfig> for ModelProfile {
    type Error = SwitchyardError;

    fn try_from(config: &ModelConfig) -> Result<Self, Self::Error> {
        ModelProfile::builder(&config.name, &config.model_id)
            .provider(&config.provider)
            .max_tokens(config.max_tokens)
            .capabilities(config.capabilities.iter().copied())
            .complexity_threshold(config.complexity_threshold)
            .cost_per_token(config.cost_per_token)
            .response_time_ms(config.response_time_ms)
            .description(&config.description)
            .build()
    }
}
