// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Router entry point.
//!
//! Ties the analyzer, registry, selector and history together:
//! analyze -> select -> record. An optional external classifier can refine
//! the analysis; it is bounded by a timeout and never fails a route.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use switchyard_config::model::ModelConfig;
use switchyard_config::SwitchyardConfig;
use switchyard_core::{DecisionLevel, PromptClassifier, SwitchyardError};
use tracing::{debug, info, warn};

use crate::analyzer::{PromptAnalyzer, RequirementsProfile};
use crate::history::{RoutingHistory, RoutingStats};
use crate::presets;
use crate::profile::ModelProfile;
use crate::registry::ModelRegistry;
use crate::selector;

const DEFAULT_CLASSIFIER_TIMEOUT: Duration = Duration::from_millis(2000);

/// Result of routing one prompt.
#[derive(Debug, Clone, Serialize)]
pub struct RouteOutcome {
    /// Registry name of the chosen model.
    pub selected_model: String,
    /// Qualitative level of the prompt: low, medium or high.
    pub routing_decision: DecisionLevel,
    pub requirements: RequirementsProfile,
    /// Profile of the chosen model at selection time.
    pub model: ModelProfile,
    pub reason: String,
}

/// Routes prompts to the most suitable registered model.
///
/// Owns its registry and history; share a router across tasks with `Arc`.
pub struct ModelRouter {
    analyzer: PromptAnalyzer,
    registry: ModelRegistry,
    history: RoutingHistory,
    classifier: Option<Arc<dyn PromptClassifier>>,
    classifier_timeout: Duration,
}

impl ModelRouter {
    /// Build a router from configuration.
    ///
    /// The registry is seeded with the default models (unless
    /// `router.default_models` is off), then the named presets, then the
    /// `[[models]]` entries; later entries replace earlier ones of the same
    /// name.
    pub fn new(config: &SwitchyardConfig) -> Result<Self, SwitchyardError> {
        Self::with_custom_models(config, Vec::new())
    }

    /// Like [`ModelRouter::new`], with `custom` registered last.
    pub fn with_custom_models(
        config: &SwitchyardConfig,
        custom: impl IntoIterator<Item = (String, ModelProfile)>,
    ) -> Result<Self, SwitchyardError> {
        let mut models = BTreeMap::new();
        if config.router.default_models {
            models.extend(presets::default_models()?);
        }
        for name in &config.router.presets {
            let (key, profile) = presets::predefined(name)?;
            models.insert(key, profile);
        }
        for entry in &config.models {
            models.insert(entry.key.clone(), ModelProfile::try_from(entry)?);
        }
        models.extend(custom);

        let history = match config.router.history_limit {
            Some(limit) => RoutingHistory::with_limit(limit),
            None => RoutingHistory::new(),
        };

        info!(
            models = models.len(),
            presets = config.router.presets.len(),
            history_limit = ?config.router.history_limit,
            "router initialized"
        );

        Ok(Self::from_parts(
            PromptAnalyzer::new(config.analyzer.clone()),
            ModelRegistry::with_models(models),
            history,
        )
        .with_classifier_timeout(Duration::from_millis(config.classifier.timeout_ms)))
    }

    /// Assemble a router from already-built components.
    pub fn from_parts(
        analyzer: PromptAnalyzer,
        registry: ModelRegistry,
        history: RoutingHistory,
    ) -> Self {
        Self {
            analyzer,
            registry,
            history,
            classifier: None,
            classifier_timeout: DEFAULT_CLASSIFIER_TIMEOUT,
        }
    }

    /// Attach an external classifier consulted by [`ModelRouter::route_refined`].
    pub fn with_classifier(mut self, classifier: Arc<dyn PromptClassifier>) -> Self {
        self.classifier = Some(classifier);
        self
    }

    /// Upper bound on one classifier call.
    pub fn with_classifier_timeout(mut self, timeout: Duration) -> Self {
        self.classifier_timeout = timeout;
        self
    }

    /// Route a prompt using the local heuristic analysis only.
    ///
    /// On success the decision is appended to history. Errors
    /// ([`SwitchyardError::InvalidInput`], [`SwitchyardError::NoEligibleModel`])
    /// leave history untouched.
    pub fn route(&self, prompt: &str) -> Result<RouteOutcome, SwitchyardError> {
        let requirements = self.analyzer.analyze(prompt)?;
        self.dispatch(prompt, requirements)
    }

    /// Route a prompt, letting the attached classifier refine the analysis.
    ///
    /// Classifier errors and timeouts are logged and the heuristic profile
    /// is used instead. Without a classifier this is [`ModelRouter::route`].
    pub async fn route_refined(&self, prompt: &str) -> Result<RouteOutcome, SwitchyardError> {
        let heuristic = self.analyzer.analyze(prompt)?;
        let requirements = match &self.classifier {
            Some(classifier) => self.refine(classifier.as_ref(), prompt, heuristic).await,
            None => heuristic,
        };
        self.dispatch(prompt, requirements)
    }

    async fn refine(
        &self,
        classifier: &dyn PromptClassifier,
        prompt: &str,
        heuristic: RequirementsProfile,
    ) -> RequirementsProfile {
        match tokio::time::timeout(self.classifier_timeout, classifier.classify(prompt)).await {
            Ok(Ok(hint)) => {
                debug!(
                    classifier = classifier.name(),
                    reasoning = hint.reasoning.as_deref().unwrap_or(""),
                    "classifier hint applied"
                );
                heuristic.with_hint(&hint)
            }
            Ok(Err(err)) => {
                warn!(
                    classifier = classifier.name(),
                    error = %err,
                    "classifier failed, using heuristic analysis"
                );
                heuristic
            }
            Err(_) => {
                let err = SwitchyardError::Timeout {
                    duration: self.classifier_timeout,
                };
                warn!(
                    classifier = classifier.name(),
                    error = %err,
                    "classifier timed out, using heuristic analysis"
                );
                heuristic
            }
        }
    }

    fn dispatch(
        &self,
        prompt: &str,
        requirements: RequirementsProfile,
    ) -> Result<RouteOutcome, SwitchyardError> {
        let selection = selector::select(&requirements, &self.registry).inspect_err(|err| {
            debug!(error = %err, "no model selected");
        })?;

        info!(
            model = %selection.model_key,
            level = %selection.decision.level,
            complexity = %requirements.complexity(),
            priority = %requirements.priority(),
            estimated_tokens = requirements.estimated_tokens(),
            "prompt routed"
        );

        let outcome = RouteOutcome {
            selected_model: selection.model_key,
            routing_decision: selection.decision.level,
            requirements,
            model: selection.model,
            reason: selection.decision.reason.clone(),
        };
        self.history.record(prompt, selection.decision);
        Ok(outcome)
    }

    /// Run only the analysis step.
    pub fn analyze(&self, prompt: &str) -> Result<RequirementsProfile, SwitchyardError> {
        self.analyzer.analyze(prompt)
    }

    /// Register `profile` under `name`, replacing any existing entry.
    pub fn add_model(&self, name: impl Into<String>, profile: ModelProfile) {
        self.registry.add(name, profile);
    }

    /// Validate a config entry and register it under its key.
    ///
    /// On error the registry is unchanged.
    pub fn add_model_config(&self, entry: &ModelConfig) -> Result<(), SwitchyardError> {
        let profile = ModelProfile::try_from(entry)?;
        self.registry.add(entry.key.clone(), profile);
        Ok(())
    }

    /// Remove a model. Returns whether it was registered.
    pub fn remove_model(&self, name: &str) -> bool {
        self.registry.remove(name)
    }

    pub fn list_models(&self) -> BTreeMap<String, ModelProfile> {
        self.registry.list()
    }

    pub fn get_model_info(&self, name: &str) -> Option<ModelProfile> {
        self.registry.get(name)
    }

    pub fn get_routing_stats(&self) -> RoutingStats {
        self.history.stats()
    }

    pub fn analyzer(&self) -> &PromptAnalyzer {
        &self.analyzer
    }

    pub fn registry(&self) -> &ModelRegistry {
        &self.registry
    }

    pub fn history(&self) -> &RoutingHistory {
        &self.history
    }
}
