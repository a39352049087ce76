// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Model selection: hard filters, then a priority-specific ranking.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use switchyard_core::{DecisionLevel, Priority, SwitchyardError};

use crate::analyzer::RequirementsProfile;
use crate::profile::ModelProfile;
use crate::registry::ModelRegistry;

/// Recorded outcome of one selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutingDecision {
    /// Registry name of the chosen model.
    pub selected_model: String,
    /// Assessed prompt difficulty, independent of the chosen model.
    pub level: DecisionLevel,
    pub requirements: RequirementsProfile,
    /// Human-readable reason for the choice.
    pub reason: String,
    pub timestamp: DateTime<Utc>,
}

/// A chosen model together with the decision that chose it.
#[derive(Debug, Clone)]
pub struct Selection {
    pub model_key: String,
    pub model: ModelProfile,
    pub decision: RoutingDecision,
}

/// Whether `model` passes every hard filter for `requirements`.
pub fn is_eligible(model: &ModelProfile, requirements: &RequirementsProfile) -> bool {
    model.supports_all(requirements.capabilities())
        && model.can_handle(requirements.complexity())
        && model.max_tokens() >= requirements.estimated_tokens()
}

/// Total order used to rank eligible models; `Less` ranks first.
pub fn compare(priority: Priority, a: &ModelProfile, b: &ModelProfile) -> Ordering {
    match priority {
        Priority::Speed => a
            .response_time_ms()
            .total_cmp(&b.response_time_ms())
            .then_with(|| a.cost_per_token().total_cmp(&b.cost_per_token())),
        Priority::Cost => a
            .cost_per_token()
            .total_cmp(&b.cost_per_token())
            .then_with(|| a.response_time_ms().total_cmp(&b.response_time_ms())),
        Priority::Accuracy => b
            .complexity_threshold()
            .cmp(&a.complexity_threshold())
            .then_with(|| b.capabilities().len().cmp(&a.capabilities().len()))
            .then_with(|| a.cost_per_token().total_cmp(&b.cost_per_token())),
    }
}

fn criterion(priority: Priority) -> &'static str {
    match priority {
        Priority::Speed => "response time",
        Priority::Cost => "cost per token",
        Priority::Accuracy => "complexity ceiling",
    }
}

/// Select a model from a registry snapshot.
pub fn select(
    requirements: &RequirementsProfile,
    registry: &ModelRegistry,
) -> Result<Selection, SwitchyardError> {
    select_from(requirements, &registry.list())
}

/// Select a model from `models`.
///
/// Models that fail a hard filter are dropped; the rest are ranked by
/// [`compare`] for the profile's priority. Full ties go to the name that
/// sorts first. Fails with [`SwitchyardError::NoEligibleModel`] when nothing
/// passes the filters.
pub fn select_from(
    requirements: &RequirementsProfile,
    models: &BTreeMap<String, ModelProfile>,
) -> Result<Selection, SwitchyardError> {
    let mut eligible: Vec<(&String, &ModelProfile)> = models
        .iter()
        .filter(|(_, model)| is_eligible(model, requirements))
        .collect();

    let priority = requirements.priority();
    // Stable sort over name-ordered input keeps ties name-ascending.
    eligible.sort_by(|(_, a), (_, b)| compare(priority, a, b));

    let Some((key, model)) = eligible.first().copied() else {
        return Err(SwitchyardError::NoEligibleModel {
            required: requirements
                .capabilities()
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", "),
            complexity: requirements.complexity(),
            estimated_tokens: requirements.estimated_tokens(),
            registered: models.len(),
        });
    };

    let reason = format!(
        "{} of {} models eligible; ranked by {}",
        eligible.len(),
        models.len(),
        criterion(priority)
    );

    Ok(Selection {
        model_key: key.clone(),
        model: model.clone(),
        decision: RoutingDecision {
            selected_model: key.clone(),
            level: DecisionLevel::from(requirements.complexity()),
            requirements: requirements.clone(),
            reason,
            timestamp: Utc::now(),
        },
    })
}

#[cfg(test)]
mod tests {
    use switchyard_core::{Capability, ComplexityLevel};

    use super::*;

    fn model(threshold: ComplexityLevel, cost: f64, latency: f64) -> ModelProfile {
        ModelProfile::builder("M", "m")
            .capabilities([Capability::TextGeneration, Capability::CodeGeneration])
            .complexity_threshold(threshold)
            .max_tokens(4096)
            .cost_per_token(cost)
            .response_time_ms(latency)
            .build()
            .unwrap()
    }

    fn needs(complexity: ComplexityLevel, priority: Priority) -> RequirementsProfile {
        RequirementsProfile::new([Capability::TextGeneration], complexity, 50, priority)
    }

    fn models(entries: Vec<(&str, ModelProfile)>) -> BTreeMap<String, ModelProfile> {
        entries
            .into_iter()
            .map(|(k, m)| (k.to_string(), m))
            .collect()
    }

    #[test]
    fn filters_on_capabilities() {
        let m = model(ComplexityLevel::High, 0.1, 100.0);
        let translation = RequirementsProfile::new(
            [Capability::Translation],
            ComplexityLevel::Low,
            10,
            Priority::Cost,
        );
        assert!(!is_eligible(&m, &translation));
    }

    #[test]
    fn filters_on_threshold_and_tokens() {
        let m = model(ComplexityLevel::Medium, 0.1, 100.0);
        assert!(is_eligible(&m, &needs(ComplexityLevel::Medium, Priority::Cost)));
        assert!(!is_eligible(&m, &needs(ComplexityLevel::High, Priority::Cost)));
        let long = RequirementsProfile::new(
            [Capability::TextGeneration],
            ComplexityLevel::Low,
            4097,
            Priority::Cost,
        );
        assert!(!is_eligible(&m, &long));
    }

    #[test]
    fn speed_prefers_lowest_latency() {
        let registry = models(vec![
            ("slow", model(ComplexityLevel::High, 0.001, 1500.0)),
            ("quick", model(ComplexityLevel::High, 0.002, 500.0)),
        ]);
        let selection = select_from(&needs(ComplexityLevel::Low, Priority::Speed), &registry).unwrap();
        assert_eq!(selection.model_key, "quick");
    }

    #[test]
    fn speed_ties_break_on_cost() {
        let registry = models(vec![
            ("a", model(ComplexityLevel::High, 0.002, 500.0)),
            ("b", model(ComplexityLevel::High, 0.001, 500.0)),
        ]);
        let selection = select_from(&needs(ComplexityLevel::Low, Priority::Speed), &registry).unwrap();
        assert_eq!(selection.model_key, "b");
    }

    #[test]
    fn cost_prefers_cheapest_then_fastest() {
        let registry = models(vec![
            ("a", model(ComplexityLevel::High, 0.001, 900.0)),
            ("b", model(ComplexityLevel::High, 0.001, 300.0)),
            ("c", model(ComplexityLevel::High, 0.01, 100.0)),
        ]);
        let selection = select_from(&needs(ComplexityLevel::Low, Priority::Cost), &registry).unwrap();
        assert_eq!(selection.model_key, "b");
        assert_eq!(selection.decision.reason, "3 of 3 models eligible; ranked by cost per token");
    }

    #[test]
    fn accuracy_prefers_highest_ceiling() {
        let wide = ModelProfile::builder("Wide", "wide")
            .capabilities([
                Capability::TextGeneration,
                Capability::CodeGeneration,
                Capability::Analysis,
            ])
            .complexity_threshold(ComplexityLevel::High)
            .cost_per_token(0.5)
            .build()
            .unwrap();
        let registry = models(vec![
            ("expert", model(ComplexityLevel::Expert, 0.9, 100.0)),
            ("high", model(ComplexityLevel::High, 0.1, 100.0)),
            ("wide", wide),
        ]);
        let profile = needs(ComplexityLevel::Low, Priority::Accuracy);
        assert_eq!(select_from(&profile, &registry).unwrap().model_key, "expert");

        let mut without_expert = registry.clone();
        without_expert.remove("expert");
        assert_eq!(
            select_from(&profile, &without_expert).unwrap().model_key,
            "wide"
        );
    }

    #[test]
    fn accuracy_ties_break_on_cost() {
        let registry = models(vec![
            ("a", model(ComplexityLevel::High, 0.5, 100.0)),
            ("b", model(ComplexityLevel::High, 0.1, 900.0)),
        ]);
        let selection =
            select_from(&needs(ComplexityLevel::Low, Priority::Accuracy), &registry).unwrap();
        assert_eq!(selection.model_key, "b");
        assert_eq!(
            compare(Priority::Accuracy, &registry["a"], &registry["b"]),
            Ordering::Greater
        );
    }

    #[test]
    fn full_ties_resolve_by_name() {
        let registry = models(vec![
            ("zeta", model(ComplexityLevel::High, 0.1, 100.0)),
            ("alpha", model(ComplexityLevel::High, 0.1, 100.0)),
        ]);
        for priority in [Priority::Speed, Priority::Cost, Priority::Accuracy] {
            let selection = select_from(&needs(ComplexityLevel::Low, priority), &registry).unwrap();
            assert_eq!(selection.model_key, "alpha");
        }
    }

    #[test]
    fn level_reflects_prompt_not_model() {
        let registry = models(vec![("expert", model(ComplexityLevel::Expert, 0.1, 100.0))]);
        let low = select_from(&needs(ComplexityLevel::Low, Priority::Cost), &registry).unwrap();
        assert_eq!(low.decision.level, DecisionLevel::Low);
        let expert = select_from(&needs(ComplexityLevel::Expert, Priority::Cost), &registry).unwrap();
        assert_eq!(expert.decision.level, DecisionLevel::High);
    }

    #[test]
    fn nothing_eligible_is_an_error() {
        let registry = models(vec![("low", model(ComplexityLevel::Low, 0.1, 100.0))]);
        let err = select_from(&needs(ComplexityLevel::Expert, Priority::Cost), &registry).unwrap_err();
        match err {
            SwitchyardError::NoEligibleModel {
                complexity,
                registered,
                ..
            } => {
                assert_eq!(complexity, ComplexityLevel::Expert);
                assert_eq!(registered, 1);
            }
            other => panic!("expected NoEligibleModel, got {other:?}"),
        }
    }

    #[test]
    fn empty_registry_is_an_error() {
        let registry = ModelRegistry::new();
        assert!(matches!(
            select(&needs(ComplexityLevel::Low, Priority::Speed), &registry),
            Err(SwitchyardError::NoEligibleModel { registered: 0, .. })
        ));
    }
}
