// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Vocabulary types shared by the analyzer, the selector, and configuration.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// A task type a model can perform. Only set membership matters; there is
/// no ordering between capabilities.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    TextGeneration,
    CodeGeneration,
    Analysis,
    CreativeWriting,
    TechnicalWriting,
    Translation,
    Summarization,
    QuestionAnswering,
    Reasoning,
}

/// Ordered difficulty tier.
///
/// For a prompt this is the assessed difficulty; for a model it is the
/// highest tier the model handles competently.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ComplexityLevel {
    Low,
    Medium,
    High,
    Expert,
}

impl ComplexityLevel {
    /// Numeric rank, 1 (low) through 4 (expert).
    pub fn rank(self) -> u8 {
        match self {
            ComplexityLevel::Low => 1,
            ComplexityLevel::Medium => 2,
            ComplexityLevel::High => 3,
            ComplexityLevel::Expert => 4,
        }
    }
}

/// What the caller cares about most when several models qualify.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Speed,
    Cost,
    #[default]
    Accuracy,
}

/// Qualitative label recorded with every routing decision.
///
/// Four complexity levels collapse into three labels: `High` and `Expert`
/// both map to [`DecisionLevel::High`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum DecisionLevel {
    Low,
    Medium,
    High,
}

impl From<ComplexityLevel> for DecisionLevel {
    fn from(level: ComplexityLevel) -> Self {
        match level {
            ComplexityLevel::Low => DecisionLevel::Low,
            ComplexityLevel::Medium => DecisionLevel::Medium,
            ComplexityLevel::High | ComplexityLevel::Expert => DecisionLevel::High,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn complexity_levels_are_totally_ordered() {
        assert!(ComplexityLevel::Low < ComplexityLevel::Medium);
        assert!(ComplexityLevel::Medium < ComplexityLevel::High);
        assert!(ComplexityLevel::High < ComplexityLevel::Expert);
        let ranks: Vec<u8> = ComplexityLevel::iter().map(ComplexityLevel::rank).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4]);
    }

    #[test]
    fn capability_display_and_parse_agree() {
        for cap in Capability::iter() {
            let s = cap.to_string();
            assert_eq!(Capability::from_str(&s).unwrap(), cap);
        }
        assert_eq!(Capability::CodeGeneration.to_string(), "code_generation");
    }

    #[test]
    fn capability_serde_uses_snake_case() {
        let json = serde_json::to_string(&Capability::QuestionAnswering).unwrap();
        assert_eq!(json, "\"question_answering\"");
        let parsed: Capability = serde_json::from_str("\"creative_writing\"").unwrap();
        assert_eq!(parsed, Capability::CreativeWriting);
    }

    #[test]
    fn priority_defaults_to_accuracy() {
        assert_eq!(Priority::default(), Priority::Accuracy);
        assert_eq!(Priority::from_str("speed").unwrap(), Priority::Speed);
    }

    #[test]
    fn expert_collapses_to_high_label() {
        assert_eq!(DecisionLevel::from(ComplexityLevel::Low), DecisionLevel::Low);
        assert_eq!(
            DecisionLevel::from(ComplexityLevel::Medium),
            DecisionLevel::Medium
        );
        assert_eq!(DecisionLevel::from(ComplexityLevel::High), DecisionLevel::High);
        assert_eq!(
            DecisionLevel::from(ComplexityLevel::Expert),
            DecisionLevel::High
        );
        assert_eq!(DecisionLevel::High.to_string(), "high");
    }
}
