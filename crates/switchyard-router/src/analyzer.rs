// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Heuristic prompt analysis.
//!
//! Derives a [`RequirementsProfile`] from prompt text alone: no network, no
//! model call, fully deterministic for a given prompt and configuration.
//! The patterns and weights live in [`crate::signals`].

use std::collections::BTreeSet;

use serde::Serialize;
use switchyard_config::model::AnalyzerConfig;
use switchyard_core::{Capability, ClassifierHint, ComplexityLevel, Priority, SwitchyardError};
use tracing::debug;

use crate::signals::{
    PromptText, CAPABILITY_SIGNALS, COMPLEXITY_WEIGHTS, COST_MARKERS, LENGTH_WEIGHT,
    MULTI_PART_CAP, MULTI_PART_MARKERS, MULTI_PART_WEIGHT, SPEED_MARKERS,
};

/// What a prompt needs from a model.
///
/// Always holds at least one capability and an estimate of at least one
/// token.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequirementsProfile {
    capabilities: BTreeSet<Capability>,
    complexity: ComplexityLevel,
    estimated_tokens: u32,
    priority: Priority,
}

impl RequirementsProfile {
    /// Creates a profile. An empty capability set becomes
    /// `{text_generation}`; a zero token estimate becomes 1.
    pub fn new(
        capabilities: impl IntoIterator<Item = Capability>,
        complexity: ComplexityLevel,
        estimated_tokens: u32,
        priority: Priority,
    ) -> Self {
        let mut capabilities: BTreeSet<Capability> = capabilities.into_iter().collect();
        if capabilities.is_empty() {
            capabilities.insert(Capability::TextGeneration);
        }
        Self {
            capabilities,
            complexity,
            estimated_tokens: estimated_tokens.max(1),
            priority,
        }
    }

    pub fn capabilities(&self) -> &BTreeSet<Capability> {
        &self.capabilities
    }

    pub fn complexity(&self) -> ComplexityLevel {
        self.complexity
    }

    pub fn estimated_tokens(&self) -> u32 {
        self.estimated_tokens
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns a copy with the fields the hint sets replaced.
    ///
    /// An empty capability list or a zero token estimate in the hint is
    /// ignored.
    pub fn with_hint(&self, hint: &ClassifierHint) -> Self {
        let capabilities = match &hint.capabilities {
            Some(caps) if !caps.is_empty() => caps.iter().copied().collect(),
            _ => self.capabilities.clone(),
        };
        Self::new(
            capabilities,
            hint.complexity.unwrap_or(self.complexity),
            hint.estimated_tokens
                .filter(|t| *t > 0)
                .unwrap_or(self.estimated_tokens),
            hint.priority.unwrap_or(self.priority),
        )
    }
}

/// Per-signal contributions to a prompt's complexity score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub word_count: usize,
    /// Normalized length contribution, 0 to 1.5.
    pub length: f64,
    /// Sum of matched keyword weights.
    pub keywords: f64,
    /// Multi-part instruction contribution, capped.
    pub multi_part: f64,
    /// Combined score, never negative.
    pub total: f64,
    pub matched_keywords: Vec<&'static str>,
}

/// Turns prompt text into a [`RequirementsProfile`].
#[derive(Debug, Clone, Default)]
pub struct PromptAnalyzer {
    config: AnalyzerConfig,
}

impl PromptAnalyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Analyze a prompt.
    ///
    /// Fails with [`SwitchyardError::InvalidInput`] when the prompt is empty,
    /// whitespace only, or longer than `max_prompt_chars` characters.
    pub fn analyze(&self, prompt: &str) -> Result<RequirementsProfile, SwitchyardError> {
        self.check(prompt)?;
        let text = PromptText::new(prompt);

        let capabilities = detect_capabilities(&text);
        let breakdown = self.score(&text, prompt);
        let complexity = self.level(breakdown.total);
        let estimated_tokens = self.estimate_tokens(breakdown.word_count);
        let priority = self.priority(&text);

        debug!(
            words = breakdown.word_count,
            score = breakdown.total,
            complexity = %complexity,
            estimated_tokens,
            priority = %priority,
            keywords = ?breakdown.matched_keywords,
            "prompt analyzed"
        );

        Ok(RequirementsProfile::new(
            capabilities,
            complexity,
            estimated_tokens,
            priority,
        ))
    }

    /// The complexity score components for a prompt, for inspection.
    pub fn breakdown(&self, prompt: &str) -> Result<ScoreBreakdown, SwitchyardError> {
        self.check(prompt)?;
        Ok(self.score(&PromptText::new(prompt), prompt))
    }

    fn check(&self, prompt: &str) -> Result<(), SwitchyardError> {
        if prompt.trim().is_empty() {
            return Err(SwitchyardError::invalid_input("prompt is empty"));
        }
        let chars = prompt.chars().count();
        if chars > self.config.max_prompt_chars {
            return Err(SwitchyardError::invalid_input(format!(
                "prompt is {chars} characters, maximum is {}",
                self.config.max_prompt_chars
            )));
        }
        Ok(())
    }

    fn score(&self, text: &PromptText, prompt: &str) -> ScoreBreakdown {
        let word_count = prompt.split_whitespace().count();

        let norm = self.config.length_norm_words.max(1) as f64;
        let length = (word_count as f64 / norm).min(1.0) * LENGTH_WEIGHT;

        let matched: Vec<(&'static str, f64)> = COMPLEXITY_WEIGHTS
            .iter()
            .filter(|(pattern, _)| text.matches(pattern))
            .copied()
            .collect();
        // Conflicting signals resolve toward the harder bucket.
        let raising = matched.iter().any(|(_, w)| *w > 0.0);
        let counted: Vec<(&'static str, f64)> = matched
            .into_iter()
            .filter(|(_, w)| !raising || *w > 0.0)
            .collect();
        let keywords: f64 = counted.iter().map(|(_, w)| w).sum();

        let markers: usize = MULTI_PART_MARKERS
            .iter()
            .map(|m| text.lower().matches(m).count())
            .sum::<usize>()
            + text.enumerated_lines();
        let multi_part = (markers as f64 * MULTI_PART_WEIGHT).min(MULTI_PART_CAP);

        ScoreBreakdown {
            word_count,
            length,
            keywords,
            multi_part,
            total: (length + keywords + multi_part).max(0.0),
            matched_keywords: counted.into_iter().map(|(p, _)| p).collect(),
        }
    }

    fn level(&self, score: f64) -> ComplexityLevel {
        if score >= self.config.expert_threshold {
            ComplexityLevel::Expert
        } else if score >= self.config.high_threshold {
            ComplexityLevel::High
        } else if score >= self.config.medium_threshold {
            ComplexityLevel::Medium
        } else {
            ComplexityLevel::Low
        }
    }

    fn estimate_tokens(&self, word_count: usize) -> u32 {
        let estimate = (word_count as f64 * self.config.tokens_per_word).ceil();
        // Float-to-int `as` saturates; NaN becomes 0.
        (estimate as u32).max(1)
    }

    fn priority(&self, text: &PromptText) -> Priority {
        if text.matches_any_words(SPEED_MARKERS) {
            Priority::Speed
        } else if text.matches_any_words(COST_MARKERS) {
            Priority::Cost
        } else {
            self.config.default_priority
        }
    }
}

fn detect_capabilities(text: &PromptText) -> BTreeSet<Capability> {
    CAPABILITY_SIGNALS
        .iter()
        .filter(|(_, patterns)| text.matches_any(patterns))
        .map(|(capability, _)| *capability)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze(prompt: &str) -> RequirementsProfile {
        PromptAnalyzer::default().analyze(prompt).unwrap()
    }

    #[test]
    fn plain_prompt_needs_text_generation() {
        let profile = analyze("Tell me about the weather in spring");
        assert_eq!(
            profile.capabilities().iter().copied().collect::<Vec<_>>(),
            vec![Capability::TextGeneration]
        );
        assert_eq!(profile.complexity(), ComplexityLevel::Low);
        assert_eq!(profile.priority(), Priority::Accuracy);
    }

    #[test]
    fn short_code_request_is_low() {
        let profile = analyze("Write a function to reverse a string");
        assert!(profile.capabilities().contains(&Capability::CodeGeneration));
        assert!(profile.complexity() <= ComplexityLevel::Medium);
    }

    #[test]
    fn consensus_proof_is_expert() {
        let profile = analyze(
            "Design and prove correctness of a distributed consensus algorithm \
             optimized for Byzantine fault tolerance",
        );
        assert_eq!(profile.complexity(), ComplexityLevel::Expert);
        assert!(profile.capabilities().contains(&Capability::Reasoning));
    }

    #[test]
    fn detects_union_of_capabilities() {
        let profile = analyze("Translate this poem into French and summarize it");
        let caps = profile.capabilities();
        assert!(caps.contains(&Capability::Translation));
        assert!(caps.contains(&Capability::CreativeWriting));
        assert!(caps.contains(&Capability::Summarization));
        assert!(!caps.contains(&Capability::TextGeneration));
    }

    #[test]
    fn speed_beats_cost() {
        assert_eq!(analyze("Quick, what is a monad?").priority(), Priority::Speed);
        assert_eq!(
            analyze("Summarize this on a tight budget").priority(),
            Priority::Cost
        );
        assert_eq!(
            analyze("I need a cheap answer asap").priority(),
            Priority::Speed
        );
    }

    #[test]
    fn priority_markers_ignore_longer_words() {
        for prompt in [
            "Write a Python function to implement quicksort algorithm with detailed comments",
            "Design a costume for a school play",
            "Explain how fasting affects metabolism",
        ] {
            assert_eq!(analyze(prompt).priority(), Priority::Accuracy, "{prompt}");
        }
        assert_eq!(
            analyze("Which laptop is cheaper for students?").priority(),
            Priority::Cost
        );
        assert_eq!(
            analyze("Answer quickly: is 17 prime?").priority(),
            Priority::Speed
        );
    }

    #[test]
    fn default_priority_is_configurable() {
        let analyzer = PromptAnalyzer::new(AnalyzerConfig {
            default_priority: Priority::Cost,
            ..AnalyzerConfig::default()
        });
        assert_eq!(
            analyzer.analyze("Tell me a joke").unwrap().priority(),
            Priority::Cost
        );
    }

    #[test]
    fn token_estimate_rounds_up() {
        // 3 words * 1.3 = 3.9
        assert_eq!(analyze("one two three").estimated_tokens(), 4);
        assert_eq!(analyze("x").estimated_tokens(), 2);
    }

    #[test]
    fn conflicting_keywords_prefer_harder_bucket() {
        let analyzer = PromptAnalyzer::default();
        let breakdown = analyzer
            .breakdown("Give a brief summary of this algorithm")
            .unwrap();
        assert_eq!(breakdown.matched_keywords, vec!["algorithm"]);
        assert!((breakdown.keywords - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn lowering_keywords_never_go_negative() {
        let breakdown = PromptAnalyzer::default()
            .breakdown("hello, a brief simple list")
            .unwrap();
        assert!(breakdown.keywords < 0.0);
        assert!(breakdown.total >= 0.0);
    }

    #[test]
    fn multi_part_is_capped() {
        let breakdown = PromptAnalyzer::default()
            .breakdown("Do a and b and c and d and e then f; g")
            .unwrap();
        assert!((breakdown.multi_part - MULTI_PART_CAP).abs() < f64::EPSILON);
    }

    #[test]
    fn enumerations_count_as_parts() {
        let breakdown = PromptAnalyzer::default()
            .breakdown("Steps:\n1. parse\n2. check")
            .unwrap();
        assert!((breakdown.multi_part - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn long_prompts_score_higher() {
        let analyzer = PromptAnalyzer::default();
        let short = analyzer.breakdown("describe the ocean").unwrap();
        let long = analyzer
            .breakdown(&"describe the ocean ".repeat(100))
            .unwrap();
        assert!(long.length > short.length);
        assert!((long.length - LENGTH_WEIGHT).abs() < f64::EPSILON);
    }

    #[test]
    fn rejects_empty_and_blank() {
        let analyzer = PromptAnalyzer::default();
        for prompt in ["", "   ", "\n\t"] {
            assert!(matches!(
                analyzer.analyze(prompt),
                Err(SwitchyardError::InvalidInput { .. })
            ));
        }
    }

    #[test]
    fn rejects_oversized_prompt() {
        let analyzer = PromptAnalyzer::new(AnalyzerConfig {
            max_prompt_chars: 10,
            ..AnalyzerConfig::default()
        });
        assert!(analyzer.analyze("0123456789").is_ok());
        let err = analyzer.analyze("0123456789a").unwrap_err();
        assert!(err.to_string().contains("11 characters"));
    }

    #[test]
    fn hint_overrides_only_set_fields() {
        let base = analyze("Tell me about rivers");
        let hint = ClassifierHint {
            complexity: Some(ComplexityLevel::High),
            capabilities: Some(Vec::new()),
            estimated_tokens: Some(0),
            ..ClassifierHint::default()
        };
        let refined = base.with_hint(&hint);
        assert_eq!(refined.complexity(), ComplexityLevel::High);
        assert_eq!(refined.capabilities(), base.capabilities());
        assert_eq!(refined.estimated_tokens(), base.estimated_tokens());
        assert_eq!(refined.priority(), base.priority());
    }

    #[test]
    fn profile_constructor_upholds_invariants() {
        let profile = RequirementsProfile::new(Vec::new(), ComplexityLevel::Low, 0, Priority::Speed);
        assert_eq!(profile.estimated_tokens(), 1);
        assert!(profile.capabilities().contains(&Capability::TextGeneration));
    }
}
