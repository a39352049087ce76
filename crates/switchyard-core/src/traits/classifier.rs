// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapter trait for external prompt classifiers.
//!
//! A classifier refines the local heuristic analysis, typically by asking a
//! small hosted model to label the prompt. The router calls it under a
//! timeout and falls back to the heuristic result on any failure.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::SwitchyardError;
use crate::types::{Capability, ComplexityLevel, Priority};

/// Partial requirements suggested by an external classifier.
///
/// Every field is optional. Fields left as `None` keep the value the local
/// analyzer produced.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassifierHint {
    #[serde(default)]
    pub capabilities: Option<Vec<Capability>>,
    #[serde(default)]
    pub complexity: Option<ComplexityLevel>,
    #[serde(default)]
    pub estimated_tokens: Option<u32>,
    #[serde(default)]
    pub priority: Option<Priority>,
    /// Free-form explanation from the classifier, kept for logging.
    #[serde(default)]
    pub reasoning: Option<String>,
}

/// An external source of prompt requirements.
#[async_trait]
pub trait PromptClassifier: Send + Sync + 'static {
    /// Returns the human-readable name of this classifier.
    fn name(&self) -> &str;

    /// Returns the semantic version of this classifier.
    fn version(&self) -> semver::Version;

    /// Classifies a prompt. Implementations should not retry internally;
    /// the caller bounds the call with a timeout.
    async fn classify(&self, prompt: &str) -> Result<ClassifierHint, SwitchyardError>;
}
