// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock prompt classifier for deterministic refinement tests.
//!
//! `MockClassifier` implements `PromptClassifier` with a fixed hint, an
//! optional artificial delay and an optional failure, so timeout and
//! fallback paths can be driven without any network.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use switchyard_core::{ClassifierHint, PromptClassifier, SwitchyardError};

/// A classifier that returns a pre-configured hint.
pub struct MockClassifier {
    hint: ClassifierHint,
    delay: Option<Duration>,
    fail: bool,
    calls: AtomicUsize,
}

impl MockClassifier {
    /// A classifier that answers immediately with an empty hint.
    pub fn new() -> Self {
        Self::with_hint(ClassifierHint::default())
    }

    /// A classifier that answers immediately with `hint`.
    pub fn with_hint(hint: ClassifierHint) -> Self {
        Self {
            hint,
            delay: None,
            fail: false,
            calls: AtomicUsize::new(0),
        }
    }

    /// A classifier whose every call fails.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }

    /// Sleep for `delay` (on the tokio clock) before answering.
    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Number of `classify` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PromptClassifier for MockClassifier {
    fn name(&self) -> &str {
        "mock-classifier"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    async fn classify(&self, _prompt: &str) -> Result<ClassifierHint, SwitchyardError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail {
            return Err(SwitchyardError::Classifier {
                message: "mock classifier failure".to_string(),
                source: None,
            });
        }
        Ok(self.hint.clone())
    }
}
