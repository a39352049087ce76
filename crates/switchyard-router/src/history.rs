// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Append-only log of routing decisions and the statistics derived from it.

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};

use serde::Serialize;
use switchyard_core::DecisionLevel;

use crate::selector::RoutingDecision;

/// One routed prompt.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryEntry {
    pub prompt: String,
    pub decision: RoutingDecision,
}

/// Aggregate view over the recorded decisions.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RoutingStats {
    pub total_routes: usize,
    pub decision_distribution: BTreeMap<DecisionLevel, usize>,
    pub model_usage: BTreeMap<String, usize>,
    /// Zero when nothing has been recorded.
    pub mean_estimated_tokens: f64,
}

/// Routing history. Never consulted during selection.
#[derive(Debug, Default)]
pub struct RoutingHistory {
    entries: RwLock<Vec<HistoryEntry>>,
    limit: Option<usize>,
}

impl RoutingHistory {
    /// Unbounded history.
    pub fn new() -> Self {
        Self::default()
    }

    /// History that keeps at most `limit` entries, dropping the oldest.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
            limit: Some(limit),
        }
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Append a decision.
    pub fn record(&self, prompt: impl Into<String>, decision: RoutingDecision) {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.push(HistoryEntry {
            prompt: prompt.into(),
            decision,
        });
        if let Some(limit) = self.limit
            && entries.len() > limit
        {
            let excess = entries.len() - limit;
            entries.drain(..excess);
        }
    }

    /// Snapshot of all entries, oldest first.
    pub fn entries(&self) -> Vec<HistoryEntry> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Keep only the newest `n` entries.
    pub fn truncate_to(&self, n: usize) {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        let excess = entries.len().saturating_sub(n);
        entries.drain(..excess);
    }

    /// Counts per level and per model, and the mean token estimate.
    pub fn stats(&self) -> RoutingStats {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        let mut stats = RoutingStats {
            total_routes: entries.len(),
            ..RoutingStats::default()
        };
        let mut tokens: u64 = 0;
        for entry in entries.iter() {
            let decision = &entry.decision;
            *stats.decision_distribution.entry(decision.level).or_default() += 1;
            *stats
                .model_usage
                .entry(decision.selected_model.clone())
                .or_default() += 1;
            tokens += u64::from(decision.requirements.estimated_tokens());
        }
        if !entries.is_empty() {
            stats.mean_estimated_tokens = tokens as f64 / entries.len() as f64;
        }
        stats
    }
}
