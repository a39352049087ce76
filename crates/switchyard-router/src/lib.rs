// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Prompt analysis and model selection for the Switchyard router.
//!
//! This crate provides:
//! - [`PromptAnalyzer`]: Heuristic prompt analysis producing a [`RequirementsProfile`]
//! - [`ModelRegistry`]: Name-keyed store of validated [`ModelProfile`]s
//! - [`selector`]: Hard filters plus priority-specific ranking
//! - [`RoutingHistory`]: Recorded decisions and derived [`RoutingStats`]
//! - [`ModelRouter`]: The entry point wiring the above together
//!
//! Routing is local and deterministic. An optional
//! [`switchyard_core::PromptClassifier`] may refine the analysis through
//! [`ModelRouter::route_refined`].

pub mod analyzer;
pub mod history;
pub mod presets;
pub mod profile;
pub mod registry;
pub mod router;
pub mod selector;
pub mod signals;

pub use analyzer::{PromptAnalyzer, RequirementsProfile, ScoreBreakdown};
pub use history::{HistoryEntry, RoutingHistory, RoutingStats};
pub use profile::{ModelProfile, ModelProfileBuilder};
pub use registry::ModelRegistry;
pub use router::{ModelRouter, RouteOutcome};
pub use selector::{RoutingDecision, Selection};
