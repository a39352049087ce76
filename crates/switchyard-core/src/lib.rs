// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Switchyard model router.
//!
//! This crate provides the error taxonomy, the vocabulary types shared by
//! configuration and routing (capabilities, complexity levels, priorities),
//! and the adapter trait for optional external prompt classifiers.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::SwitchyardError;
pub use traits::{ClassifierHint, PromptClassifier};
pub use types::{Capability, ComplexityLevel, DecisionLevel, Priority};
