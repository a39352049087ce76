// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Switchyard integration tests.
//!
//! # Components
//!
//! - [`fixtures`] - Fast / balanced / expert model profiles and routers built from them
//! - [`MockClassifier`] - Prompt classifier with a fixed hint, programmable delay and failure

pub mod fixtures;
pub mod mock_classifier;

pub use mock_classifier::MockClassifier;
