// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Switchyard model router.

use thiserror::Error;

use crate::types::ComplexityLevel;

/// The primary error type used across routing, registration, and refinement.
///
/// `InvalidInput`, `InvalidModelProfile` and `NoEligibleModel` are terminal for
/// the call that produced them. Nothing in the router retries them or picks a
/// substitute model.
#[derive(Debug, Error)]
pub enum SwitchyardError {
    /// The prompt cannot be routed (empty, whitespace-only, or oversized).
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// A model profile failed construction-time validation.
    #[error("invalid model profile `{model}`: {reason}")]
    InvalidModelProfile { model: String, reason: String },

    /// No registered model passes the hard filters for the routed prompt.
    #[error(
        "no eligible model for complexity {complexity} with {estimated_tokens} estimated tokens \
         requiring [{required}] ({registered} models registered)"
    )]
    NoEligibleModel {
        required: String,
        complexity: ComplexityLevel,
        estimated_tokens: u32,
        registered: usize,
    },

    /// Configuration could not be turned into a working router.
    #[error("configuration error: {0}")]
    Config(String),

    /// An external prompt classifier failed.
    #[error("classifier error: {message}")]
    Classifier {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Operation timed out.
    #[error("operation timed out after {duration:?}")]
    Timeout { duration: std::time::Duration },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl SwitchyardError {
    /// Shorthand for an [`SwitchyardError::InvalidInput`].
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Shorthand for an [`SwitchyardError::InvalidModelProfile`].
    pub fn invalid_profile(model: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidModelProfile {
            model: model.into(),
            reason: reason.into(),
        }
    }
}
