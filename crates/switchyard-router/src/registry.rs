// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Name-keyed store of model profiles.

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};

use tracing::info;

use crate::profile::ModelProfile;

/// Registry of available models, keyed by name.
///
/// Reads take a shared lock; `add` and `remove` serialize on the write lock,
/// so concurrent registrations are never lost. Each mutation is a single map
/// operation, so a poisoned lock still guards a consistent map and is
/// recovered rather than propagated.
#[derive(Debug, Default)]
pub struct ModelRegistry {
    models: RwLock<BTreeMap<String, ModelProfile>>,
}

impl ModelRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry pre-populated with `models`. Later duplicates win.
    pub fn with_models(models: impl IntoIterator<Item = (String, ModelProfile)>) -> Self {
        Self {
            models: RwLock::new(models.into_iter().collect()),
        }
    }

    /// Registers `profile` under `name`, replacing any existing entry.
    pub fn add(&self, name: impl Into<String>, profile: ModelProfile) {
        let name = name.into();
        let mut models = self.models.write().unwrap_or_else(PoisonError::into_inner);
        let replaced = models.insert(name.clone(), profile).is_some();
        info!(model = %name, replaced, "model registered");
    }

    /// Removes the entry for `name`. Returns whether an entry existed.
    pub fn remove(&self, name: &str) -> bool {
        let mut models = self.models.write().unwrap_or_else(PoisonError::into_inner);
        let removed = models.remove(name).is_some();
        if removed {
            info!(model = %name, "model removed");
        }
        removed
    }

    /// Snapshot of every registered model, ordered by name.
    pub fn list(&self) -> BTreeMap<String, ModelProfile> {
        self.models
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Looks up a single model by name.
    pub fn get(&self, name: &str) -> Option<ModelProfile> {
        self.models
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
    }

    /// Returns the number of registered models.
    pub fn len(&self) -> usize {
        self.models.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Returns true if no models are registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
