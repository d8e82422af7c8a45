//! Backend registry keyed by backend identifier.

use crate::backend::Backend;
use forge_core::{ForgeError, ForgeResult};
use indexmap::IndexMap;
use std::sync::Arc;

/// Registry of backend strategy objects
///
/// A backend is selected by its identifier at configuration time;
/// the rest of the framework only ever sees the [`Backend`] trait.
pub struct BackendRegistry {
    /// Registered backends by id
    backends: IndexMap<String, Arc<dyn Backend>>,
}

impl BackendRegistry {
    /// Create a new empty registry
    #[must_use]
    pub fn new() -> Self {
        Self {
            backends: IndexMap::new(),
        }
    }

    /// Register a backend under its id
    pub fn register(&mut self, backend: Arc<dyn Backend>) {
        self.backends.insert(backend.id().to_string(), backend);
    }

    /// Find a backend by id
    #[must_use]
    pub fn find(&self, id: &str) -> Option<Arc<dyn Backend>> {
        self.backends.get(id).map(Arc::clone)
    }

    /// Get a backend by id
    ///
    /// # Errors
    ///
    /// Returns [`ForgeError::BackendNotFound`] for an unknown id
    pub fn get(&self, id: &str) -> ForgeResult<Arc<dyn Backend>> {
        self.find(id)
            .ok_or_else(|| ForgeError::BackendNotFound { id: id.to_string() })
    }

    /// List registered backend ids in registration order
    #[must_use]
    pub fn list(&self) -> Vec<String> {
        self.backends.keys().cloned().collect()
    }

    /// Get the count of registered backends
    #[must_use]
    pub fn count(&self) -> usize {
        self.backends.len()
    }
}

impl Default for BackendRegistry {
    fn default() -> Self {
        Self::new()
    }
}
