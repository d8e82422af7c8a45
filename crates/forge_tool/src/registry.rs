//! Tool registry keyed by capability id.

use crate::tool::Tool;
use forge_core::{ForgeError, ForgeResult};
use indexmap::IndexMap;
use std::sync::Arc;

/// Registry of auxiliary tools
///
/// Lookup is by stable capability id. A missing tool is a first-class
/// outcome from [`ToolRegistry::find`], not an exceptional path;
/// [`ToolRegistry::get`] is the convenience form for callers that
/// treat absence as fatal.
pub struct ToolRegistry {
    /// Registered tools by capability id
    tools: IndexMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    /// Create a new empty registry
    #[must_use]
    pub fn new() -> Self {
        Self {
            tools: IndexMap::new(),
        }
    }

    /// Register a tool under its capability id
    ///
    /// A later registration under the same id replaces the earlier one.
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        self.tools.insert(tool.id().to_string(), tool);
    }

    /// Find a tool by capability id
    #[must_use]
    pub fn find(&self, capability: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(capability).map(Arc::clone)
    }

    /// Get a tool by capability id
    ///
    /// # Errors
    ///
    /// Returns [`ForgeError::ToolNotFound`] naming the capability id
    pub fn get(&self, capability: &str) -> ForgeResult<Arc<dyn Tool>> {
        self.find(capability).ok_or_else(|| ForgeError::ToolNotFound {
            capability: capability.to_string(),
        })
    }

    /// Check if a capability id is registered
    #[must_use]
    pub fn contains(&self, capability: &str) -> bool {
        self.tools.contains_key(capability)
    }

    /// List registered capability ids in registration order
    #[must_use]
    pub fn list(&self) -> Vec<String> {
        self.tools.keys().cloned().collect()
    }

    /// Get the count of registered tools
    #[must_use]
    pub fn count(&self) -> usize {
        self.tools.len()
    }

    /// Check if the registry is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
