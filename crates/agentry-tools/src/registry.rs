//! Tool registry for managing available tools

use crate::{Tool, ToolMetadata};
use agentry_core::{Error, Result};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::{Arc, RwLock};
use tracing::debug;

/// Registry for managing tools
///
/// Tool names are unique within a registry: registering a second tool under
/// an existing name is rejected rather than silently replacing the first.
pub struct ToolRegistry {
    tools: RwLock<HashMap<String, Arc<dyn Tool>>>,
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self {
            tools: RwLock::new(HashMap::new()),
        }
    }
}

impl ToolRegistry {
    /// Create a new tool registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateTool`] if a tool with the same name is
    /// already registered.
    pub fn register(&self, tool: Arc<dyn Tool>) -> Result<()> {
        let mut tools = self.tools.write().expect("tool registry lock poisoned");
        match tools.entry(tool.name().to_string()) {
            Entry::Occupied(entry) => Err(Error::DuplicateTool(entry.key().clone())),
            Entry::Vacant(entry) => {
                debug!(tool = %entry.key(), "registered tool");
                entry.insert(tool);
                Ok(())
            }
        }
    }

    /// Get a tool by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        let tools = self.tools.read().expect("tool registry lock poisoned");
        tools.get(name).cloned()
    }

    /// List all registered tools
    pub fn list_tools(&self) -> Vec<Arc<dyn Tool>> {
        let tools = self.tools.read().expect("tool registry lock poisoned");
        tools.values().cloned().collect()
    }

    /// Metadata records of all registered tools
    ///
    /// This is the discovery listing an orchestrator feeds to tool selection.
    pub fn metadata(&self) -> Vec<ToolMetadata> {
        let tools = self.tools.read().expect("tool registry lock poisoned");
        tools.values().map(|tool| tool.metadata().clone()).collect()
    }

    /// Get the number of registered tools
    pub fn len(&self) -> usize {
        let tools = self.tools.read().expect("tool registry lock poisoned");
        tools.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        let tools = self.tools.read().expect("tool registry lock poisoned");
        tools.is_empty()
    }
}
