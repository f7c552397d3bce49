//! Tool metadata record

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Metadata describing a tool to an orchestrator
///
/// The name must be unique within a [`crate::ToolRegistry`]; the description
/// feeds tool-selection prompts. The input schema is always populated: a
/// tool is never usable without one, so constructors require it up front.
/// The record is immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolMetadata {
    /// Tool name (must be unique within a registry)
    pub name: String,

    /// Description of what the tool does
    pub description: String,

    /// JSON Schema for the tool's input parameters
    pub input_schema: Value,
}

impl ToolMetadata {
    /// Create a new metadata record
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        input_schema: Value,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            input_schema,
        }
    }
}
