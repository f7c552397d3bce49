//! Tool trait definition

use crate::{ToolMetadata, ToolOutput};
use agentry_core::{ChatRequest, Result};
use async_trait::async_trait;
use serde_json::Value;

/// Trait for tools an orchestrator can discover and invoke
///
/// Every tool exposes a metadata record (name, description, input schema) and
/// a single invocation entry point returning the standard [`ToolOutput`]
/// envelope. Orchestrators select among registered tools using the metadata
/// and call them uniformly through `invoke`.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Invoke the tool with the given arguments
    ///
    /// Implementations return the standard output envelope; failures
    /// propagate to the invoker with whatever error the underlying
    /// implementation produced.
    async fn invoke(&self, request: ChatRequest) -> Result<ToolOutput>;

    /// Metadata describing this tool
    fn metadata(&self) -> &ToolMetadata;

    /// The tool's name
    fn name(&self) -> &str {
        &self.metadata().name
    }

    /// The tool's description, used for tool selection
    fn description(&self) -> &str {
        &self.metadata().description
    }

    /// JSON Schema describing the tool's input parameters
    fn input_schema(&self) -> &Value {
        &self.metadata().input_schema
    }
}
